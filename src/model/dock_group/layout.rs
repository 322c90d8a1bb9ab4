//! Panel placement: proportional split layout and per-area fitting

use tracing::trace;

use super::{DockGroup, LayoutMode};
use crate::model::geometry::Rect;
use crate::panel::{Axis, Panel};

impl<P: Panel> DockGroup<P> {
    /// Place every panel (and handle) from the group bounds and the shares.
    ///
    /// Split view: the free extent (group extent minus one handle thickness
    /// per gap) is divided by proportion; panels are laid consecutively along
    /// the axis with each handle flush after its panel. Tabbed view: every
    /// panel is fitted to the content area. Float: untouched.
    pub fn layout_panels(&mut self) {
        if self.panels.is_empty() {
            return;
        }

        match self.layout_mode() {
            LayoutMode::Split(axis) => self.layout_split(axis),
            LayoutMode::Tabbed => {
                for index in 0..self.panels.len() {
                    self.fit_panel_to_edge(index);
                }
            }
            LayoutMode::Unmanaged => {}
        }
    }

    fn layout_split(&mut self, axis: Axis) {
        let rect = self.rect;
        let handle_size = self.config.resize_handle_size;
        let count = self.panels.len();
        let free = (rect.extent(axis) - handle_size * (count - 1) as f64).max(0.0);
        let start = rect.start(axis);

        let mut offset = 0.0;
        for (i, panel) in self.panels.iter_mut().enumerate() {
            let share = self.proportions.get(i).copied().unwrap_or(1.0 / count as f64);
            let extent = share * free;
            panel.set_geometry(rect.with_span(axis, start + offset, extent));
            offset += extent;

            if i + 1 < count {
                if let Some(handle) = self.handles.get_mut(i) {
                    handle.axis = axis;
                    handle.position = offset;
                    handle.size = handle_size;
                }
                offset += handle_size;
            }
        }

        trace!(?axis, free, count, "split layout");
    }

    /// Rect a single panel takes under this group's area rule, or None for
    /// Float groups, which leave panel geometry alone
    pub fn fitted_rect(&self) -> Option<Rect> {
        self.area
            .rules()
            .fit(self.rect, self.enable_resizing, &self.config)
    }

    /// Fit one panel inside the group border (and grip, or tab strip band)
    pub fn fit_panel_to_edge(&mut self, index: usize) {
        let Some(rect) = self.fitted_rect() else {
            return;
        };
        if let Some(panel) = self.panels.get_mut(index) {
            panel.set_geometry(rect);
        }
    }

    /// Rebuild shares from the panels' current extents along the split axis.
    ///
    /// Handle drags resize two panels directly; this folds those absolute
    /// sizes back into shares so later resizes of the group redistribute
    /// space correctly.
    pub fn recompute_proportions_from_geometry(&mut self) {
        let Some(axis) = self.split_axis() else {
            return;
        };

        let extents: Vec<f64> = self
            .panels
            .iter()
            .map(|p| p.geometry().extent(axis).max(0.0))
            .collect();
        let total: f64 = extents.iter().sum();
        if total <= 0.0 {
            return;
        }

        self.proportions = extents.iter().map(|e| e / total).collect();
        self.proportions_pinned = true;
        trace!(proportions = ?self.proportions, "proportions recomputed from geometry");
    }
}
