//! Dock group - the layout engine for one set of sibling panels
//!
//! A group owns its panels in layout order, a parallel list of proportional
//! shares that always sums to 1.0, one resize handle between each pair of
//! neighbors in split view, and a tab strip. Geometry is recomputed from the
//! group bounds and the shares whenever either changes.

mod drag;
mod layout;

use tracing::debug;
use winit::window::CursorIcon;

use super::geometry::{fuzzy_eq, is_unset, Rect};
use super::handle::ResizeHandle;
use super::tab_strip::TabStrip;
use crate::config::DockConfig;
use crate::error::DockError;
use crate::panel::{Area, Axis, DisplayType, DockWidget, Panel, PanelId};

pub use drag::{DragDecision, DragState};

/// How `layout_panels` places panels for the current area and display type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Panels side by side along an axis, handles between them
    Split(Axis),
    /// Every panel fitted to the content area, one visible at a time
    Tabbed,
    /// Float groups leave panel geometry to the host
    Unmanaged,
}

/// Container managing one set of sibling panels under one layout mode
#[derive(Debug, Clone)]
pub struct DockGroup<P: Panel = DockWidget> {
    area: Area,
    display_type: DisplayType,
    enable_resizing: bool,
    config: DockConfig,

    /// Own bounds in the parent's space
    rect: Rect,
    /// Outward-facing size requested by edge drags
    panel_size: f64,

    panels: Vec<P>,
    /// One share per panel, summing to 1.0
    proportions: Vec<f64>,
    /// Whether shares came from a drag or an explicit call; until then every
    /// slot counts as unset and normalization hands out equal shares
    proportions_pinned: bool,
    handles: Vec<ResizeHandle>,
    tab_strip: TabStrip,

    drag: DragState,
    cursor: CursorIcon,
}

impl<P: Panel> DockGroup<P> {
    /// Create an empty group with default tunables
    pub fn new(area: Area, display_type: DisplayType) -> Self {
        Self::with_config(area, display_type, DockConfig::default())
    }

    pub fn with_config(area: Area, display_type: DisplayType, config: DockConfig) -> Self {
        Self {
            area,
            display_type,
            enable_resizing: true,
            config,
            rect: Rect::default(),
            panel_size: 0.0,
            panels: Vec::new(),
            proportions: Vec::new(),
            proportions_pinned: false,
            handles: Vec::new(),
            tab_strip: TabStrip::new(),
            drag: DragState::Idle,
            cursor: CursorIcon::Default,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn area(&self) -> Area {
        self.area
    }

    pub fn display_type(&self) -> DisplayType {
        self.display_type
    }

    pub fn enable_resizing(&self) -> bool {
        self.enable_resizing
    }

    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn panel_size(&self) -> f64 {
        self.panel_size
    }

    /// A group is open while it holds at least one panel
    pub fn is_open(&self) -> bool {
        !self.panels.is_empty()
    }

    pub fn panels(&self) -> &[P] {
        &self.panels
    }

    pub fn panel(&self, index: usize) -> Option<&P> {
        self.panels.get(index)
    }

    pub fn panel_mut(&mut self, index: usize) -> Option<&mut P> {
        self.panels.get_mut(index)
    }

    pub fn panel_index(&self, id: PanelId) -> Option<usize> {
        self.panels.iter().position(|p| p.id() == id)
    }

    pub fn proportions(&self) -> &[f64] {
        &self.proportions
    }

    pub fn handles(&self) -> &[ResizeHandle] {
        &self.handles
    }

    pub fn tab_strip(&self) -> &TabStrip {
        &self.tab_strip
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Record the cursor shown over this group; returns whether it changed
    pub fn set_cursor(&mut self, cursor: CursorIcon) -> bool {
        if self.cursor == cursor {
            return false;
        }
        self.cursor = cursor;
        true
    }

    pub fn layout_mode(&self) -> LayoutMode {
        match self.area {
            Area::Float => LayoutMode::Unmanaged,
            Area::Center => LayoutMode::Tabbed,
            _ if self.display_type == DisplayType::TabbedView => LayoutMode::Tabbed,
            _ => match self.area.rules().layout_axis {
                Some(axis) => LayoutMode::Split(axis),
                None => LayoutMode::Tabbed,
            },
        }
    }

    /// Axis handles are dragged along, if this group lays out a split
    pub fn split_axis(&self) -> Option<Axis> {
        match self.layout_mode() {
            LayoutMode::Split(axis) => Some(axis),
            _ => None,
        }
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    /// Change the dock area; returns whether it changed
    pub fn set_area(&mut self, area: Area) -> bool {
        if self.area == area {
            return false;
        }
        debug!(from = ?self.area, to = ?area, "dock group area changed");
        self.area = area;
        self.rebuild_handles();
        self.refresh_geometry();
        true
    }

    /// Change split vs tabbed display; returns whether it changed
    pub fn set_display_type(&mut self, display_type: DisplayType) -> bool {
        if self.display_type == display_type {
            return false;
        }
        debug!(from = ?self.display_type, to = ?display_type, "dock group display type changed");
        self.display_type = display_type;
        self.rebuild_handles();
        self.apply_visibility();
        self.layout_panels();
        true
    }

    /// Enable or disable the outer edge grip; returns whether it changed
    pub fn set_enable_resizing(&mut self, enable_resizing: bool) -> bool {
        if self.enable_resizing == enable_resizing {
            return false;
        }
        self.enable_resizing = enable_resizing;
        self.layout_panels();
        true
    }

    /// Set the outward-facing size; values fuzzily equal to the current one
    /// are ignored. Returns whether it changed.
    pub fn set_panel_size(&mut self, panel_size: f64) -> bool {
        if fuzzy_eq(self.panel_size, panel_size) {
            return false;
        }
        self.panel_size = panel_size;
        true
    }

    // ------------------------------------------------------------------------
    // Panel membership
    // ------------------------------------------------------------------------

    /// Append a panel and make its tab active. Returns its index.
    pub fn insert_panel(&mut self, mut panel: P) -> usize {
        let title = panel.title().to_string();
        let id = panel.id();

        // Split view shows every panel, whatever state it arrived in
        if self.display_type == DisplayType::SplitView {
            panel.set_visible(true);
        }
        self.panels.push(panel);
        self.proportions.push(0.0);
        self.normalize_proportions();

        if self.display_type == DisplayType::SplitView && self.panels.len() > 1 {
            let handle = self.new_handle();
            self.handles.push(handle);
        }

        let index = self.panels.len() - 1;
        self.tab_strip.add_tab(title);
        self.update_tab_strip();
        if let Some(active) = self.tab_strip.set_current_index(index) {
            self.on_tab_changed(active);
        }

        self.fit_panel_to_edge(index);
        if self.display_type == DisplayType::SplitView {
            self.reorder_handles();
        }
        self.layout_panels();

        debug!(
            panel = ?id,
            index,
            count = self.panels.len(),
            area = ?self.area,
            "panel inserted"
        );
        index
    }

    /// Detach a panel by identity and hand it back.
    ///
    /// Fails with `PanelNotFound` (leaving the group untouched) if the panel
    /// is not a member.
    pub fn remove_panel(&mut self, id: PanelId) -> Result<P, DockError> {
        let index = self.panel_index(id).ok_or(DockError::PanelNotFound(id))?;

        // The share list is trimmed from the tail by normalize_proportions
        let panel = self.panels.remove(index);

        self.tab_strip.remove_tab(index);
        if let Some(current) = self.tab_strip.current_index() {
            if let Some(active) = self.tab_strip.set_current_index(current) {
                self.on_tab_changed(active);
            }
        }

        // Handles are interchangeable dividers identified only by index, so
        // trimming the last one and re-indexing keeps handles[i] between
        // panels[i] and panels[i + 1].
        self.handles.pop();
        if let DragState::HandleDragging { index: dragged, .. } = self.drag {
            if dragged >= self.handles.len() {
                self.drag = DragState::Idle;
            }
        }

        self.normalize_proportions();
        self.reorder_handles();
        self.layout_panels();

        debug!(panel = ?id, index, count = self.panels.len(), "panel removed");
        Ok(panel)
    }

    // ------------------------------------------------------------------------
    // Proportions
    // ------------------------------------------------------------------------

    /// Resize the share list to the panel count and rescale it to sum to 1.0.
    ///
    /// Surplus slots are dropped from the tail; new or zero slots get a
    /// provisional `1/count` share first. An empty group forgets any pinned
    /// shares so the next panels start out equal.
    pub fn normalize_proportions(&mut self) {
        let count = self.panels.len();
        if count == 0 {
            self.proportions.clear();
            self.proportions_pinned = false;
            return;
        }

        self.proportions.resize(count, 0.0);
        let provisional = 1.0 / count as f64;
        for share in &mut self.proportions {
            if !self.proportions_pinned || is_unset(*share) {
                *share = provisional;
            }
        }

        let sum: f64 = self.proportions.iter().sum();
        for share in &mut self.proportions {
            *share /= sum;
        }
    }

    /// Pin caller-supplied shares (normalized to sum to 1.0) and relayout.
    ///
    /// Missing trailing shares count as unset; extra ones are dropped.
    pub fn set_proportions(&mut self, shares: &[f64]) {
        self.proportions = shares
            .iter()
            .map(|s| if s.is_finite() && *s > 0.0 { *s } else { 0.0 })
            .collect();
        self.proportions_pinned = true;
        self.normalize_proportions();
        self.layout_panels();
    }

    // ------------------------------------------------------------------------
    // Handles
    // ------------------------------------------------------------------------

    fn new_handle(&self) -> ResizeHandle {
        let axis = self.area.rules().layout_axis.unwrap_or(Axis::Horizontal);
        ResizeHandle::new(axis, self.handles.len(), self.config.resize_handle_size)
    }

    /// Renumber handles by position so `handles[i]` separates panels i and i+1
    pub fn reorder_handles(&mut self) {
        for (index, handle) in self.handles.iter_mut().enumerate() {
            handle.index = index;
        }
    }

    /// Recreate handles after an area or display type change
    fn rebuild_handles(&mut self) {
        self.drag = DragState::Idle;
        self.handles.clear();
        if self.display_type == DisplayType::SplitView {
            for _ in 1..self.panels.len() {
                let handle = self.new_handle();
                self.handles.push(handle);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Tabs and visibility
    // ------------------------------------------------------------------------

    /// Activate tab `index`, updating panel visibility in tabbed view
    pub fn set_current_tab(&mut self, index: usize) -> Result<(), DockError> {
        let active = self
            .tab_strip
            .set_current_index(index)
            .ok_or(DockError::TabOutOfRange {
                index,
                len: self.tab_strip.len(),
            })?;
        self.on_tab_changed(active);
        Ok(())
    }

    /// Active-index notification from the tab strip
    fn on_tab_changed(&mut self, active: usize) {
        if self.display_type != DisplayType::TabbedView {
            return;
        }
        debug!(active, count = self.panels.len(), "active tab changed");
        for (i, panel) in self.panels.iter_mut().enumerate() {
            panel.set_visible(i == active);
        }
    }

    /// Make visibility match the display type
    fn apply_visibility(&mut self) {
        match self.display_type {
            DisplayType::SplitView => {
                for panel in &mut self.panels {
                    panel.set_visible(true);
                }
            }
            DisplayType::TabbedView => {
                if let Some(active) = self.tab_strip.current_index() {
                    self.on_tab_changed(active);
                }
            }
        }
    }

    // ------------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------------

    /// Bounds changed (typically because the parent relaid out)
    pub fn set_geometry(&mut self, rect: Rect) {
        let old = self.rect;
        self.rect = rect;
        if old != rect {
            debug!(?old, new = ?rect, "dock group geometry changed");
        }
        self.refresh_geometry();
    }

    /// Strip spans the top of the group and only shows in the center area
    fn update_tab_strip(&mut self) {
        self.tab_strip.visible = self.area == Area::Center;
        self.tab_strip.rect = Rect::new(
            self.rect.x,
            self.rect.y,
            self.rect.width,
            self.config.tab_strip_height,
        );
    }

    /// Recompute tab strip, panel and handle geometry from the group bounds.
    /// Nothing to do while the group is empty.
    fn refresh_geometry(&mut self) {
        if self.panels.is_empty() {
            return;
        }

        self.update_tab_strip();
        for index in 0..self.panels.len() {
            self.fit_panel_to_edge(index);
        }
        if self.display_type == DisplayType::SplitView {
            self.reorder_handles();
        }
        self.layout_panels();
    }
}
