//! Drag interaction state machine
//!
//! Two independent sequences, both starting and ending in `Idle`:
//! - edge drag: the group's outer grip changes the group's own size
//! - handle drag: a divider moves, resizing the two panels it separates
//!
//! Session scratch (press coordinate, starting extent, grab offset) lives in
//! the `DragState` variant and is dropped when the sequence ends.

use tracing::{debug, trace};

use super::DockGroup;
use crate::model::geometry::Point;
use crate::panel::Panel;

/// Current pointer interaction of a group
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// Resizing the whole group from its outer edge
    EdgeDragging {
        /// Pointer coordinate along the edge axis at press
        start_coord: f64,
        /// Group extent along the edge axis at press
        start_extent: f64,
    },
    /// Moving the handle at `index`
    HandleDragging {
        index: usize,
        /// Pointer offset from the handle's leading edge at press
        grab_offset: f64,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }
}

/// Answer to a handle "moving" request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragDecision {
    Accepted,
    /// The candidate would squeeze a neighbor to the minimum extent or less;
    /// the handle stays at its last accepted position
    Rejected,
}

impl DragDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, DragDecision::Accepted)
    }
}

impl<P: Panel> DockGroup<P> {
    // ------------------------------------------------------------------------
    // Handle drag
    // ------------------------------------------------------------------------

    /// Handle `index` wants to move to `candidate` (offset from the group
    /// origin along the split axis).
    ///
    /// Accepted only if both neighbors keep more than the minimum extent; on
    /// acceptance the two neighbors are resized directly and the handle moves.
    pub fn handle_moving(&mut self, index: usize, candidate: f64) -> DragDecision {
        let Some(axis) = self.split_axis() else {
            return DragDecision::Rejected;
        };
        if !candidate.is_finite() {
            return DragDecision::Rejected;
        }
        if index >= self.handles.len() || index + 1 >= self.panels.len() {
            return DragDecision::Rejected;
        }

        let handle_size = self.config.resize_handle_size;
        let min_extent = self.config.min_panel_extent;

        let prev_span = if index > 0 {
            candidate - self.handles[index - 1].position - handle_size
        } else {
            candidate
        };
        let next_span = if index == self.handles.len() - 1 {
            self.rect.extent(axis) - candidate - handle_size
        } else {
            self.handles[index + 1].position - candidate - handle_size
        };

        if prev_span <= min_extent || next_span <= min_extent {
            trace!(index, candidate, prev_span, next_span, "handle move rejected");
            return DragDecision::Rejected;
        }

        let start = self.rect.start(axis);

        let next = &mut self.panels[index + 1];
        let next_rect = next
            .geometry()
            .with_span(axis, start + candidate + handle_size, next_span);
        next.set_geometry(next_rect);

        let prev = &mut self.panels[index];
        let prev_rect = prev.geometry().with_extent(axis, prev_span);
        prev.set_geometry(prev_rect);

        self.handles[index].position = candidate;

        trace!(index, candidate, prev_span, next_span, "handle move accepted");
        DragDecision::Accepted
    }

    /// A handle drag finished: fold live sizes back into shares and relayout
    /// everything so handle offsets and panels agree again.
    pub fn handle_moved(&mut self) {
        self.recompute_proportions_from_geometry();
        self.layout_panels();
        debug!(proportions = ?self.proportions, "handle drag finished");
    }

    /// Start dragging handle `index` from window point `pos`
    pub fn begin_handle_drag(&mut self, index: usize, pos: Point) -> bool {
        let Some(axis) = self.split_axis() else {
            return false;
        };
        let Some(handle) = self.handles.get(index) else {
            return false;
        };

        let grab_offset = pos.along(axis) - self.rect.start(axis) - handle.position;
        self.drag = DragState::HandleDragging { index, grab_offset };
        debug!(index, grab_offset, "handle drag started");
        true
    }

    /// Pointer moved during a handle drag. None when no handle drag is active.
    pub fn update_handle_drag(&mut self, pos: Point) -> Option<DragDecision> {
        let DragState::HandleDragging { index, grab_offset } = self.drag else {
            return None;
        };
        let axis = self.split_axis()?;
        let candidate = pos.along(axis) - self.rect.start(axis) - grab_offset;
        Some(self.handle_moving(index, candidate))
    }

    // ------------------------------------------------------------------------
    // Edge drag
    // ------------------------------------------------------------------------

    /// Whether a point local to the group is on the outer resize grip
    pub fn accepts_edge_resize(&self, local: Point) -> bool {
        if !self.enable_resizing {
            return false;
        }
        self.area.rules().in_edge_grip(
            local,
            (self.rect.width, self.rect.height),
            self.config.resize_handle_size,
        )
    }

    /// Start an edge drag from window point `pos`. Only edge areas resize.
    pub fn begin_edge_drag(&mut self, pos: Point) -> bool {
        let Some(edge) = self.area.rules().edge else {
            return false;
        };

        let start_coord = pos.along(edge.axis);
        let start_extent = self.rect.extent(edge.axis);
        self.drag = DragState::EdgeDragging {
            start_coord,
            start_extent,
        };
        debug!(area = ?self.area, start_coord, start_extent, "edge drag started");
        true
    }

    /// Pointer moved during an edge drag.
    ///
    /// Returns the new panel size when it changed. Dragging away from the
    /// container edge grows Left/Top groups; dragging toward it grows
    /// Right/Bottom groups.
    pub fn update_edge_drag(&mut self, pos: Point) -> Option<f64> {
        let DragState::EdgeDragging {
            start_coord,
            start_extent,
        } = self.drag
        else {
            return None;
        };
        let edge = self.area.rules().edge?;

        let delta = pos.along(edge.axis) - start_coord;
        let size = (start_extent + edge.growth * delta).max(0.0);
        if self.set_panel_size(size) {
            trace!(size, "edge drag resized group");
            Some(size)
        } else {
            None
        }
    }

    // ------------------------------------------------------------------------
    // Termination
    // ------------------------------------------------------------------------

    /// Pointer released: end whichever drag is active and return it.
    ///
    /// A finished handle drag reconciles shares; an edge drag needs nothing
    /// further since it only changed the group's own size.
    pub fn end_drag(&mut self) -> DragState {
        let finished = std::mem::take(&mut self.drag);
        if let DragState::HandleDragging { .. } = finished {
            self.handle_moved();
        }
        finished
    }

    /// Pointer capture lost mid-drag; handled exactly like a release so the
    /// group never stays stuck in a dragging state
    pub fn pointer_capture_lost(&mut self) -> DragState {
        if !self.drag.is_idle() {
            debug!(drag = ?self.drag, "pointer capture lost, ending drag");
        }
        self.end_drag()
    }
}
