//! Message types for the Elm-style architecture
//!
//! Every event the host delivers to a dock group is one of these.

use crate::model::{Point, Rect};
use crate::panel::{DockWidget, PanelId};

/// Inbound events for a dock group
#[derive(Debug, Clone)]
pub enum DockMsg<P = DockWidget> {
    // === Pointer ===
    /// Left button pressed at a window position
    PointerPressed { pos: Point },
    /// Pointer moved (hovering or dragging)
    PointerMoved { pos: Point },
    /// Left button released
    PointerReleased { pos: Point },
    /// The window lost pointer capture mid-interaction
    PointerCaptureLost,

    // === Geometry ===
    /// The group's own bounds changed
    GeometryChanged { old: Rect, new: Rect },

    // === Handles ===
    /// A handle asks to move to `candidate` (offset from the group origin)
    HandleMoving { index: usize, candidate: f64 },
    /// A handle drag completed
    HandleMoved,

    // === Tabs ===
    /// The tab strip's active index changed
    TabActivated(usize),

    // === Membership ===
    InsertPanel(P),
    RemovePanel(PanelId),
}

impl<P> DockMsg<P> {
    /// Short name for log spans
    pub fn name(&self) -> &'static str {
        match self {
            DockMsg::PointerPressed { .. } => "PointerPressed",
            DockMsg::PointerMoved { .. } => "PointerMoved",
            DockMsg::PointerReleased { .. } => "PointerReleased",
            DockMsg::PointerCaptureLost => "PointerCaptureLost",
            DockMsg::GeometryChanged { .. } => "GeometryChanged",
            DockMsg::HandleMoving { .. } => "HandleMoving",
            DockMsg::HandleMoved => "HandleMoved",
            DockMsg::TabActivated(_) => "TabActivated",
            DockMsg::InsertPanel(_) => "InsertPanel",
            DockMsg::RemovePanel(_) => "RemovePanel",
        }
    }
}
