//! Resize handles between adjacent panels

use winit::window::CursorIcon;

use super::geometry::Rect;
use crate::panel::Axis;

/// A fixed-thickness divider between `panels[index]` and `panels[index + 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeHandle {
    /// Axis the handle moves along
    pub axis: Axis,
    /// Position among sibling handles
    pub index: usize,
    /// Offset along `axis`, relative to the group origin
    pub position: f64,
    /// Thickness along `axis`
    pub size: f64,
}

impl ResizeHandle {
    pub fn new(axis: Axis, index: usize, size: f64) -> Self {
        Self {
            axis,
            index,
            position: 0.0,
            size,
        }
    }

    /// Hit-testing rectangle in the group's parent space
    pub fn rect_in(&self, group: Rect) -> Rect {
        group.with_span(self.axis, group.start(self.axis) + self.position, self.size)
    }

    pub fn cursor(&self) -> CursorIcon {
        self.axis.resize_cursor()
    }
}
