//! Geometry primitives shared by the layout engine
//!
//! All coordinates are logical units in the host's parent space. Layout math
//! works along one axis at a time, so `Rect` exposes start/extent accessors
//! keyed by `Axis` instead of callers matching on width vs height.

use crate::panel::Axis;

/// A point in window (or parent) coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate along the given axis
    #[inline]
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// This point relative to `origin`
    pub fn relative_to(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// Leading coordinate along `axis` (x or y)
    #[inline]
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Size along `axis` (width or height)
    #[inline]
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Copy with position and size replaced along `axis`; the cross axis is kept.
    pub fn with_span(&self, axis: Axis, start: f64, extent: f64) -> Rect {
        match axis {
            Axis::Horizontal => Rect::new(start, self.y, extent, self.height),
            Axis::Vertical => Rect::new(self.x, start, self.width, extent),
        }
    }

    /// Copy with only the size replaced along `axis`
    pub fn with_extent(&self, axis: Axis, extent: f64) -> Rect {
        self.with_span(axis, self.start(axis), extent)
    }
}

/// Fuzzy float equality, scaled to the magnitude of the operands
#[inline]
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    (a - b).abs() * 1e12 <= a.abs().min(b.abs()).max(1.0)
}

/// Whether a share is "unset" (zero within tolerance)
#[inline]
pub fn is_unset(share: f64) -> bool {
    share.abs() < f64::EPSILON
}
