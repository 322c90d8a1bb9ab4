//! Dock areas, display types and the per-area geometry rules
//!
//! Every geometric decision that depends on where a group is docked (layout
//! axis, which edge carries the resize grip, which way an edge drag grows the
//! group, how panels are inset) comes from a single `AreaRules` lookup.

use serde::{Deserialize, Serialize};
use winit::window::CursorIcon;

use crate::config::DockConfig;
use crate::model::{Point, Rect};

/// Slot a dock group occupies in the host container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    Left,
    Right,
    Top,
    Bottom,
    Center,
    Float,
}

impl Area {
    /// All areas for iteration
    pub const ALL: [Area; 6] = [
        Area::Left,
        Area::Right,
        Area::Top,
        Area::Bottom,
        Area::Center,
        Area::Float,
    ];

    /// Geometry rules for this area
    pub fn rules(&self) -> AreaRules {
        match self {
            Area::Left => AreaRules {
                layout_axis: Some(Axis::Horizontal),
                edge: Some(EdgeRule {
                    axis: Axis::Horizontal,
                    grip: GripSide::End,
                    growth: 1.0,
                }),
                inset: InsetRule::Edge {
                    axis: Axis::Horizontal,
                    trailing_pad: 2.0,
                },
            },
            Area::Right => AreaRules {
                layout_axis: Some(Axis::Horizontal),
                edge: Some(EdgeRule {
                    axis: Axis::Horizontal,
                    grip: GripSide::Start,
                    growth: -1.0,
                }),
                inset: InsetRule::Edge {
                    axis: Axis::Horizontal,
                    trailing_pad: 0.0,
                },
            },
            Area::Top => AreaRules {
                layout_axis: Some(Axis::Vertical),
                edge: Some(EdgeRule {
                    axis: Axis::Vertical,
                    grip: GripSide::End,
                    growth: 1.0,
                }),
                inset: InsetRule::Edge {
                    axis: Axis::Vertical,
                    trailing_pad: 0.0,
                },
            },
            Area::Bottom => AreaRules {
                layout_axis: Some(Axis::Vertical),
                edge: Some(EdgeRule {
                    axis: Axis::Vertical,
                    grip: GripSide::Start,
                    growth: -1.0,
                }),
                inset: InsetRule::Edge {
                    axis: Axis::Vertical,
                    trailing_pad: 0.0,
                },
            },
            Area::Center => AreaRules {
                layout_axis: None,
                edge: None,
                inset: InsetRule::BelowTabStrip,
            },
            Area::Float => AreaRules {
                layout_axis: None,
                edge: None,
                inset: InsetRule::None,
            },
        }
    }

    /// Whether this area is docked against a container edge
    pub fn is_edge(&self) -> bool {
        self.rules().edge.is_some()
    }
}

/// How a group shows its panels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayType {
    /// All panels visible, separated by draggable handles
    #[default]
    SplitView,
    /// One panel visible at a time, chosen by the tab strip
    TabbedView,
}

/// Axis along which sizes are measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along x (widths)
    Horizontal,
    /// Along y (heights)
    Vertical,
}

impl Axis {
    /// Resize cursor for dragging along this axis
    pub fn resize_cursor(&self) -> CursorIcon {
        match self {
            Axis::Horizontal => CursorIcon::ColResize,
            Axis::Vertical => CursorIcon::RowResize,
        }
    }
}

/// Which end of the group (along the edge axis) carries the resize grip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GripSide {
    /// Leading edge (left or top of the group)
    Start,
    /// Trailing edge (right or bottom of the group)
    End,
}

/// Outer-edge drag behavior of an edge-docked group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRule {
    pub axis: Axis,
    pub grip: GripSide,
    /// Sign applied to the pointer delta: +1 when dragging away from the
    /// container edge grows the group, -1 when dragging toward it does
    pub growth: f64,
}

/// How a panel is fitted inside the group bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsetRule {
    /// Float groups leave panels alone
    None,
    /// Border inset along `axis`, plus room for the resize grip when enabled
    Edge { axis: Axis, trailing_pad: f64 },
    /// Full width, below the tab strip band
    BelowTabStrip,
}

/// Lookup result for one `Area`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaRules {
    /// Axis panels are stacked along in split view, None when the area has no
    /// managed split (Center is tabbed, Float is unmanaged)
    pub layout_axis: Option<Axis>,
    pub edge: Option<EdgeRule>,
    pub inset: InsetRule,
}

impl AreaRules {
    /// Whether a point local to the group falls in the outer resize grip
    pub fn in_edge_grip(&self, local: Point, size: (f64, f64), grip_size: f64) -> bool {
        let Some(edge) = self.edge else {
            return false;
        };
        let (coord, extent) = match edge.axis {
            Axis::Horizontal => (local.x, size.0),
            Axis::Vertical => (local.y, size.1),
        };
        match edge.grip {
            GripSide::Start => coord < grip_size,
            GripSide::End => coord > extent - grip_size,
        }
    }

    /// Rect a panel should occupy when fitted to `group`, or None if the area
    /// does not manage panel geometry
    pub fn fit(&self, group: Rect, enable_resizing: bool, config: &DockConfig) -> Option<Rect> {
        let grip = if enable_resizing {
            config.resize_handle_size
        } else {
            0.0
        };
        let border = config.border_inset;

        match self.inset {
            InsetRule::None => None,
            InsetRule::BelowTabStrip => Some(Rect::new(
                group.x,
                group.y + config.tab_strip_height,
                group.width,
                group.height - config.tab_strip_height,
            )),
            InsetRule::Edge { axis, trailing_pad } => {
                let leading = match self.edge.map(|e| e.grip) {
                    Some(GripSide::Start) if enable_resizing => grip,
                    _ => border,
                };
                let extent = group.extent(axis) - 2.0 * border - grip - trailing_pad;
                Some(group.with_span(axis, group.start(axis) + leading, extent))
            }
        }
    }
}
