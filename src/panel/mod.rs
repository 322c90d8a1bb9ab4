//! Panel system - dock areas and the panel collaborator
//!
//! ## Architecture
//!
//! - `Area`: Left, Right, Top, Bottom, Center or Float slot of a group
//! - `DisplayType`: split view (handles between panels) or tabbed view
//! - `AreaRules`: per-area axis, edge-drag and inset rules in one table
//! - `Panel` trait: what the engine needs from a panel (geometry, visibility, title)
//! - `DockWidget`: minimal `Panel` implementation
//!
//! ## Integration
//!
//! - Layout geometry via `DockGroup::layout_panels()` in `model/dock_group`
//! - Hit-testing via `HitTarget` in `view/hit_test.rs`
//! - Pointer handling via `DockMsg` dispatch in `update/pointer.rs`

mod dock;
mod widget;

pub use dock::{Area, AreaRules, Axis, DisplayType, EdgeRule, GripSide, InsetRule};
pub use widget::{DockWidget, Panel, PanelId};
