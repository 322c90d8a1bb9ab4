//! Layout model - the complete state of a dock group
//!
//! This module contains the state types following the Elm Architecture pattern.
//! All mutation flows through `DockGroup` methods, driven either directly by
//! the owning container or by `update()` in response to `DockMsg`s.

pub mod dock_group;
pub mod geometry;
pub mod handle;
pub mod tab_strip;

pub use dock_group::{DockGroup, DragDecision, DragState, LayoutMode};
pub use geometry::{Point, Rect};
pub use handle::ResizeHandle;
pub use tab_strip::TabStrip;
