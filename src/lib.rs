//! Dock group layout engine - Elm-style panel docking
//!
//! A `DockGroup` arranges panels either as a resizable split (side by side or
//! stacked, with draggable handles) or as a tabbed stack. This crate provides
//! the layout state and logic; painting and event delivery belong to the host.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod messages;
pub mod model;
pub mod panel;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DockConfig;
pub use error::DockError;
pub use messages::DockMsg;
pub use model::{DockGroup, DragDecision, Point, Rect};
pub use panel::{Area, DisplayType, DockWidget, Panel, PanelId};
