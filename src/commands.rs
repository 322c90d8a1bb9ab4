//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update.

use winit::window::CursorIcon;

use crate::panel::Area;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Panel or handle geometry changed; repaint the group
    Redraw,
    /// Show a different pointer cursor over the group
    SetCursor(CursorIcon),
    /// The group's outward size changed during an edge drag; the parent dock
    /// region should relay out and send back a `GeometryChanged`
    PanelSizeChanged { area: Area, size: f64 },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Redraw when `changed`, otherwise nothing
    pub fn redraw_if(changed: bool) -> Option<Cmd> {
        changed.then_some(Cmd::Redraw)
    }

    /// Combine commands, dropping `None`s and collapsing single entries
    pub fn batch(cmds: impl IntoIterator<Item = Cmd>) -> Option<Cmd> {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .filter(|cmd| !matches!(cmd, Cmd::None))
            .collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw | Cmd::PanelSizeChanged { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
            Cmd::None | Cmd::SetCursor(_) => false,
        }
    }
}
