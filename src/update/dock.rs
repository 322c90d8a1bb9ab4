//! Dock update handlers
//!
//! Handles geometry, handle, tab and membership messages.

use tracing::warn;

use crate::commands::Cmd;
use crate::messages::DockMsg;
use crate::model::DockGroup;
use crate::panel::Panel;

/// Update function for non-pointer dock messages
pub fn update_dock<P: Panel>(group: &mut DockGroup<P>, msg: DockMsg<P>) -> Option<Cmd> {
    match msg {
        DockMsg::GeometryChanged { new, .. } => {
            group.set_geometry(new);
            Cmd::redraw_if(group.is_open())
        }

        DockMsg::HandleMoving { index, candidate } => {
            Cmd::redraw_if(group.handle_moving(index, candidate).is_accepted())
        }

        DockMsg::HandleMoved => {
            group.handle_moved();
            Some(Cmd::Redraw)
        }

        DockMsg::TabActivated(index) => match group.set_current_tab(index) {
            Ok(()) => Some(Cmd::Redraw),
            Err(e) => {
                warn!("Ignoring tab activation: {}", e);
                None
            }
        },

        DockMsg::InsertPanel(panel) => {
            group.insert_panel(panel);
            Some(Cmd::Redraw)
        }

        DockMsg::RemovePanel(id) => match group.remove_panel(id) {
            Ok(_) => Some(Cmd::Redraw),
            Err(e) => {
                warn!("Ignoring panel removal: {}", e);
                None
            }
        },

        DockMsg::PointerPressed { .. }
        | DockMsg::PointerMoved { .. }
        | DockMsg::PointerReleased { .. }
        | DockMsg::PointerCaptureLost => super::update_pointer(group, msg),
    }
}
