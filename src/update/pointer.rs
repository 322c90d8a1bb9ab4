//! Pointer handling: hover cursors, drag start, drag steps and release

use winit::window::CursorIcon;

use crate::commands::Cmd;
use crate::messages::DockMsg;
use crate::model::{DockGroup, DragState, Point};
use crate::panel::Panel;
use crate::view::{hit_test, HitTarget};

/// Update function for pointer messages
pub fn update_pointer<P: Panel>(group: &mut DockGroup<P>, msg: DockMsg<P>) -> Option<Cmd> {
    match msg {
        DockMsg::PointerPressed { pos } => pointer_pressed(group, pos),
        DockMsg::PointerMoved { pos } => pointer_moved(group, pos),
        DockMsg::PointerReleased { .. } => drag_finished(group.end_drag()),
        DockMsg::PointerCaptureLost => drag_finished(group.pointer_capture_lost()),
        _ => super::update_dock(group, msg),
    }
}

fn pointer_pressed<P: Panel>(group: &mut DockGroup<P>, pos: Point) -> Option<Cmd> {
    match hit_test(group, pos) {
        HitTarget::Handle { index } => {
            group.begin_handle_drag(index, pos);
            None
        }
        HitTarget::Edge => {
            group.begin_edge_drag(pos);
            None
        }
        HitTarget::TabStrip { index } => Cmd::redraw_if(group.set_current_tab(index).is_ok()),
        HitTarget::Panel { .. } | HitTarget::None => None,
    }
}

fn pointer_moved<P: Panel>(group: &mut DockGroup<P>, pos: Point) -> Option<Cmd> {
    match group.drag_state() {
        DragState::Idle => {
            let cursor = hover_cursor(group, pos);
            group.set_cursor(cursor).then_some(Cmd::SetCursor(cursor))
        }
        DragState::EdgeDragging { .. } => {
            let size = group.update_edge_drag(pos)?;
            Some(Cmd::PanelSizeChanged {
                area: group.area(),
                size,
            })
        }
        DragState::HandleDragging { .. } => {
            let decision = group.update_handle_drag(pos)?;
            Cmd::redraw_if(decision.is_accepted())
        }
    }
}

/// Cursor for a hovering pointer: resize arrows over handles and the edge grip
fn hover_cursor<P: Panel>(group: &DockGroup<P>, pos: Point) -> CursorIcon {
    match hit_test(group, pos) {
        HitTarget::Handle { index } => group
            .handles()
            .get(index)
            .map_or(CursorIcon::Default, |h| h.cursor()),
        HitTarget::Edge => group
            .area()
            .rules()
            .edge
            .map_or(CursorIcon::Default, |e| e.axis.resize_cursor()),
        HitTarget::TabStrip { .. } | HitTarget::Panel { .. } | HitTarget::None => {
            CursorIcon::Default
        }
    }
}

fn drag_finished(finished: DragState) -> Option<Cmd> {
    match finished {
        DragState::HandleDragging { .. } => Some(Cmd::Redraw),
        DragState::EdgeDragging { .. } | DragState::Idle => None,
    }
}
