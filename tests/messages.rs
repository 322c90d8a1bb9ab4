//! Message tests - host events routed through update() and the commands they return

mod common;

use common::{assert_close, group_with_panels, two_panel_split, visible_indices, widget};
use dockgroup::model::DockGroup;
use dockgroup::panel::{Area, DisplayType, PanelId};
use dockgroup::update::update;
use dockgroup::{Cmd, DockMsg, Point, Rect};
use winit::window::CursorIcon;

fn pressed(x: f64, y: f64) -> DockMsg {
    DockMsg::PointerPressed {
        pos: Point::new(x, y),
    }
}

fn moved(x: f64, y: f64) -> DockMsg {
    DockMsg::PointerMoved {
        pos: Point::new(x, y),
    }
}

fn released(x: f64, y: f64) -> DockMsg {
    DockMsg::PointerReleased {
        pos: Point::new(x, y),
    }
}

// ========================================================================
// Hover
// ========================================================================

#[test]
fn test_hover_sets_cursor_only_on_change() {
    let mut group = two_panel_split();

    assert_eq!(
        update(&mut group, moved(150.0, 100.0)),
        Some(Cmd::SetCursor(CursorIcon::ColResize))
    );
    assert_eq!(update(&mut group, moved(151.0, 100.0)), None);

    assert_eq!(
        update(&mut group, moved(60.0, 100.0)),
        Some(Cmd::SetCursor(CursorIcon::Default))
    );
    assert_eq!(group.cursor(), CursorIcon::Default);

    // Outer grip of a right-docked group
    assert_eq!(
        update(&mut group, moved(1.0, 100.0)),
        Some(Cmd::SetCursor(CursorIcon::ColResize))
    );
}

#[test]
fn test_hover_over_vertical_grip() {
    let mut group = group_with_panels(
        Area::Bottom,
        DisplayType::SplitView,
        1,
        Rect::new(0.0, 400.0, 800.0, 200.0),
    );

    assert_eq!(
        update(&mut group, moved(300.0, 401.0)),
        Some(Cmd::SetCursor(CursorIcon::RowResize))
    );
}

// ========================================================================
// Drags
// ========================================================================

#[test]
fn test_edge_drag_requests_parent_resize() {
    let mut group = group_with_panels(
        Area::Right,
        DisplayType::SplitView,
        1,
        Rect::new(500.0, 0.0, 300.0, 600.0),
    );

    assert_eq!(update(&mut group, pressed(502.0, 100.0)), None);
    assert_eq!(
        update(&mut group, moved(452.0, 100.0)),
        Some(Cmd::PanelSizeChanged {
            area: Area::Right,
            size: 350.0
        })
    );
    assert_eq!(update(&mut group, released(452.0, 100.0)), None);
    assert!(group.drag_state().is_idle());

    // Parent answers with new bounds
    let cmd = update(
        &mut group,
        DockMsg::GeometryChanged {
            old: Rect::new(500.0, 0.0, 300.0, 600.0),
            new: Rect::new(450.0, 0.0, 350.0, 600.0),
        },
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(group.panels()[0].rect, Rect::new(450.0, 0.0, 350.0, 600.0));
}

#[test]
fn test_handle_drag_through_pointer_messages() {
    let mut group = two_panel_split();

    assert_eq!(update(&mut group, pressed(150.0, 100.0)), None);
    assert_eq!(update(&mut group, moved(102.0, 100.0)), Some(Cmd::Redraw));
    // Would squeeze the first panel below the minimum
    assert_eq!(update(&mut group, moved(20.0, 100.0)), None);
    assert_close(group.handles()[0].position, 100.0);

    assert_eq!(update(&mut group, released(20.0, 100.0)), Some(Cmd::Redraw));
    assert!(group.drag_state().is_idle());
    assert_close(group.proportions()[0], 100.0 / 296.0);
}

#[test]
fn test_capture_lost_message_reconciles() {
    let mut group = two_panel_split();
    update(&mut group, pressed(150.0, 100.0));
    update(&mut group, moved(202.0, 100.0));

    assert_eq!(update(&mut group, DockMsg::PointerCaptureLost), Some(Cmd::Redraw));
    assert!(group.drag_state().is_idle());
    assert_close(group.proportions()[0], 200.0 / 296.0);

    // A second loss with nothing active does nothing
    assert_eq!(update(&mut group, DockMsg::PointerCaptureLost), None);
}

#[test]
fn test_press_on_panel_starts_nothing() {
    let mut group = two_panel_split();
    assert_eq!(update(&mut group, pressed(60.0, 100.0)), None);
    assert!(group.drag_state().is_idle());
}

// ========================================================================
// Handles, tabs and membership
// ========================================================================

#[test]
fn test_handle_messages() {
    let mut group = two_panel_split();

    let accepted = DockMsg::HandleMoving {
        index: 0,
        candidate: 40.0,
    };
    assert_eq!(update(&mut group, accepted), Some(Cmd::Redraw));

    let rejected = DockMsg::HandleMoving {
        index: 0,
        candidate: 10.0,
    };
    assert_eq!(update(&mut group, rejected), None);

    assert_eq!(update(&mut group, DockMsg::HandleMoved), Some(Cmd::Redraw));
    assert_close(group.proportions()[0], 40.0 / 296.0);
}

#[test]
fn test_tab_click_activates_tab() {
    let mut group = group_with_panels(
        Area::Center,
        DisplayType::TabbedView,
        3,
        Rect::new(0.0, 0.0, 300.0, 200.0),
    );

    assert_eq!(update(&mut group, pressed(10.0, 10.0)), Some(Cmd::Redraw));
    assert_eq!(visible_indices(&group), vec![0]);

    assert_eq!(update(&mut group, DockMsg::TabActivated(1)), Some(Cmd::Redraw));
    assert_eq!(visible_indices(&group), vec![1]);

    assert_eq!(update(&mut group, DockMsg::TabActivated(9)), None);
    assert_eq!(visible_indices(&group), vec![1]);
}

#[test]
fn test_membership_messages() {
    let mut group: DockGroup = DockGroup::new(Area::Left, DisplayType::SplitView);

    assert_eq!(
        update(
            &mut group,
            DockMsg::GeometryChanged {
                old: Rect::default(),
                new: Rect::new(0.0, 0.0, 250.0, 600.0),
            }
        ),
        None
    );

    assert_eq!(update(&mut group, DockMsg::InsertPanel(widget(1))), Some(Cmd::Redraw));
    assert_eq!(update(&mut group, DockMsg::InsertPanel(widget(2))), Some(Cmd::Redraw));
    assert_eq!(group.panels().len(), 2);
    assert_eq!(group.handles().len(), 1);

    assert_eq!(update(&mut group, DockMsg::RemovePanel(PanelId(42))), None);
    assert_eq!(update(&mut group, DockMsg::RemovePanel(PanelId(1))), Some(Cmd::Redraw));
    assert_eq!(group.panels()[0].id, PanelId(2));
    assert!(group.handles().is_empty());
}

// ========================================================================
// Commands
// ========================================================================

#[test]
fn test_cmd_batch_and_redraw() {
    assert_eq!(Cmd::batch([Cmd::None, Cmd::None]), None);
    assert_eq!(Cmd::batch([Cmd::None, Cmd::Redraw]), Some(Cmd::Redraw));

    let batch = Cmd::batch([
        Cmd::SetCursor(CursorIcon::ColResize),
        Cmd::PanelSizeChanged {
            area: Area::Left,
            size: 200.0,
        },
    ]);
    assert!(matches!(batch, Some(Cmd::Batch(ref cmds)) if cmds.len() == 2));
    assert!(batch.is_some_and(|cmd| cmd.needs_redraw()));

    assert!(!Cmd::SetCursor(CursorIcon::Default).needs_redraw());
    assert_eq!(Cmd::redraw_if(false), None);
}
