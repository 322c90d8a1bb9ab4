//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dockgroup::model::DockGroup;
use dockgroup::panel::{Area, DisplayType, DockWidget, Panel, PanelId};
use dockgroup::Rect;

/// Panel with id `id` titled "Panel {id}"
pub fn widget(id: u64) -> DockWidget {
    DockWidget::new(PanelId(id), format!("Panel {}", id))
}

/// Group with `count` panels (ids 1..=count) laid out in `rect`
pub fn group_with_panels(
    area: Area,
    display_type: DisplayType,
    count: u64,
    rect: Rect,
) -> DockGroup {
    let mut group = DockGroup::new(area, display_type);
    for id in 1..=count {
        group.insert_panel(widget(id));
    }
    group.set_geometry(rect);
    group
}

/// Right-docked split group, 300 wide, with two equal panels
pub fn two_panel_split() -> DockGroup {
    group_with_panels(
        Area::Right,
        DisplayType::SplitView,
        2,
        Rect::new(0.0, 0.0, 300.0, 200.0),
    )
}

pub fn proportion_sum(group: &DockGroup) -> f64 {
    group.proportions().iter().sum()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {} but got {}",
        expected,
        actual
    );
}

pub fn assert_rect(actual: Rect, expected: Rect) {
    assert_close(actual.x, expected.x);
    assert_close(actual.y, expected.y);
    assert_close(actual.width, expected.width);
    assert_close(actual.height, expected.height);
}

pub fn panel_rect(group: &DockGroup, index: usize) -> Rect {
    group.panels()[index].geometry()
}

pub fn visible_indices(group: &DockGroup) -> Vec<usize> {
    group
        .panels()
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_visible())
        .map(|(i, _)| i)
        .collect()
}
