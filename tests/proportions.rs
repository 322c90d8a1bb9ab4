//! Proportion tests - shares stay in lockstep with panels and sum to 1.0

mod common;

use common::{assert_close, group_with_panels, proportion_sum, two_panel_split, widget};
use dockgroup::model::DockGroup;
use dockgroup::panel::{Area, DisplayType, PanelId};
use dockgroup::{DockError, Rect};

// ========================================================================
// Insertion
// ========================================================================

#[test]
fn test_insert_three_panels_gives_equal_shares() {
    let mut group: DockGroup = DockGroup::new(Area::Left, DisplayType::SplitView);
    group.insert_panel(widget(1));
    group.insert_panel(widget(2));
    group.insert_panel(widget(3));

    assert_eq!(group.proportions().len(), 3);
    for share in group.proportions() {
        assert_close(*share, 1.0 / 3.0);
    }
    assert_eq!(group.handles().len(), 2);
}

#[test]
fn test_first_panel_gets_whole_share() {
    let mut group: DockGroup = DockGroup::new(Area::Right, DisplayType::SplitView);
    let index = group.insert_panel(widget(1));

    assert_eq!(index, 0);
    assert_eq!(group.proportions(), &[1.0]);
    assert!(group.handles().is_empty());
    assert!(group.is_open());
}

#[test]
fn test_insert_after_pinned_shares_keeps_relative_sizes() {
    let mut group = two_panel_split();
    group.set_proportions(&[3.0, 1.0]);
    assert_close(group.proportions()[0], 0.75);
    assert_close(group.proportions()[1], 0.25);

    // New slot gets 1/3 provisionally, then everything is rescaled
    group.insert_panel(widget(3));
    let shares = group.proportions();
    assert_close(proportion_sum(&group), 1.0);
    assert_close(shares[0] / shares[1], 3.0);
    assert_close(shares[2], (1.0 / 3.0) / (1.0 + 1.0 / 3.0));
}

// ========================================================================
// Removal
// ========================================================================

#[test]
fn test_remove_down_to_one_panel() {
    let mut group = two_panel_split();

    let removed = group.remove_panel(PanelId(1)).unwrap();
    assert_eq!(removed.id, PanelId(1));

    assert_eq!(group.panels().len(), 1);
    assert!(group.handles().is_empty());
    assert_eq!(group.proportions(), &[1.0]);
}

#[test]
fn test_remove_trims_shares_from_tail() {
    let mut group = group_with_panels(
        Area::Left,
        DisplayType::SplitView,
        3,
        Rect::new(0.0, 0.0, 500.0, 400.0),
    );
    group.set_proportions(&[0.2, 0.3, 0.5]);

    group.remove_panel(PanelId(1)).unwrap();

    // Remaining panels take over the leading shares
    let shares = group.proportions();
    assert_eq!(shares.len(), 2);
    assert_close(shares[0], 0.4);
    assert_close(shares[1], 0.6);
    assert_eq!(group.handles().len(), 1);
    assert_eq!(group.handles()[0].index, 0);
}

#[test]
fn test_remove_last_panel_closes_group() {
    let mut group = two_panel_split();
    group.remove_panel(PanelId(1)).unwrap();
    group.remove_panel(PanelId(2)).unwrap();

    assert!(!group.is_open());
    assert!(group.proportions().is_empty());
    assert!(group.handles().is_empty());
    assert!(group.tab_strip().is_empty());
}

#[test]
fn test_emptied_group_starts_fresh_with_equal_shares() {
    let mut group = two_panel_split();
    assert!(group.handle_moving(0, 40.0).is_accepted());
    group.handle_moved();

    group.remove_panel(PanelId(1)).unwrap();
    group.remove_panel(PanelId(2)).unwrap();
    for id in 3..=5 {
        group.insert_panel(widget(id));
    }

    assert_eq!(group.handles().len(), 2);
    for share in group.proportions() {
        assert_close(*share, 1.0 / 3.0);
    }
}

#[test]
fn test_remove_unknown_panel_leaves_group_untouched() {
    let mut group = two_panel_split();
    let before = group.proportions().to_vec();

    let result = group.remove_panel(PanelId(99));

    assert_eq!(result.unwrap_err(), DockError::PanelNotFound(PanelId(99)));
    assert_eq!(group.panels().len(), 2);
    assert_eq!(group.handles().len(), 1);
    assert_eq!(group.proportions(), before.as_slice());
}

// ========================================================================
// Normalization
// ========================================================================

#[test]
fn test_normalize_on_empty_group_is_noop() {
    let mut group: DockGroup = DockGroup::new(Area::Bottom, DisplayType::SplitView);
    group.normalize_proportions();
    assert!(group.proportions().is_empty());
}

#[test]
fn test_set_proportions_fills_missing_and_invalid_shares() {
    let mut group = group_with_panels(
        Area::Top,
        DisplayType::SplitView,
        3,
        Rect::new(0.0, 0.0, 600.0, 300.0),
    );

    // Negative share counts as unset, missing third share too
    group.set_proportions(&[1.0, -2.0]);

    let provisional = 1.0 / 3.0;
    let sum = 1.0 + 2.0 * provisional;
    let shares = group.proportions();
    assert_close(shares[0], 1.0 / sum);
    assert_close(shares[1], provisional / sum);
    assert_close(shares[2], provisional / sum);
}

#[test]
fn test_shares_always_sum_to_one() {
    let mut group: DockGroup = DockGroup::new(Area::Right, DisplayType::SplitView);
    group.set_geometry(Rect::new(0.0, 0.0, 400.0, 800.0));

    let mut next_id = 1;
    // Interleave inserts, removes and a pinning drag
    for step in 0..40u64 {
        if step % 3 == 2 && group.panels().len() > 1 {
            let victim = group.panels()[(step as usize) % group.panels().len()].id;
            group.remove_panel(victim).unwrap();
        } else {
            group.insert_panel(widget(next_id));
            next_id += 1;
        }

        if step == 10 {
            group.set_proportions(&[5.0, 1.0, 1.0]);
        }

        assert_eq!(group.proportions().len(), group.panels().len());
        assert_eq!(group.handles().len(), group.panels().len() - 1);
        assert_close(proportion_sum(&group), 1.0);
    }
}
