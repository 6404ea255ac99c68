//! Press and release without dragging.

use crate::helpers::*;
use humangrid::{CellCoordinate, InteractionSettings};

#[test]
fn test_plain_press_selects_and_clicks_immediately() {
    let mut t = TestGrid::new();
    t.press(2, 5);

    let cell = CellCoordinate::new(2, 5);
    assert_eq!(
        t.host().calls,
        vec![
            HostCall::SetSelectedCells(vec![cell]),
            HostCall::SetActiveCell(Some(cell)),
            HostCall::CellActivated(2, 5),
        ]
    );
    assert_eq!(t.grid.session().anchor(), Some(cell));
    assert!(!t.grid.is_dragging());
}

#[test]
fn test_release_without_drag_is_a_click() {
    let mut t = TestGrid::new();
    t.press(2, 5);
    t.clear_calls();
    t.release();

    assert_eq!(
        t.host().calls,
        vec![HostCall::CellActivated(2, 5), HostCall::SetDragging(false)]
    );
    assert!(t.grid.session().is_idle());
}

#[test]
fn test_small_jitter_still_clicks() {
    let mut t = TestGrid::new();
    t.press(1, 1);
    let (x, y) = cell_center(1, 1);
    t.move_to_xy(x + 3.0, y - 3.0);
    t.move_to_xy(x - 2.0, y + 1.5);
    assert!(!t.grid.is_dragging());
    t.release();

    assert_eq!(t.host().clicks(), vec![(1, 1), (1, 1)]);
    assert_eq!(t.host().count(|c| matches!(c, HostCall::FocusParent)), 0);
    assert_eq!(t.host().count(|c| *c == HostCall::SetDragging(true)), 0);
}

#[test]
fn test_modified_press_defers_click_to_release() {
    for modifiers in [shift(), control(), platform()] {
        let mut t = TestGrid::new();
        t.press_with(4, 0, modifiers);

        assert!(t.host().calls.is_empty());
        assert_eq!(t.grid.session().anchor(), Some(CellCoordinate::new(4, 0)));

        t.release();
        assert_eq!(t.host().clicks(), vec![(4, 0)]);
        assert!(t.host().selected.is_empty());
    }
}

#[test]
fn test_shift_click_reports_shift_on_plain_release() {
    let mut t = TestGrid::new();
    assert!(t.press_with(4, 2, shift()));
    t.release();

    assert_eq!(t.host().clicks(), vec![(4, 2)]);
    assert_eq!(t.host().click_modifiers.len(), 1);
    assert!(t.host().click_modifiers[0].shift);
}

#[test]
fn test_click_modifiers_come_from_the_press() {
    let mut t = TestGrid::new();
    t.press(1, 1);
    t.release_with(control());

    assert_eq!(t.host().clicks(), vec![(1, 1), (1, 1)]);
    assert!(t.host().click_modifiers.iter().all(|m| !m.control && !m.shift));
}

#[test]
fn test_press_on_link_is_ignored() {
    let mut t = TestGrid::new();
    let event = pointer_at(3, 3).over_link();
    let consumed = t.grid.handle_mouse_down(&event, CellCoordinate::new(3, 3));

    assert!(!consumed);
    assert!(t.host().calls.is_empty());
    assert!(t.grid.session().is_idle());

    t.release();
    assert!(t.host().calls.is_empty());
}

#[test]
fn test_gutter_press_ignored_when_row_numbers_shown() {
    let settings = InteractionSettings::default().with_row_numbers(true);
    let mut t = TestGrid::with_settings(RecordingHost::new(), settings);
    assert!(!t.press(5, -1));

    assert!(t.host().calls.is_empty());
    assert!(t.grid.session().is_idle());
}

#[test]
fn test_gutter_column_is_a_cell_without_row_numbers() {
    let mut t = TestGrid::new();
    assert!(t.press(5, -1));

    assert_eq!(t.host().clicks(), vec![(5, -1)]);
    assert_eq!(t.host().active, Some(CellCoordinate::new(5, -1)));
}

#[test]
fn test_idle_release_touches_nothing() {
    let mut t = TestGrid::new();
    t.release();
    t.release();
    t.release();
    assert!(t.host().calls.is_empty());

    t.press(0, 0);
    t.release();
    t.clear_calls();
    t.release();
    assert!(t.host().calls.is_empty());
}

#[test]
fn test_move_without_press_is_ignored() {
    let mut t = TestGrid::new();
    t.move_to(3, 3);
    t.move_to(9, 9);
    assert!(t.host().calls.is_empty());
    assert!(t.grid.session().is_idle());
}

#[test]
fn test_second_press_replaces_session() {
    let mut t = TestGrid::new();
    t.press(0, 0);
    t.move_to(2, 2);
    assert!(t.grid.is_dragging());

    t.press(5, 5);
    assert!(!t.grid.is_dragging());
    assert_eq!(t.grid.session().anchor(), Some(CellCoordinate::new(5, 5)));
    assert!(!t.host().dragging);

    t.release();
    assert_eq!(t.host().clicks(), vec![(0, 0), (5, 5), (5, 5)]);
}
