//! Unit tests for rectangular selection.

use humangrid::{CellCoordinate, CellRange, range_selection};

#[test]
fn test_every_direction_yields_same_rectangle() {
    let center = CellCoordinate::new(5, 5);
    let corners = [
        CellCoordinate::new(3, 3),
        CellCoordinate::new(3, 7),
        CellCoordinate::new(7, 3),
        CellCoordinate::new(7, 7),
    ];
    for corner in corners {
        let range = CellRange::spanning(center, corner);
        assert_eq!(range.row_count(), 3);
        assert_eq!(range.col_count(), 3);
        assert_eq!(range_selection(center, corner), range_selection(corner, center));
        assert!(range.contains(center));
        assert!(range.contains(corner));
    }
}

#[test]
fn test_selection_is_row_major_and_complete() {
    let cells = range_selection(CellCoordinate::new(4, 6), CellCoordinate::new(1, 2));
    assert_eq!(cells.len(), 4 * 5);
    assert_eq!(cells.first(), Some(&CellCoordinate::new(1, 2)));
    assert_eq!(cells.last(), Some(&CellCoordinate::new(4, 6)));

    let mut sorted = cells.clone();
    sorted.sort();
    assert_eq!(cells, sorted);
}

#[test]
fn test_single_column_and_row() {
    let column = range_selection(CellCoordinate::new(0, 3), CellCoordinate::new(2, 3));
    assert_eq!(
        column,
        vec![
            CellCoordinate::new(0, 3),
            CellCoordinate::new(1, 3),
            CellCoordinate::new(2, 3),
        ]
    );

    let row = range_selection(CellCoordinate::new(9, 2), CellCoordinate::new(9, 0));
    assert_eq!(row.len(), 3);
    assert!(row.iter().all(|cell| cell.row == 9));
}

#[test]
fn test_range_fields_are_normalized() {
    let range = CellRange::spanning(CellCoordinate::new(8, 1), CellCoordinate::new(2, 6));
    assert_eq!(
        range,
        CellRange {
            top: 2,
            left: 1,
            bottom: 8,
            right: 6,
        }
    );
}

#[test]
fn test_extreme_coordinates_do_not_overflow() {
    let range = CellRange::spanning(CellCoordinate::new(-5, 0), CellCoordinate::new(i32::MAX, 0));
    assert_eq!(range.row_count(), i32::MAX as usize + 6);
    assert!(range.contains(CellCoordinate::new(i32::MAX, 0)));
    assert!(range.contains(CellCoordinate::new(-5, 0)));
    assert!(!range.contains(CellCoordinate::new(-6, 0)));

    // Iteration stays lazy and stops exactly at the upper edge.
    let edge = CellRange::spanning(
        CellCoordinate::new(i32::MAX - 1, i32::MAX - 1),
        CellCoordinate::new(i32::MAX, i32::MAX),
    );
    assert_eq!(edge.cells().count(), 4);
    assert_eq!(
        range_selection(CellCoordinate::new(i32::MIN, 0), CellCoordinate::new(i32::MIN, 1)),
        vec![CellCoordinate::new(i32::MIN, 0), CellCoordinate::new(i32::MIN, 1)]
    );
}
