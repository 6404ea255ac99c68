//! Rectangular cell selection.
//!
//! A drag selects the rectangle spanning the anchor and the cell under the
//! pointer, whichever direction the pointer travelled.

use crate::types::CellCoordinate;

/// A normalized, inclusive rectangle of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRange {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl CellRange {
    /// Build the rectangle spanning `a` and `b`, in any order.
    pub fn spanning(a: CellCoordinate, b: CellCoordinate) -> Self {
        Self {
            top: a.row.min(b.row),
            left: a.col.min(b.col),
            bottom: a.row.max(b.row),
            right: a.col.max(b.col),
        }
    }

    /// Rows covered. Exact for any pair of `i32` rows on 64-bit targets.
    pub fn row_count(&self) -> usize {
        (self.bottom.abs_diff(self.top) as usize).saturating_add(1)
    }

    pub fn col_count(&self) -> usize {
        (self.right.abs_diff(self.left) as usize).saturating_add(1)
    }

    pub fn contains(&self, cell: CellCoordinate) -> bool {
        cell.row >= self.top && cell.row <= self.bottom && cell.col >= self.left && cell.col <= self.right
    }

    /// Covered cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellCoordinate> + '_ {
        (self.top..=self.bottom)
            .flat_map(move |row| (self.left..=self.right).map(move |col| CellCoordinate::new(row, col)))
    }
}

/// Cells of the rectangle spanning `start` and `end`, row-major.
pub fn range_selection(start: CellCoordinate, end: CellCoordinate) -> Vec<CellCoordinate> {
    CellRange::spanning(start, end).cells().collect()
}
