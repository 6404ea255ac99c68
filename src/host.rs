//! Capability traits the grid widget implements for the input handlers.
//!
//! The handlers own no selection or layout state of their own. Everything
//! they observe or change goes through these traits, so a widget can keep its
//! selection in whatever shape its renderer wants.

use crate::types::{CellAttributes, CellCoordinate, PointerEvent};

/// Selection, activation and hit testing.
pub trait SelectionHost {
    /// Mirrors whether a drag is in progress
    fn set_dragging(&mut self, dragging: bool);

    /// Replaces the rendered selection
    fn set_selected_cells(&mut self, cells: Vec<CellCoordinate>);

    /// Sets (or clears) the single focused cell
    fn set_active_cell(&mut self, cell: Option<CellCoordinate>);

    /// A data cell was clicked. `event` carries the modifiers held when the
    /// click started, so hosts can extend or toggle selections.
    fn on_cell_activated(&mut self, event: &PointerEvent, row: i32, col: i32);

    /// A column header was clicked without dragging
    fn on_column_activated(&mut self, _event: &PointerEvent, _col: i32) {}

    /// Attributes of the cell element under the pointer, if any
    fn cell_at(&self, event: &PointerEvent) -> Option<CellAttributes>;

    /// Give keyboard focus back to the grid container after a drag.
    /// Hosts without a focusable container keep the default no-op.
    fn focus_parent(&mut self) {}
}

/// Column geometry for header-drag resizing.
pub trait ResizeHost {
    /// Applies a resize result, e.g. `"120px"`
    fn set_column_width(&mut self, col: i32, width: String);

    /// Current rendered width of the header for `col`
    fn header_width(&self, col: i32) -> Option<f32>;
}

/// Everything the interaction controller needs.
pub trait GridHost: SelectionHost + ResizeHost {}

impl<T: SelectionHost + ResizeHost> GridHost for T {}
