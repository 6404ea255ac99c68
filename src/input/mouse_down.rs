//! Press handling - guards, immediate single-cell selection, resize baseline.

use crate::host::GridHost;
use crate::input::GridInteraction;
use crate::profile_scope;
use crate::types::{AnchorKind, CellCoordinate, PointerEvent};

impl<H: GridHost> GridInteraction<H> {
    /// Handle a primary-button press on `cell`.
    ///
    /// Presses on links, and on the row-number gutter while it is shown, are
    /// ignored. A plain press on a data cell selects it straight away; a press
    /// on a column header records the header's current width for resizing.
    ///
    /// Returns false when the press was left for someone else to handle (a
    /// link or the gutter), true when it started a session.
    pub fn handle_mouse_down(&mut self, event: &PointerEvent, cell: CellCoordinate) -> bool {
        profile_scope!("handle_mouse_down");

        if event.over_link {
            tracing::trace!(row = cell.row, col = cell.col, "Press on link ignored");
            return false;
        }
        if self.settings.show_row_numbers && cell.is_gutter() {
            tracing::trace!(row = cell.row, "Press on row-number gutter ignored");
            return false;
        }

        if !self.session.is_idle() {
            tracing::debug!(
                previous = ?self.session.anchor(),
                "Press while a session is active, restarting"
            );
            if self.session.is_dragging() {
                self.host.set_dragging(false);
            }
            self.session.reset();
        }

        let kind = cell.anchor_kind();
        let baseline_width = match kind {
            AnchorKind::Cell => 0.0,
            AnchorKind::ColumnHeader => self
                .host
                .header_width(cell.col)
                .unwrap_or(self.settings.min_column_width),
        };

        self.session
            .arm(cell, event.position, baseline_width, event.modifiers);
        tracing::debug!(row = cell.row, col = cell.col, ?kind, "Session armed");

        if kind == AnchorKind::Cell && !event.is_modified() {
            self.host.set_selected_cells(vec![cell]);
            self.host.set_active_cell(Some(cell));
            self.host.on_cell_activated(event, cell.row, cell.col);
        }
        true
    }
}
