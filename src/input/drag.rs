//! Move handling - drag threshold, range selection, column resize.
//!
//! Mouse move fires for every pointer event while the button is held, so
//! the idle path returns before touching the host.

use crate::host::GridHost;
use crate::input::coords::{exceeds_threshold, format_width, horizontal_delta};
use crate::input::{DragSession, GridInteraction};
use crate::profile_scope;
use crate::selection::range_selection;
use crate::types::{AnchorKind, CellCoordinate, PointerEvent};

impl<H: GridHost> GridInteraction<H> {
    /// Handle pointer movement while the button is held.
    pub fn handle_mouse_move(&mut self, event: &PointerEvent) {
        profile_scope!("handle_mouse_move");

        let Some(press_position) = self.session.press_position() else {
            return;
        };

        if self.session.is_armed() {
            if !exceeds_threshold(press_position, event.position, self.settings.drag_threshold) {
                return;
            }
            self.session.start_drag();
            self.host.set_dragging(true);
            tracing::debug!(anchor = ?self.session.anchor(), "Drag started");
        }

        match self.session.anchor_kind() {
            Some(AnchorKind::Cell) => self.extend_selection(event),
            Some(AnchorKind::ColumnHeader) => self.resize_column(event),
            None => {}
        }
    }

    fn extend_selection(&mut self, event: &PointerEvent) {
        let Some(anchor) = self.session.anchor() else {
            return;
        };
        let Some(attrs) = self.host.cell_at(event) else {
            tracing::trace!("Move over non-cell target ignored");
            return;
        };
        let current = match CellCoordinate::from_attributes(&attrs) {
            Ok(cell) if !cell.is_header() => cell,
            Ok(cell) => {
                tracing::trace!(col = cell.col, "Move over column header ignored");
                return;
            }
            Err(e) => {
                tracing::trace!(error = %e, "Move over unparseable cell ignored");
                return;
            }
        };

        let cells = range_selection(anchor, current);
        tracing::trace!(
            ?anchor,
            ?current,
            count = cells.len(),
            "Selection extended"
        );
        self.host.set_selected_cells(cells);
        self.host.set_active_cell(Some(current));
    }

    fn resize_column(&mut self, event: &PointerEvent) {
        let DragSession::Dragging {
            anchor,
            last_x,
            pending_width,
            ..
        } = &mut self.session
        else {
            return;
        };

        let dx = horizontal_delta(*last_x, event.position.x);
        *pending_width = (*pending_width + dx).max(self.settings.min_column_width);
        *last_x = event.position.x;

        let (col, width) = (anchor.col, *pending_width);
        tracing::trace!(col, dx, width, "Column resized");
        self.host.set_column_width(col, format_width(width));
    }
}
