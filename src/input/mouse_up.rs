//! Release handling - click vs. end of drag.

use crate::host::GridHost;
use crate::input::{DragSession, GridInteraction};
use crate::profile_scope;
use crate::types::PointerEvent;

impl<H: GridHost> GridInteraction<H> {
    /// Handle button release, ending the session.
    ///
    /// A release that never crossed the drag threshold is a click on the
    /// anchor. A release that ends a drag hands focus back to the grid.
    /// Releasing with no session is a no-op.
    pub fn handle_mouse_up(&mut self, event: &PointerEvent) {
        profile_scope!("handle_mouse_up");

        match self.session.finish() {
            DragSession::Idle => return,
            DragSession::Armed {
                anchor, modifiers, ..
            } => {
                tracing::debug!(row = anchor.row, col = anchor.col, "Click");
                // Clicks report the modifiers held at press.
                let click = PointerEvent {
                    modifiers,
                    ..event.clone()
                };
                if anchor.is_header() {
                    self.host.on_column_activated(&click, anchor.col);
                } else {
                    self.host.on_cell_activated(&click, anchor.row, anchor.col);
                }
            }
            DragSession::Dragging {
                anchor,
                pending_width,
                ..
            } => {
                tracing::debug!(
                    ?anchor,
                    pending_width,
                    x = f32::from(event.position.x),
                    y = f32::from(event.position.y),
                    "Drag ended"
                );
                self.host.focus_parent();
            }
        }

        self.host.set_dragging(false);
    }
}
