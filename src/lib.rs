//! Pointer interaction for spreadsheet-style grids.
//!
//! Drag across cells to select a rectangle; drag a column header to resize
//! the column. The crate holds only the drag session. Selection, active
//! cell, and column widths stay with the widget, which exposes them through
//! the [`host`] traits.
//!
//! ```ignore
//! let mut grid = GridInteraction::new(my_grid_state, InteractionSettings::load());
//! if !grid.handle_mouse_down(&(&mouse_down).into(), CellCoordinate::new(3, 1)) {
//!     // Link or gutter press: let the element's own handler run.
//! }
//! grid.handle_mouse_move(&(&mouse_move).into());
//! grid.handle_mouse_up(&(&mouse_up).into());
//! ```

pub mod constants;
pub mod error;
pub mod host;
pub mod input;
pub mod perf;
pub mod selection;
pub mod settings;
pub mod types;

pub use error::{GridError, GridResult};
pub use host::{GridHost, ResizeHost, SelectionHost};
pub use input::{DragSession, GridInteraction};
pub use selection::{CellRange, range_selection};
pub use settings::InteractionSettings;
pub use types::{AnchorKind, CellAttributes, CellCoordinate, PointerEvent};
