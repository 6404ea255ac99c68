//! Interaction-wide constants.
//!
//! Centralizes the thresholds and sentinel coordinates used by the grid
//! pointer handlers.

// ============================================================================
// Pointer Thresholds
// ============================================================================

/// Movement in pixels (on either axis) a press must exceed before it becomes a drag
pub const DRAG_THRESHOLD: f32 = 3.0;

/// Minimum width in pixels a column can be resized down to
pub const MIN_COLUMN_WIDTH: f32 = 100.0;

// ============================================================================
// Sentinel Coordinates
// ============================================================================

/// Row index of the column-header pseudo-row. Pressing here resizes instead of selecting.
pub const HEADER_ROW: i32 = -1;

/// Column index of the row-number gutter
pub const GUTTER_COL: i32 = -1;

// ============================================================================
// Hit-Test Attributes
// ============================================================================

/// Name of the row attribute carried by rendered cells
pub const ROW_ATTRIBUTE: &str = "data-row";

/// Name of the column attribute carried by rendered cells
pub const COL_ATTRIBUTE: &str = "data-col";

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR: &str = "humangrid";

/// Settings file name inside `SETTINGS_DIR`
pub const SETTINGS_FILE: &str = "settings.json";

/// Handler time budget in milliseconds before the profiler warns
pub const HANDLER_BUDGET_MS: f64 = 2.0;
