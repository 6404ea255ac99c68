//! Core types for grid pointer interaction.
//!
//! This module defines the coordinate, hit-test and pointer-event types the
//! input handlers consume.

use crate::constants::{COL_ATTRIBUTE, GUTTER_COL, HEADER_ROW, ROW_ATTRIBUTE};
use crate::error::{GridError, GridResult};
use gpui::{Modifiers, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point, point, px};
use serde::{Deserialize, Serialize};

// ============================================================================
// Cell Coordinates
// ============================================================================

/// A `(row, col)` pair identifying a grid cell.
///
/// `row == -1` addresses the column-header pseudo-row and `col == -1` the
/// row-number gutter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoordinate {
    pub row: i32,
    pub col: i32,
}

impl CellCoordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate of the header cell above `col`
    pub const fn header(col: i32) -> Self {
        Self { row: HEADER_ROW, col }
    }

    /// Returns true if this addresses the column-header pseudo-row
    pub fn is_header(&self) -> bool {
        self.row == HEADER_ROW
    }

    /// Returns true if this addresses the row-number gutter
    pub fn is_gutter(&self) -> bool {
        self.col == GUTTER_COL
    }

    /// Which interaction a press on this coordinate starts
    pub fn anchor_kind(&self) -> AnchorKind {
        if self.is_header() {
            AnchorKind::ColumnHeader
        } else {
            AnchorKind::Cell
        }
    }

    /// Parse the coordinate carried by a hit-tested element.
    pub fn from_attributes(attrs: &CellAttributes) -> GridResult<Self> {
        let row = parse_attribute(ROW_ATTRIBUTE, attrs.row.as_deref())?;
        let col = parse_attribute(COL_ATTRIBUTE, attrs.col.as_deref())?;
        Ok(Self { row, col })
    }
}

impl From<(i32, i32)> for CellCoordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

fn parse_attribute(attribute: &'static str, value: Option<&str>) -> GridResult<i32> {
    let value = value.ok_or(GridError::MissingAttribute(attribute))?;
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| GridError::InvalidCoordinate {
            attribute,
            value: value.to_string(),
        })
}

/// What a press anchored on, decided once at press time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorKind {
    /// A data cell: dragging extends a rectangular selection
    Cell,
    /// A column header: dragging resizes the column
    ColumnHeader,
}

// ============================================================================
// Hit Testing
// ============================================================================

/// Raw coordinate attributes of the element under the pointer.
///
/// Values are kept as the host reported them; parsing happens in
/// [`CellCoordinate::from_attributes`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellAttributes {
    pub row: Option<String>,
    pub col: Option<String>,
}

impl CellAttributes {
    pub fn new(row: impl Into<String>, col: impl Into<String>) -> Self {
        Self {
            row: Some(row.into()),
            col: Some(col.into()),
        }
    }
}

impl From<CellCoordinate> for CellAttributes {
    fn from(cell: CellCoordinate) -> Self {
        Self::new(cell.row.to_string(), cell.col.to_string())
    }
}

// ============================================================================
// Pointer Events
// ============================================================================

/// A pointer event as seen by the grid handlers.
#[derive(Clone, Debug, Default)]
pub struct PointerEvent {
    /// Window-relative pointer position
    pub position: Point<Pixels>,
    /// Keyboard modifiers held during the event
    pub modifiers: Modifiers,
    /// True when the element under the pointer is a navigational link
    pub over_link: bool,
}

impl PointerEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: point(px(x), px(y)),
            ..Default::default()
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn over_link(mut self) -> Self {
        self.over_link = true;
        self
    }

    /// Returns true if shift, control or the platform key is held
    pub fn is_modified(&self) -> bool {
        self.modifiers.shift || self.modifiers.control || self.modifiers.platform
    }
}

impl From<&MouseDownEvent> for PointerEvent {
    fn from(event: &MouseDownEvent) -> Self {
        Self {
            position: event.position,
            modifiers: event.modifiers,
            over_link: false,
        }
    }
}

impl From<&MouseMoveEvent> for PointerEvent {
    fn from(event: &MouseMoveEvent) -> Self {
        Self {
            position: event.position,
            modifiers: event.modifiers,
            over_link: false,
        }
    }
}

impl From<&MouseUpEvent> for PointerEvent {
    fn from(event: &MouseUpEvent) -> Self {
        Self {
            position: event.position,
            modifiers: event.modifiers,
            over_link: false,
        }
    }
}
