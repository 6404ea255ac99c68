//! Drag session state machine.
//!
//! One session lives for the lifetime of the controller and is mutated in
//! place on every press/move/release.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Armed        (press on a cell or column header)
//! Armed    -> Armed        (move within the drag threshold)
//! Armed    -> Dragging     (move beyond the drag threshold)
//! Dragging -> Dragging     (every further move)
//! Armed    -> Idle         (release: click)
//! Dragging -> Idle         (release: end of drag)
//! ```

use crate::types::{AnchorKind, CellCoordinate};
use gpui::{Modifiers, Pixels, Point};

/// State of the current pointer interaction.
///
/// An anchor and a press position exist exactly when the session is not
/// `Idle`, and only `Dragging` reports `is_dragging()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragSession {
    /// No button held
    #[default]
    Idle,

    /// Pressed, not yet moved past the threshold
    Armed {
        /// Cell or header under the press
        anchor: CellCoordinate,
        /// Pointer position at press time
        press_position: Point<Pixels>,
        /// Header width at press time (header anchors only, else 0)
        baseline_width: f32,
        /// Modifiers held at press time; a deferred click reports these
        modifiers: Modifiers,
    },

    /// Threshold exceeded
    Dragging {
        /// Cell or header under the press
        anchor: CellCoordinate,
        /// Pointer position at press time
        press_position: Point<Pixels>,
        /// Pointer X of the previous move; resize deltas are measured from here
        last_x: Pixels,
        /// Running column width (header anchors only)
        pending_width: f32,
    },
}

impl DragSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed { .. })
    }

    /// Returns true once movement has exceeded the threshold
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn anchor(&self) -> Option<CellCoordinate> {
        match self {
            Self::Idle => None,
            Self::Armed { anchor, .. } | Self::Dragging { anchor, .. } => Some(*anchor),
        }
    }

    pub fn anchor_kind(&self) -> Option<AnchorKind> {
        self.anchor().map(|anchor| anchor.anchor_kind())
    }

    pub fn press_position(&self) -> Option<Point<Pixels>> {
        match self {
            Self::Idle => None,
            Self::Armed { press_position, .. } | Self::Dragging { press_position, .. } => {
                Some(*press_position)
            }
        }
    }

    /// Live column width of a resize session; 0 when idle
    pub fn pending_width(&self) -> f32 {
        match self {
            Self::Idle => 0.0,
            Self::Armed { baseline_width, .. } => *baseline_width,
            Self::Dragging { pending_width, .. } => *pending_width,
        }
    }

    /// Start a new session at `anchor`
    pub fn arm(
        &mut self,
        anchor: CellCoordinate,
        press_position: Point<Pixels>,
        baseline_width: f32,
        modifiers: Modifiers,
    ) {
        *self = Self::Armed {
            anchor,
            press_position,
            baseline_width,
            modifiers,
        };
    }

    /// Promote an armed session to a drag. The resize reference starts at the
    /// press position. Returns false if the session was not armed.
    pub fn start_drag(&mut self) -> bool {
        let Self::Armed {
            anchor,
            press_position,
            baseline_width,
            ..
        } = *self
        else {
            return false;
        };
        *self = Self::Dragging {
            anchor,
            press_position,
            last_x: press_position.x,
            pending_width: baseline_width,
        };
        true
    }

    /// Reset to Idle, returning the finished session
    pub fn finish(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Reset to Idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
