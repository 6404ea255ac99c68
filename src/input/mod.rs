//! Pointer input handling for the grid.
//!
//! This module turns press/move/release events into selection and column
//! width updates on a [`GridHost`].
//!
//! ## Architecture
//!
//! A single state machine ([`DragSession`]) tracks the current interaction.
//! What a drag does is decided once, at press time, by the anchor:
//! a data cell extends a rectangular selection, a column header resizes
//! that column.
//!
//! ## Modules
//!
//! - `state` - Drag session state machine
//! - `mouse_down` - Press handling (guards, single-cell selection, resize baseline)
//! - `drag` - Move handling (threshold, range selection, column resize)
//! - `mouse_up` - Release handling (click vs. end of drag)
//! - `coords` - Pointer distance helpers

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod state;

pub use state::DragSession;

use crate::host::GridHost;
use crate::settings::InteractionSettings;

/// Drag interaction controller for one grid widget.
///
/// Owns the widget's [`GridHost`] and the drag session. Events must be fed in
/// delivery order; `&mut self` on every handler keeps them serialized.
pub struct GridInteraction<H> {
    host: H,
    settings: InteractionSettings,
    session: DragSession,
}

impl<H: GridHost> GridInteraction<H> {
    pub fn new(host: H, settings: InteractionSettings) -> Self {
        Self {
            host,
            settings,
            session: DragSession::Idle,
        }
    }

    pub fn with_default_settings(host: H) -> Self {
        Self::new(host, InteractionSettings::default())
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Returns true once the current press has moved past the threshold
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    pub fn settings(&self) -> &InteractionSettings {
        &self.settings
    }

    /// Replace settings. Takes effect from the next event.
    pub fn set_settings(&mut self, settings: InteractionSettings) {
        self.settings = settings;
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}
