//! Interaction settings.
//!
//! Settings live in `<config dir>/humangrid/settings.json`. Every field is
//! optional in the file; missing fields take their defaults.

use crate::constants::{DRAG_THRESHOLD, MIN_COLUMN_WIDTH, SETTINGS_DIR, SETTINGS_FILE};
use crate::error::{GridError, GridResult};
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tunables for the grid pointer handlers
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Whether the row-number gutter (column -1) is rendered. Presses on it are ignored.
    pub show_row_numbers: bool,
    /// Pixels a press must travel on either axis before it counts as a drag
    pub drag_threshold: f32,
    /// Narrowest width a header drag can produce
    pub min_column_width: f32,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            show_row_numbers: false,
            drag_threshold: DRAG_THRESHOLD,
            min_column_width: MIN_COLUMN_WIDTH,
        }
    }
}

impl InteractionSettings {
    pub fn with_row_numbers(mut self, show: bool) -> Self {
        self.show_row_numbers = show;
        self
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> GridResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and validate a settings file
    pub fn load_from(path: &Path) -> GridResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load settings from `path`, falling back to defaults if the file is
    /// absent or unusable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path).with_context(|| format!("loading {}", path.display())) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Falling back to default interaction settings: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load from the platform settings location
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> GridResult<()> {
        if !self.drag_threshold.is_finite() || self.drag_threshold < 0.0 {
            return Err(GridError::InvalidSettings(format!(
                "drag_threshold must be a non-negative number, got {}",
                self.drag_threshold
            )));
        }
        if !self.min_column_width.is_finite() || self.min_column_width <= 0.0 {
            return Err(GridError::InvalidSettings(format!(
                "min_column_width must be positive, got {}",
                self.min_column_width
            )));
        }
        Ok(())
    }
}

/// `<config dir>/humangrid/settings.json`, if the platform has a config dir
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}
