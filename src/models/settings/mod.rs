// Overlay settings model
// Loaded from settings.toml; every field falls back to its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_DAYS_FONT_SIZE: f32 = 12.0;
pub const MAX_DAYS_FONT_SIZE: f32 = 200.0;

/// Screen corner the overlay is pinned to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenCorner {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    pub corner: ScreenCorner,
    /// Gap between the overlay and the screen edges, in points
    pub margin: f32,
    pub width: f32,
    pub height: f32,
    pub days_font_size: f32,
    /// Static caption rendered under the day count
    pub label: String,
    pub always_on_top: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            corner: ScreenCorner::TopRight,
            margin: 16.0,
            width: 220.0,
            height: 120.0,
            days_font_size: 48.0,
            label: "Days Remaining".to_string(),
            always_on_top: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsValidationError {
    #[error("overlay size must be positive, got {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
    #[error("margin must not be negative, got {0}")]
    NegativeMargin(f32),
    #[error("days font size must be between {MIN_DAYS_FONT_SIZE} and {MAX_DAYS_FONT_SIZE}, got {0}")]
    FontSizeOutOfRange(f32),
}

impl OverlaySettings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(SettingsValidationError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.margin >= 0.0) {
            return Err(SettingsValidationError::NegativeMargin(self.margin));
        }
        if !(MIN_DAYS_FONT_SIZE..=MAX_DAYS_FONT_SIZE).contains(&self.days_font_size) {
            return Err(SettingsValidationError::FontSizeOutOfRange(self.days_font_size));
        }
        Ok(())
    }
}
