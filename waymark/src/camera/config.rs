//! Configuration for camera gesture math.

use super::zoom::ZoomRange;
use crate::config::ConfigError;

/// Default reference tile size in pixels.
pub const DEFAULT_TILE_SIZE_PX: f64 = 512.0;

/// Default pinch sensitivity (zoom levels per doubling of the pinch scale).
pub const DEFAULT_PINCH_SENSITIVITY: f64 = 2.0;

/// Configuration for [`CameraTransform`](super::CameraTransform).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Reference tile size used to convert pixels to degrees.
    ///
    /// Default: 512 px.
    pub tile_size_px: f64,

    /// Zoom bounds applied after every zoom-affecting operation.
    ///
    /// Default: [2, 20].
    pub zoom_range: ZoomRange,

    /// Multiplier applied to `log2(scale)` for pinch gestures.
    ///
    /// Default: 2.0.
    pub pinch_sensitivity: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            tile_size_px: DEFAULT_TILE_SIZE_PX,
            zoom_range: ZoomRange::default(),
            pinch_sensitivity: DEFAULT_PINCH_SENSITIVITY,
        }
    }
}

impl CameraConfig {
    /// Set the zoom range.
    pub fn with_zoom_range(mut self, range: ZoomRange) -> Self {
        self.zoom_range = range;
        self
    }

    /// Set the pinch sensitivity.
    pub fn with_pinch_sensitivity(mut self, sensitivity: f64) -> Self {
        self.pinch_sensitivity = sensitivity;
        self
    }

    /// Set the reference tile size.
    pub fn with_tile_size_px(mut self, tile_size_px: f64) -> Self {
        self.tile_size_px = tile_size_px;
        self
    }

    /// Check that tile size and sensitivity are positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tile_size_px.is_finite() && self.tile_size_px > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tile_size_px must be a positive number, got {}",
                self.tile_size_px
            )));
        }
        if !(self.pinch_sensitivity.is_finite() && self.pinch_sensitivity > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "pinch_sensitivity must be a positive number, got {}",
                self.pinch_sensitivity
            )));
        }
        Ok(())
    }
}
