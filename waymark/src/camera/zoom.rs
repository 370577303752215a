//! Zoom range clamping.

use super::error::CameraError;

/// Default minimum camera zoom level.
pub const DEFAULT_MIN_ZOOM: f64 = 2.0;

/// Default maximum camera zoom level.
pub const DEFAULT_MAX_ZOOM: f64 = 20.0;

/// Inclusive zoom bounds owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRange {
    min: f64,
    max: f64,
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_ZOOM,
            max: DEFAULT_MAX_ZOOM,
        }
    }
}

impl ZoomRange {
    /// Create a range, rejecting inverted or non-finite bounds.
    pub fn new(min: f64, max: f64) -> Result<Self, CameraError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(CameraError::InvalidZoomRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamp `zoom` into the range.
    #[inline]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }

    /// Whether `zoom` lies within the range.
    pub fn contains(&self, zoom: f64) -> bool {
        (self.min..=self.max).contains(&zoom)
    }
}
