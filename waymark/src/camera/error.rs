//! Error types for camera gesture math.

use thiserror::Error;

/// Caller-contract violations rejected at the camera boundary.
///
/// None of these occur for finite positions, finite pixel deltas, positive
/// scale factors and a valid [`CameraConfig`](super::CameraConfig).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CameraError {
    /// An input was NaN or infinite.
    #[error("Non-finite {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// A pinch scale factor was zero or negative.
    #[error("Pinch scale factor must be positive, got {0}")]
    NonPositiveScale(f64),

    /// A reference tile size that is zero or negative.
    #[error("Tile size must be positive, got {0} px")]
    NonPositiveTileSize(f64),

    /// A pinch sensitivity that is zero or negative.
    #[error("Pinch sensitivity must be positive, got {0}")]
    NonPositiveSensitivity(f64),

    /// A zoom range with inverted or non-finite bounds.
    #[error("Invalid zoom range [{min}, {max}]")]
    InvalidZoomRange { min: f64, max: f64 },
}

/// Reject a non-finite input.
#[inline]
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, CameraError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CameraError::NonFinite { field, value })
    }
}
