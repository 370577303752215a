//! Map camera gesture math.
//!
//! Converts raw screen-space gesture deltas into geographic camera updates,
//! independent of any particular map renderer. Everything here is a pure
//! function of its inputs: the renderer owns the camera state, passes it in,
//! and applies what comes back.
//!
//! # Example
//!
//! ```
//! use waymark::camera::{CameraState, CameraTransform, Gesture};
//! use waymark::geo::GeoPoint;
//!
//! let transform = CameraTransform::with_defaults();
//! let camera = CameraState::new(GeoPoint::new(52.52, 13.405)?, 14.0);
//!
//! let camera = transform.apply(camera, Gesture::Pan { dx: 40.0, dy: -12.0 })?;
//! let camera = transform.apply(camera, Gesture::Pinch { scale: 2.0 })?;
//! assert_eq!(camera.zoom, 16.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod transform;
mod zoom;

pub use config::{CameraConfig, DEFAULT_PINCH_SENSITIVITY, DEFAULT_TILE_SIZE_PX};
pub use error::CameraError;
pub use transform::{
    clamp_latitude, pan_to, pinch_scale_to_zoom_delta, wrap_longitude, CameraState,
    CameraTransform, Gesture,
};
pub use zoom::{ZoomRange, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
