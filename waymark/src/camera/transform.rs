//! Screen-space gesture to geographic camera math.
//!
//! # Pan
//!
//! ```text
//! degrees_per_px = 360 / (tile_size * 2^zoom) * cos(lat)
//! lon' = wrap(lon + dx * degrees_per_px)
//! lat' = clamp(lat - dy * degrees_per_px)      // screen Y grows downward
//! ```
//!
//! # Pinch
//!
//! ```text
//! zoom_delta = log2(scale) * sensitivity
//! ```
//!
//! # Non-finite Inputs
//!
//! The boundary functions ([`pan_to`], [`pinch_scale_to_zoom_delta`] and the
//! [`CameraTransform`] methods) reject NaN and infinite inputs with
//! [`CameraError::NonFinite`] instead of producing an undefined camera state.
//! [`wrap_longitude`] and [`clamp_latitude`] are total over `f64` and simply
//! propagate NaN; they only ever see validated values from the boundary.

use super::config::CameraConfig;
use super::error::{ensure_finite, CameraError};
use crate::config::ConfigError;
use crate::geo::{GeoPoint, MAX_CAMERA_LAT, MAX_LON, MIN_CAMERA_LAT, MIN_LON};

/// Map camera viewport: center and zoom level.
///
/// Owned by the map renderer; the transform only computes new values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Geographic center of the viewport.
    pub center: GeoPoint,
    /// Zoom level.
    pub zoom: f64,
}

impl CameraState {
    /// Create a camera state.
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self { center, zoom }
    }
}

/// A recognized gesture, as delivered by the gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Drag by a pixel delta.
    Pan { dx: f64, dy: f64 },
    /// Two-finger pinch with a multiplicative scale (1.0 = no change).
    Pinch { scale: f64 },
    /// Discrete zoom step, e.g. from zoom buttons.
    Zoom { delta: f64 },
}

/// Wrap a longitude into [-180, 180].
///
/// Values already in range, including exactly ±180, are returned unchanged,
/// so wrapping is idempotent. Anything else is reduced modulo 360 into
/// [0, 360) and shifted down by 360 when above 180.
#[inline]
pub fn wrap_longitude(longitude: f64) -> f64 {
    if (MIN_LON..=MAX_LON).contains(&longitude) {
        return longitude;
    }

    let mut wrapped = longitude % 360.0;
    if wrapped < 0.0 {
        wrapped += 360.0;
    }
    if wrapped > 180.0 {
        wrapped -= 360.0;
    }
    wrapped
}

/// Clamp a latitude into the camera's [-85, 85] band.
#[inline]
pub fn clamp_latitude(latitude: f64) -> f64 {
    latitude.clamp(MIN_CAMERA_LAT, MAX_CAMERA_LAT)
}

/// Degrees moved per screen pixel at the given zoom and latitude.
#[inline]
fn degrees_per_pixel(zoom: f64, latitude: f64, tile_size_px: f64) -> f64 {
    let world_px = tile_size_px * 2.0_f64.powf(zoom);
    360.0 / world_px * latitude.to_radians().cos()
}

/// Compute the new camera center after panning by a pixel delta.
///
/// # Arguments
///
/// * `center` - Current camera center
/// * `zoom` - Current zoom level
/// * `dx` - Horizontal pixel delta (positive = east)
/// * `dy` - Vertical pixel delta (positive = screen down = south)
/// * `tile_size_px` - Reference tile size in pixels
pub fn pan_to(
    center: GeoPoint,
    zoom: f64,
    dx: f64,
    dy: f64,
    tile_size_px: f64,
) -> Result<GeoPoint, CameraError> {
    let lat = ensure_finite("latitude", center.latitude)?;
    let lon = ensure_finite("longitude", center.longitude)?;
    let zoom = ensure_finite("zoom", zoom)?;
    let dx = ensure_finite("dx", dx)?;
    let dy = ensure_finite("dy", dy)?;
    let tile_size_px = ensure_finite("tile size", tile_size_px)?;
    if tile_size_px <= 0.0 {
        return Err(CameraError::NonPositiveTileSize(tile_size_px));
    }

    let dpp = degrees_per_pixel(zoom, lat, tile_size_px);

    // Extreme deltas can still overflow
    let raw_lon = ensure_finite("longitude", lon + dx * dpp)?;
    let raw_lat = ensure_finite("latitude", lat - dy * dpp)?;

    Ok(GeoPoint::new_unchecked(
        clamp_latitude(raw_lat),
        wrap_longitude(raw_lon),
    ))
}

/// Convert a pinch scale factor into a zoom delta.
///
/// A scale of 1.0 yields 0; below 1 zooms out, above 1 zooms in.
pub fn pinch_scale_to_zoom_delta(scale: f64, sensitivity: f64) -> Result<f64, CameraError> {
    let scale = ensure_finite("scale", scale)?;
    let sensitivity = ensure_finite("sensitivity", sensitivity)?;
    if scale <= 0.0 {
        return Err(CameraError::NonPositiveScale(scale));
    }
    if sensitivity <= 0.0 {
        return Err(CameraError::NonPositiveSensitivity(sensitivity));
    }
    Ok(scale.log2() * sensitivity)
}

/// Applies gestures to camera states using a fixed configuration.
///
/// Holds no camera state of its own, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraTransform {
    config: CameraConfig,
}

impl CameraTransform {
    /// Create a transform, rejecting a configuration that fails
    /// [`CameraConfig::validate`].
    pub fn new(config: CameraConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// The active configuration.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Pan the camera by a pixel delta. Zoom is unchanged.
    pub fn pan(&self, camera: CameraState, dx: f64, dy: f64) -> Result<CameraState, CameraError> {
        let center = pan_to(camera.center, camera.zoom, dx, dy, self.config.tile_size_px)?;
        Ok(CameraState::new(center, camera.zoom))
    }

    /// Zoom the camera by a pinch scale factor, clamped into the zoom range.
    pub fn pinch(&self, camera: CameraState, scale: f64) -> Result<CameraState, CameraError> {
        let delta = pinch_scale_to_zoom_delta(scale, self.config.pinch_sensitivity)?;
        self.zoom_by(camera, delta)
    }

    /// Zoom the camera by a number of levels, clamped into the zoom range.
    pub fn zoom_by(&self, camera: CameraState, delta: f64) -> Result<CameraState, CameraError> {
        let zoom = ensure_finite("zoom", camera.zoom)?;
        let delta = ensure_finite("zoom delta", delta)?;
        let clamped = self.config.zoom_range.clamp(zoom + delta);
        Ok(CameraState::new(camera.center, clamped))
    }

    /// Apply any gesture.
    pub fn apply(&self, camera: CameraState, gesture: Gesture) -> Result<CameraState, CameraError> {
        let result = match gesture {
            Gesture::Pan { dx, dy } => self.pan(camera, dx, dy),
            Gesture::Pinch { scale } => self.pinch(camera, scale),
            Gesture::Zoom { delta } => self.zoom_by(camera, delta),
        };

        if let Err(ref e) = result {
            tracing::debug!(gesture = ?gesture, error = %e, "Rejected camera gesture");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::ZoomRange;

    const TILE: f64 = 512.0;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new_unchecked(lat, lon)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // wrap_longitude
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_wrap_longitude_reference_values() {
        assert_eq!(wrap_longitude(190.0), -170.0);
        assert_eq!(wrap_longitude(-190.0), 170.0);
        assert_eq!(wrap_longitude(180.0), 180.0);
        assert_eq!(wrap_longitude(-180.0), -180.0);
        assert_eq!(wrap_longitude(0.0), 0.0);
    }

    #[test]
    fn test_wrap_longitude_multiple_turns() {
        assert_eq!(wrap_longitude(370.0), 10.0);
        assert_eq!(wrap_longitude(-370.0), -10.0);
        assert_eq!(wrap_longitude(540.0), 180.0);
        assert_eq!(wrap_longitude(720.0), 0.0);
    }

    #[test]
    fn test_wrap_longitude_boundaries_are_stable() {
        for lon in [180.0, -180.0] {
            assert_eq!(wrap_longitude(wrap_longitude(lon)), lon);
        }
    }

    #[test]
    fn test_wrap_longitude_propagates_nan() {
        assert!(wrap_longitude(f64::NAN).is_nan());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // pinch_scale_to_zoom_delta
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_pinch_doubling_is_sensitivity() {
        assert_eq!(pinch_scale_to_zoom_delta(2.0, 2.0), Ok(2.0));
    }

    #[test]
    fn test_pinch_no_change_is_zero() {
        assert_eq!(pinch_scale_to_zoom_delta(1.0, 2.0), Ok(0.0));
        assert_eq!(pinch_scale_to_zoom_delta(1.0, 7.5), Ok(0.0));
    }

    #[test]
    fn test_pinch_direction() {
        assert!(pinch_scale_to_zoom_delta(0.5, 2.0).unwrap() < 0.0);
        assert!(pinch_scale_to_zoom_delta(1.5, 2.0).unwrap() > 0.0);
        assert_eq!(pinch_scale_to_zoom_delta(0.5, 2.0), Ok(-2.0));
    }

    #[test]
    fn test_pinch_rejects_non_positive_scale() {
        assert_eq!(
            pinch_scale_to_zoom_delta(0.0, 2.0),
            Err(CameraError::NonPositiveScale(0.0))
        );
        assert_eq!(
            pinch_scale_to_zoom_delta(-1.0, 2.0),
            Err(CameraError::NonPositiveScale(-1.0))
        );
    }

    #[test]
    fn test_pinch_rejects_non_finite_scale() {
        assert!(matches!(
            pinch_scale_to_zoom_delta(f64::NAN, 2.0),
            Err(CameraError::NonFinite { field: "scale", .. })
        ));
        assert!(matches!(
            pinch_scale_to_zoom_delta(f64::INFINITY, 2.0),
            Err(CameraError::NonFinite { .. })
        ));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // pan_to
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_pan_zero_delta_is_identity() {
        let center = point(48.0, 11.0);
        assert_eq!(pan_to(center, 12.0, 0.0, 0.0, TILE), Ok(center));
    }

    #[test]
    fn test_pan_at_equator_zoom_zero() {
        // One full world width is 512 px at zoom 0
        let moved = pan_to(point(0.0, 0.0), 0.0, 128.0, 0.0, TILE).unwrap();
        assert!((moved.longitude - 90.0).abs() < 1e-9);
        assert_eq!(moved.latitude, 0.0);
    }

    #[test]
    fn test_pan_y_is_flipped() {
        let center = point(10.0, 10.0);
        let down = pan_to(center, 5.0, 0.0, 100.0, TILE).unwrap();
        let up = pan_to(center, 5.0, 0.0, -100.0, TILE).unwrap();
        assert!(down.latitude < center.latitude);
        assert!(up.latitude > center.latitude);
        assert_eq!(down.longitude, center.longitude);
    }

    #[test]
    fn test_pan_cosine_correction_at_60_degrees() {
        let equator = pan_to(point(0.0, 0.0), 10.0, 200.0, 0.0, TILE).unwrap();
        let north = pan_to(point(60.0, 0.0), 10.0, 200.0, 0.0, TILE).unwrap();

        assert!(north.longitude.abs() < equator.longitude.abs());
        // cos(60°) = 0.5
        assert!((north.longitude / equator.longitude - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_pan_higher_zoom_moves_less() {
        let low = pan_to(point(0.0, 0.0), 4.0, 100.0, 0.0, TILE).unwrap();
        let high = pan_to(point(0.0, 0.0), 5.0, 100.0, 0.0, TILE).unwrap();
        assert!((low.longitude / high.longitude - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_pan_clamps_latitude_north() {
        let moved = pan_to(point(84.9, 0.0), 2.0, 0.0, -100_000.0, TILE).unwrap();
        assert_eq!(moved.latitude, 85.0);
    }

    #[test]
    fn test_pan_clamps_latitude_south() {
        let moved = pan_to(point(-84.9, 0.0), 2.0, 0.0, 100_000.0, TILE).unwrap();
        assert_eq!(moved.latitude, -85.0);
    }

    #[test]
    fn test_pan_wraps_across_antimeridian() {
        // At zoom 0 on the equator, 512 px = 360°, so 20° ≈ 28.44 px
        let px = 20.0 / 360.0 * TILE;
        let moved = pan_to(point(0.0, 170.0), 0.0, px, 0.0, TILE).unwrap();
        assert!((moved.longitude - (-170.0)).abs() < 1e-9, "got {}", moved.longitude);
    }

    #[test]
    fn test_pan_rejects_non_finite_inputs() {
        let center = point(0.0, 0.0);
        assert!(matches!(
            pan_to(center, f64::NAN, 0.0, 0.0, TILE),
            Err(CameraError::NonFinite { field: "zoom", .. })
        ));
        assert!(matches!(
            pan_to(center, 10.0, f64::INFINITY, 0.0, TILE),
            Err(CameraError::NonFinite { field: "dx", .. })
        ));
        assert!(matches!(
            pan_to(center, 10.0, 0.0, f64::NEG_INFINITY, TILE),
            Err(CameraError::NonFinite { field: "dy", .. })
        ));
        assert!(matches!(
            pan_to(point(f64::NAN, 0.0), 10.0, 0.0, 0.0, TILE),
            Err(CameraError::NonFinite {
                field: "latitude",
                ..
            })
        ));
    }

    #[test]
    fn test_pan_rejects_overflowing_delta() {
        let result = pan_to(point(0.0, 0.0), 0.0, f64::MAX, 0.0, 1e-300);
        assert!(matches!(result, Err(CameraError::NonFinite { .. })));
    }

    #[test]
    fn test_pan_rejects_non_positive_tile_size() {
        let center = point(0.0, 0.0);
        assert_eq!(
            pan_to(center, 10.0, 0.0, 0.0, 0.0),
            Err(CameraError::NonPositiveTileSize(0.0))
        );
        assert_eq!(
            pan_to(center, 10.0, 100.0, 0.0, -512.0),
            Err(CameraError::NonPositiveTileSize(-512.0))
        );
        assert!(matches!(
            pan_to(center, 10.0, 0.0, 0.0, f64::NAN),
            Err(CameraError::NonFinite {
                field: "tile size",
                ..
            })
        ));
    }

    #[test]
    fn test_pinch_rejects_non_positive_sensitivity() {
        assert_eq!(
            pinch_scale_to_zoom_delta(2.0, -2.0),
            Err(CameraError::NonPositiveSensitivity(-2.0))
        );
        assert_eq!(
            pinch_scale_to_zoom_delta(2.0, 0.0),
            Err(CameraError::NonPositiveSensitivity(0.0))
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // CameraTransform
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_transform_rejects_invalid_config() {
        let negative_tile = CameraConfig::default().with_tile_size_px(-512.0);
        let err = CameraTransform::new(negative_tile).unwrap_err();
        assert!(err.to_string().contains("tile_size_px"));

        let zero_tile = CameraConfig::default().with_tile_size_px(0.0);
        assert!(CameraTransform::new(zero_tile).is_err());

        let negative_sensitivity = CameraConfig::default().with_pinch_sensitivity(-2.0);
        let err = CameraTransform::new(negative_sensitivity).unwrap_err();
        assert!(err.to_string().contains("pinch_sensitivity"));

        assert!(CameraTransform::new(CameraConfig::default()).is_ok());
    }

    #[test]
    fn test_transform_pinch_clamps_zoom() {
        let transform = CameraTransform::with_defaults();
        let camera = CameraState::new(point(0.0, 0.0), 19.5);

        let zoomed = transform.pinch(camera, 4.0).unwrap();
        assert_eq!(zoomed.zoom, 20.0);

        let camera = CameraState::new(point(0.0, 0.0), 2.5);
        let zoomed = transform.pinch(camera, 0.25).unwrap();
        assert_eq!(zoomed.zoom, 2.0);
    }

    #[test]
    fn test_transform_pinch_within_range() {
        let transform = CameraTransform::with_defaults();
        let camera = CameraState::new(point(0.0, 0.0), 10.0);
        let zoomed = transform.pinch(camera, 2.0).unwrap();
        assert_eq!(zoomed.zoom, 12.0);
        assert_eq!(zoomed.center, camera.center);
    }

    #[test]
    fn test_transform_clamps_after_delta_not_before() {
        let transform = CameraTransform::with_defaults();
        let camera = CameraState::new(point(0.0, 0.0), 25.0);
        let zoomed = transform.zoom_by(camera, -4.0).unwrap();
        // 25 - 4 = 21 -> 20; clamping the input first would give 16
        assert_eq!(zoomed.zoom, 20.0);
    }

    #[test]
    fn test_transform_custom_range_and_sensitivity() {
        let config = CameraConfig::default()
            .with_zoom_range(ZoomRange::new(5.0, 8.0).unwrap())
            .with_pinch_sensitivity(1.0);
        let transform = CameraTransform::new(config).unwrap();
        let camera = CameraState::new(point(0.0, 0.0), 6.0);

        assert_eq!(transform.pinch(camera, 2.0).unwrap().zoom, 7.0);
        assert_eq!(transform.pinch(camera, 16.0).unwrap().zoom, 8.0);
        assert_eq!(transform.pinch(camera, 1.0 / 16.0).unwrap().zoom, 5.0);
    }

    #[test]
    fn test_transform_pan_keeps_zoom() {
        let transform = CameraTransform::with_defaults();
        let camera = CameraState::new(point(52.0, 13.0), 14.0);
        let moved = transform.pan(camera, 50.0, -20.0).unwrap();
        assert_eq!(moved.zoom, 14.0);
        assert!(moved.center.longitude > 13.0);
        assert!(moved.center.latitude > 52.0);
    }

    #[test]
    fn test_transform_apply_dispatches() {
        let transform = CameraTransform::with_defaults();
        let camera = CameraState::new(point(0.0, 0.0), 10.0);

        assert_eq!(
            transform.apply(camera, Gesture::Zoom { delta: 1.0 }).unwrap().zoom,
            11.0
        );
        assert_eq!(
            transform.apply(camera, Gesture::Pinch { scale: 2.0 }).unwrap().zoom,
            12.0
        );
        let panned = transform
            .apply(camera, Gesture::Pan { dx: 10.0, dy: 0.0 })
            .unwrap();
        assert!(panned.center.longitude > 0.0);
    }

    #[test]
    fn test_transform_apply_rejects_bad_pinch() {
        let transform = CameraTransform::with_defaults();
        let camera = CameraState::new(point(0.0, 0.0), 10.0);
        assert_eq!(
            transform.apply(camera, Gesture::Pinch { scale: 0.0 }),
            Err(CameraError::NonPositiveScale(0.0))
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_wrap_longitude_in_range(lon in -10_000.0..10_000.0_f64) {
                let wrapped = wrap_longitude(lon);
                prop_assert!(
                    (-180.0..=180.0).contains(&wrapped),
                    "wrap({}) = {} out of range", lon, wrapped
                );
            }

            #[test]
            fn test_wrap_longitude_idempotent(lon in -10_000.0..10_000.0_f64) {
                let once = wrap_longitude(lon);
                prop_assert_eq!(wrap_longitude(once), once);
            }

            #[test]
            fn test_wrap_longitude_congruent_mod_360(lon in -10_000.0..10_000.0_f64) {
                let diff = (lon - wrap_longitude(lon)) / 360.0;
                prop_assert!((diff - diff.round()).abs() < 1e-9);
            }

            #[test]
            fn test_pan_latitude_always_in_band(
                lat in -85.0..85.0_f64,
                lon in -180.0..180.0_f64,
                zoom in 2.0..20.0_f64,
                dx in -1e6..1e6_f64,
                dy in -1e6..1e6_f64
            ) {
                let moved = pan_to(GeoPoint::new_unchecked(lat, lon), zoom, dx, dy, TILE)?;
                prop_assert!(moved.latitude >= -85.0 && moved.latitude <= 85.0);
                prop_assert!(moved.longitude >= -180.0 && moved.longitude <= 180.0);
            }

            #[test]
            fn test_pinch_zoom_always_in_range(
                zoom in 2.0..20.0_f64,
                scale in 0.001..1000.0_f64
            ) {
                let transform = CameraTransform::with_defaults();
                let camera = CameraState::new(GeoPoint::new_unchecked(0.0, 0.0), zoom);
                let zoomed = transform.pinch(camera, scale)?;
                prop_assert!(zoomed.zoom >= 2.0 && zoomed.zoom <= 20.0);
            }

            #[test]
            fn test_pinch_sign_matches_scale(scale in 0.01..100.0_f64) {
                let delta = pinch_scale_to_zoom_delta(scale, 2.0)?;
                if scale > 1.0 {
                    prop_assert!(delta > 0.0);
                } else if scale < 1.0 {
                    prop_assert!(delta < 0.0);
                }
            }
        }
    }
}
