//! Geographic primitives.
//!
//! Provides the [`GeoPoint`] value type shared by the driving detector and the
//! camera transform, plus the great-circle distance used for displacement checks.

mod types;

pub use types::{GeoError, GeoPoint, EARTH_RADIUS_M, MAX_CAMERA_LAT, MAX_LON, MIN_CAMERA_LAT, MIN_LON};

/// Haversine distance between two points in meters.
#[inline]
pub fn haversine_m(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    // min() guards asin against rounding slightly above 1.0 for antipodes
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Returns a point `meters` north of `origin` along its meridian.
///
/// Handy for building tracks with known displacements.
#[inline]
pub fn offset_north(origin: &GeoPoint, meters: f64) -> GeoPoint {
    let dlat = (meters / EARTH_RADIUS_M).to_degrees();
    GeoPoint::new_unchecked(origin.latitude + dlat, origin.longitude)
}
