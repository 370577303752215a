//! Geographic point type and related constants.

use std::fmt;

use thiserror::Error;

/// Mean Earth radius in meters (IUGG).
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Southern latitude bound the map camera may be centered on.
pub const MIN_CAMERA_LAT: f64 = -85.0;

/// Northern latitude bound the map camera may be centered on.
pub const MAX_CAMERA_LAT: f64 = 85.0;

/// Western longitude bound.
pub const MIN_LON: f64 = -180.0;

/// Eastern longitude bound.
pub const MAX_LON: f64 = 180.0;

/// Errors that can occur when constructing geographic values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    /// A coordinate component was NaN or infinite.
    #[error("Non-finite {component}: {value}")]
    NonFinite {
        component: &'static str,
        value: f64,
    },
}

/// A (latitude, longitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point, rejecting non-finite components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !latitude.is_finite() {
            return Err(GeoError::NonFinite {
                component: "latitude",
                value: latitude,
            });
        }
        if !longitude.is_finite() {
            return Err(GeoError::NonFinite {
                component: "longitude",
                value: longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Creates a point without validation.
    ///
    /// Intended for constants and values already checked upstream.
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in meters (haversine).
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        super::haversine_m(self, other)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
