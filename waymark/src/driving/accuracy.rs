//! Position samples and the accuracy gate in front of the detector.

use super::config::DEFAULT_ACCURACY_THRESHOLD_M;
use crate::geo::GeoPoint;

/// A position fix as reported by the location source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    /// Reported position.
    pub point: GeoPoint,
    /// Reported uncertainty radius in meters, if the source provides one.
    pub accuracy_m: Option<f32>,
}

impl PositionSample {
    /// Create a sample without accuracy information.
    pub fn new(point: GeoPoint) -> Self {
        Self {
            point,
            accuracy_m: None,
        }
    }

    /// Create a sample with a reported accuracy radius.
    pub fn with_accuracy(point: GeoPoint, accuracy_m: f32) -> Self {
        Self {
            point,
            accuracy_m: Some(accuracy_m),
        }
    }
}

/// Maps inaccurate fixes to "no position" before they reach the detector.
///
/// A fix whose accuracy radius is greater than or equal to the threshold is
/// dropped. Fixes below the threshold, and fixes without any accuracy
/// information, pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyFilter {
    threshold_m: f32,
}

impl Default for AccuracyFilter {
    fn default() -> Self {
        Self::new(DEFAULT_ACCURACY_THRESHOLD_M)
    }
}

impl AccuracyFilter {
    /// Create a filter rejecting fixes at or above `threshold_m`.
    pub fn new(threshold_m: f32) -> Self {
        Self { threshold_m }
    }

    /// The rejection threshold in meters.
    pub fn threshold_m(&self) -> f32 {
        self.threshold_m
    }

    /// Whether a sample passes the gate.
    pub fn accepts(&self, sample: &PositionSample) -> bool {
        match sample.accuracy_m {
            Some(accuracy) => accuracy < self.threshold_m,
            None => true,
        }
    }

    /// Reduce a (possibly missing) sample to the point fed to the detector.
    pub fn filter(&self, sample: Option<PositionSample>) -> Option<GeoPoint> {
        let sample = sample?;
        if self.accepts(&sample) {
            Some(sample.point)
        } else {
            tracing::trace!(
                accuracy_m = sample.accuracy_m,
                threshold_m = self.threshold_m,
                "Discarding inaccurate fix"
            );
            None
        }
    }
}
