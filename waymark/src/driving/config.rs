//! Configuration for the driving-state detector and its cadence driver.

use std::num::NonZeroUsize;
use std::time::Duration;

use crate::config::ConfigError;

/// Default number of samples kept in the position history (100 s at 1 Hz).
pub const DEFAULT_HISTORY_CAPACITY: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(capacity) => capacity,
    None => panic!("history capacity must be non-zero"),
};

/// Default displacement in meters beyond which the user counts as driving.
pub const DEFAULT_DRIVING_THRESHOLD_M: f64 = 30.0;

/// Default accuracy radius in meters at or above which a fix is discarded.
pub const DEFAULT_ACCURACY_THRESHOLD_M: f32 = 15.0;

/// Default interval between location samples (1 Hz).
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Configuration for free-driving detection.
#[derive(Debug, Clone, PartialEq)]
pub struct DrivingConfig {
    /// Number of samples (valid or absent) retained in the history.
    ///
    /// Default: 100.
    pub history_capacity: NonZeroUsize,

    /// Displacement in meters that marks the user as driving.
    ///
    /// Any retained fix farther than this from the newest fix flips the
    /// state to driving. Default: 30 m.
    pub driving_threshold_m: f64,

    /// Accuracy radius in meters at or above which a fix is treated as absent.
    ///
    /// Default: 15 m.
    pub accuracy_threshold_m: f32,

    /// Delay between two location samples.
    ///
    /// Default: 1 second.
    pub sample_interval: Duration,
}

impl Default for DrivingConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            driving_threshold_m: DEFAULT_DRIVING_THRESHOLD_M,
            accuracy_threshold_m: DEFAULT_ACCURACY_THRESHOLD_M,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
        }
    }
}

impl DrivingConfig {
    /// Set the history capacity.
    pub fn with_history_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Set the driving displacement threshold.
    pub fn with_driving_threshold_m(mut self, meters: f64) -> Self {
        self.driving_threshold_m = meters;
        self
    }

    /// Set the accuracy rejection threshold.
    pub fn with_accuracy_threshold_m(mut self, meters: f32) -> Self {
        self.accuracy_threshold_m = meters;
        self
    }

    /// Set the sampling interval.
    pub fn with_sample_interval(mut self, interval: Duration) -> Self {
        self.sample_interval = interval;
        self
    }

    /// Check that thresholds are positive and finite and the interval is non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.driving_threshold_m.is_finite() && self.driving_threshold_m > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "driving_threshold_m must be a positive number, got {}",
                self.driving_threshold_m
            )));
        }
        if !(self.accuracy_threshold_m.is_finite() && self.accuracy_threshold_m > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "accuracy_threshold_m must be a positive number, got {}",
                self.accuracy_threshold_m
            )));
        }
        if self.sample_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "sample_interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
