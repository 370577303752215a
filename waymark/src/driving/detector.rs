//! Free-driving detection from a noisy, gapped position stream.
//!
//! # Detection Logic
//!
//! ```text
//! push sample (fix or absent) into history
//! absent  -> keep previous state
//! fix     -> Driving  if any retained fix is > threshold from the new fix
//!            NotDriving otherwise
//! ```
//!
//! The detector is single-writer: callers serialize `update` calls, typically
//! by owning the detector from a single task (see
//! [`DrivingStateMonitor`](super::DrivingStateMonitor)).

use super::config::DrivingConfig;
use super::history::{HistoryEntry, PositionHistory};
use super::state::DrivingState;
use crate::geo::GeoPoint;

/// Decides whether the user is driving from recent positions.
#[derive(Debug, Clone)]
pub struct DrivingStateDetector {
    /// Last computed state.
    state: DrivingState,

    /// Recent samples, oldest first.
    history: PositionHistory,

    /// Displacement that marks the user as driving (meters).
    driving_threshold_m: f64,
}

impl DrivingStateDetector {
    /// Create a detector with the given configuration.
    pub fn new(config: &DrivingConfig) -> Self {
        Self {
            state: DrivingState::NotDriving,
            history: PositionHistory::new(config.history_capacity),
            driving_threshold_m: config.driving_threshold_m,
        }
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(&DrivingConfig::default())
    }

    /// The last computed state.
    pub fn state(&self) -> DrivingState {
        self.state
    }

    /// Number of samples currently retained.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Feed one tick's sample and return the resulting state.
    ///
    /// `None` marks a tick without a usable fix; it is recorded in the
    /// history but leaves the state unchanged.
    pub fn update(&mut self, position: Option<GeoPoint>) -> DrivingState {
        self.history.push(HistoryEntry::from(position));

        let Some(latest) = position else {
            return self.state;
        };

        let detected = self.detect_state(&latest);
        if detected != self.state {
            tracing::info!(
                from = %self.state,
                to = %detected,
                position = %latest,
                history_len = self.history.len(),
                "Driving state transition"
            );
            self.state = detected;
        }

        self.state
    }

    /// Evaluate the displacement rule against the retained fixes.
    fn detect_state(&self, latest: &GeoPoint) -> DrivingState {
        let moved = self
            .history
            .fixes()
            .any(|fix| fix.distance_to(latest) > self.driving_threshold_m);
        DrivingState::from(moved)
    }

    /// Drop all history and return to `NotDriving` (for testing).
    #[cfg(test)]
    pub fn reset(&mut self) {
        self.history.clear();
        self.state = DrivingState::NotDriving;
    }
}

impl Default for DrivingStateDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}
