//! Free-driving detection.
//!
//! Decides, from a noisy and possibly gapped stream of positions, whether the
//! user is currently driving. The map UI uses the signal to switch between the
//! free-driving and the stationary presentation.
//!
//! # Architecture
//!
//! ```text
//! LocationSource ──► AccuracyFilter ──► DrivingStateDetector ──► DrivingState
//!  (1 Hz poll)       (>= 15 m = absent)  (100-sample ring,        (change-only
//!                                         > 30 m displacement)     channel)
//! ```
//!
//! [`DrivingStateDetector`] is the pure state machine; [`DrivingStateMonitor`]
//! drives it from a [`LocationSource`] at a fixed cadence and publishes
//! transitions until cancelled.
//!
//! # State Machine
//!
//! | From       | To         | Condition                                    |
//! |------------|------------|----------------------------------------------|
//! | NotDriving | Driving    | fresh fix and some retained fix > threshold  |
//! | Driving    | NotDriving | fresh fix and every retained fix ≤ threshold |
//! | any        | unchanged  | absent sample                                |

mod accuracy;
mod config;
mod detector;
mod history;
mod monitor;
mod source;
mod state;

pub use accuracy::{AccuracyFilter, PositionSample};
pub use config::{
    DrivingConfig, DEFAULT_ACCURACY_THRESHOLD_M, DEFAULT_DRIVING_THRESHOLD_M,
    DEFAULT_HISTORY_CAPACITY, DEFAULT_SAMPLE_INTERVAL,
};
pub use detector::DrivingStateDetector;
pub use history::{HistoryEntry, PositionHistory};
pub use monitor::{DrivingStateMonitor, DEFAULT_STATE_CHANNEL_CAPACITY};
pub use source::{load_track, parse_track, LocationSource, ReplaySource, TrackError};
pub use state::DrivingState;
