//! Cadence driver for the driving-state detector.
//!
//! The [`DrivingStateMonitor`] owns a detector and a location source and runs
//! as a long-lived task:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                     DrivingStateMonitor                        │
//! │                                                                │
//! │  every tick (default 1s):                                      │
//! │    LocationSource ──► AccuracyFilter ──► DrivingStateDetector  │
//! │                                               │                │
//! │                                   changed? ───┴──► mpsc::Sender│
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Consumers only see transitions: the first computed state is always sent,
//! after that a value is sent only when it differs from the last one sent.
//!
//! # Example
//!
//! ```ignore
//! use waymark::driving::{DrivingConfig, DrivingStateMonitor, ReplaySource};
//! use tokio_util::sync::CancellationToken;
//!
//! let (monitor, mut states) = DrivingStateMonitor::new(DrivingConfig::default(), source);
//!
//! let shutdown = CancellationToken::new();
//! tokio::spawn(monitor.run(shutdown.clone()));
//!
//! while let Some(state) = states.recv().await {
//!     println!("now {}", state);
//! }
//! ```

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::accuracy::AccuracyFilter;
use super::config::DrivingConfig;
use super::detector::DrivingStateDetector;
use super::source::LocationSource;
use super::state::DrivingState;

/// Default channel capacity for driving-state notifications.
///
/// Only transitions are sent, so the channel rarely holds more than one value.
pub const DEFAULT_STATE_CHANNEL_CAPACITY: usize = 16;

/// Samples a location source at a fixed cadence and publishes driving-state
/// transitions.
pub struct DrivingStateMonitor<S>
where
    S: LocationSource,
{
    /// The detector; owned exclusively by this monitor.
    detector: DrivingStateDetector,

    /// Accuracy gate applied to every sample.
    filter: AccuracyFilter,

    /// Where positions come from.
    source: S,

    /// Delay between ticks.
    interval: Duration,

    /// Transition notifications.
    state_tx: mpsc::Sender<DrivingState>,

    /// Last value sent to consumers.
    last_emitted: Option<DrivingState>,
}

impl<S> DrivingStateMonitor<S>
where
    S: LocationSource,
{
    /// Creates a monitor with its notification channel.
    ///
    /// Returns the monitor and the receiver consumers read transitions from.
    pub fn new(config: DrivingConfig, source: S) -> (Self, mpsc::Receiver<DrivingState>) {
        let (state_tx, state_rx) = mpsc::channel(DEFAULT_STATE_CHANNEL_CAPACITY);

        let monitor = Self {
            detector: DrivingStateDetector::new(&config),
            filter: AccuracyFilter::new(config.accuracy_threshold_m),
            source,
            interval: config.sample_interval,
            state_tx,
            last_emitted: None,
        };

        (monitor, state_rx)
    }

    /// Runs one tick: sample, filter, update, and return the state to emit.
    ///
    /// Returns `None` when the state equals the last emitted one.
    fn tick(&mut self) -> Option<DrivingState> {
        let sample = self.source.last_known();
        let position = self.filter.filter(sample);
        let state = self.detector.update(position);

        if self.last_emitted == Some(state) {
            return None;
        }
        self.last_emitted = Some(state);
        Some(state)
    }

    /// Runs the monitor until shutdown is signalled or the receiver is dropped.
    ///
    /// The first tick happens immediately, subsequent ticks one interval
    /// apart. Once `shutdown` is cancelled no further ticks run and nothing
    /// more is sent.
    pub async fn run(mut self, shutdown: CancellationToken) {
        info!(interval = ?self.interval, "Driving state monitor started");

        loop {
            if shutdown.is_cancelled() {
                break;
            }

            if let Some(state) = self.tick() {
                debug!(state = %state, "Publishing driving state");

                tokio::select! {
                    biased;

                    _ = shutdown.cancelled() => break,

                    sent = self.state_tx.send(state) => {
                        if sent.is_err() {
                            debug!("Driving state receiver dropped");
                            break;
                        }
                    }
                }
            }

            tokio::select! {
                biased;

                _ = shutdown.cancelled() => break,

                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!(
            final_state = %self.detector.state(),
            "Driving state monitor stopped"
        );
    }
}
