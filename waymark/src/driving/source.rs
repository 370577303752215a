//! Location sources sampled by the driving-state monitor.
//!
//! The monitor polls a [`LocationSource`] once per tick. Live integrations
//! wrap a platform location provider; [`ReplaySource`] plays back a recorded
//! track, which is what the CLI and the integration tests use.
//!
//! # Track File Format
//!
//! ```json
//! [
//!   { "lat": 52.5200, "lon": 13.4050, "accuracy": 4.0 },
//!   { "lat": 52.5201, "lon": 13.4050 }
//! ]
//! ```
//!
//! `accuracy` is optional. Each entry is one tick of the monitor.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::accuracy::PositionSample;
use crate::geo::GeoPoint;

/// Errors that can occur while loading a recorded track.
#[derive(Debug, Error)]
pub enum TrackError {
    /// The track file could not be read.
    #[error("Failed to read track file: {0}")]
    Io(#[from] std::io::Error),

    /// The track file is not a JSON array of samples.
    #[error("Malformed track file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A sample has non-finite coordinates.
    #[error("Invalid sample at index {index}: {reason}")]
    InvalidSample { index: usize, reason: String },
}

/// Something that can report the last known position.
///
/// Sampled once per monitor tick. `None` means no position is available yet.
pub trait LocationSource: Send + 'static {
    /// The most recent position fix, if any.
    fn last_known(&mut self) -> Option<PositionSample>;
}

/// Any closure producing samples can act as a source.
impl<F> LocationSource for F
where
    F: FnMut() -> Option<PositionSample> + Send + 'static,
{
    fn last_known(&mut self) -> Option<PositionSample> {
        self()
    }
}

/// Plays back a recorded track, one sample per tick.
///
/// Once the track is exhausted the source reports `None` forever, just like a
/// provider that lost its fix.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    remaining: VecDeque<Option<PositionSample>>,
    total: usize,
}

impl ReplaySource {
    /// Create a source from samples; `None` entries are ticks without a fix.
    pub fn new(samples: impl IntoIterator<Item = Option<PositionSample>>) -> Self {
        let remaining: VecDeque<_> = samples.into_iter().collect();
        let total = remaining.len();
        Self { remaining, total }
    }

    /// Create a source where every tick has a fix.
    pub fn from_track(track: Vec<PositionSample>) -> Self {
        Self::new(track.into_iter().map(Some))
    }

    /// Load a track file and wrap it in a source.
    pub fn from_file(path: &Path) -> Result<Self, TrackError> {
        Ok(Self::from_track(load_track(path)?))
    }

    /// Total number of ticks in the recording.
    pub fn len(&self) -> usize {
        self.total
    }

    /// Whether the recording has no ticks at all.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Whether every recorded tick has been played.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl LocationSource for ReplaySource {
    fn last_known(&mut self) -> Option<PositionSample> {
        self.remaining.pop_front().flatten()
    }
}

/// On-disk representation of one sample.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawSample {
    lat: f64,
    lon: f64,
    #[serde(default)]
    accuracy: Option<f32>,
}

/// Parse a JSON track from a string.
pub fn parse_track(json: &str) -> Result<Vec<PositionSample>, TrackError> {
    let raw: Vec<RawSample> = serde_json::from_str(json)?;

    raw.into_iter()
        .enumerate()
        .map(|(index, sample)| {
            let point = GeoPoint::new(sample.lat, sample.lon).map_err(|e| {
                TrackError::InvalidSample {
                    index,
                    reason: e.to_string(),
                }
            })?;
            Ok(PositionSample {
                point,
                accuracy_m: sample.accuracy,
            })
        })
        .collect()
}

/// Load a JSON track file.
pub fn load_track(path: &Path) -> Result<Vec<PositionSample>, TrackError> {
    let contents = fs::read_to_string(path)?;
    let track = parse_track(&contents)?;
    tracing::debug!(path = %path.display(), samples = track.len(), "Loaded track");
    Ok(track)
}
