//! Replay command - feed a recorded track through the driving-state monitor.

use std::path::PathBuf;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use waymark::driving::{
    DrivingConfig, DrivingState, DrivingStateMonitor, LocationSource, PositionSample, ReplaySource,
};

use crate::error::CliError;

/// Arguments for the replay command.
pub struct ReplayArgs {
    pub track: PathBuf,
    pub interval_ms: Option<u64>,
}

/// A published state and when it arrived relative to the start of the replay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub at: Duration,
    pub state: DrivingState,
}

/// Run the replay command.
pub fn run(args: ReplayArgs, driving: &DrivingConfig) -> Result<(), CliError> {
    let mut driving = driving.clone();
    if let Some(ms) = args.interval_ms {
        driving = driving.with_sample_interval(Duration::from_millis(ms));
        driving.validate()?;
    }

    let source = ReplaySource::from_file(&args.track)?;
    if source.is_empty() {
        println!("Track is empty, nothing to replay.");
        return Ok(());
    }

    println!("Waymark Track Replay v{}", waymark::VERSION);
    println!("==========================");
    println!();
    println!("Track:     {}", args.track.display());
    println!("Samples:   {}", source.len());
    println!("Interval:  {} ms", driving.sample_interval.as_millis());
    println!(
        "Threshold: {} m over {} samples (accuracy < {} m)",
        driving.driving_threshold_m, driving.history_capacity, driving.accuracy_threshold_m
    );
    println!();

    let shutdown = CancellationToken::new();
    let ctrlc_token = shutdown.clone();
    ctrlc::set_handler(move || ctrlc_token.cancel())
        .map_err(|e| CliError::Runtime(format!("Failed to install Ctrl-C handler: {}", e)))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    let transitions = runtime.block_on(replay(driving, source, shutdown, |t| {
        println!("[{:>8.1}s] {} ({})", t.at.as_secs_f64(), t.state, t.state.description());
    }));

    println!();
    match transitions.last() {
        Some(last) => println!(
            "{} transition(s), final state: {}",
            transitions.len().saturating_sub(1),
            last.state
        ),
        None => println!("Replay stopped before the first sample"),
    }

    Ok(())
}

/// Drive the monitor over the whole track, reporting each published state.
///
/// The tick after the last recorded sample cancels `shutdown`, so the
/// monitor sees every sample once. Cancelling `shutdown` from outside stops
/// the replay early.
pub async fn replay(
    config: DrivingConfig,
    mut source: ReplaySource,
    shutdown: CancellationToken,
    mut on_transition: impl FnMut(&Transition),
) -> Vec<Transition> {
    let stop = shutdown.clone();
    let track = move || -> Option<PositionSample> {
        if source.is_exhausted() {
            if !stop.is_cancelled() {
                tracing::debug!("Track exhausted, stopping monitor");
                stop.cancel();
            }
            return None;
        }
        source.last_known()
    };
    let (monitor, mut rx) = DrivingStateMonitor::new(config, track);

    let start = Instant::now();
    let handle = tokio::spawn(monitor.run(shutdown));

    let mut transitions = Vec::new();
    while let Some(state) = rx.recv().await {
        let transition = Transition {
            at: start.elapsed(),
            state,
        };
        on_transition(&transition);
        transitions.push(transition);
    }

    if let Err(e) = handle.await {
        tracing::warn!(error = %e, "Driving state monitor task failed");
    }

    transitions
}
