//! Logging setup.
//!
//! Library code only emits `tracing` events; binaries call [`init`] once at
//! startup to install a subscriber. `RUST_LOG` always wins over the verbosity
//! flag.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Options for [`init`].
#[derive(Debug, Clone, Default)]
pub struct LoggingOptions {
    /// Log debug output for this crate instead of info.
    pub verbose: bool,
    /// Also write logs to this file.
    pub log_file: Option<PathBuf>,
}

/// Errors that can occur while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// A global subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),

    /// The log file path has no file name component.
    #[error("Invalid log file path: {0}")]
    InvalidPath(PathBuf),
}

/// The filter applied when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "waymark=debug,info"
    } else {
        "waymark=info,warn"
    }
}

/// Install the global subscriber.
///
/// Returns the file writer guard when logging to a file; keep it alive for
/// the lifetime of the program so buffered lines are flushed.
pub fn init(options: &LoggingOptions) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(options.verbose)));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    match &options.log_file {
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()
                .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;
            Ok(None)
        }
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| LoggingError::InvalidPath(path.clone()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().with_writer(writer).with_ansi(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .try_init()
                .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;
            Ok(Some(guard))
        }
    }
}
