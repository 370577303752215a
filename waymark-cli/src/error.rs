//! CLI error type.

use std::fmt;

use waymark::camera::CameraError;
use waymark::config::ConfigError;
use waymark::driving::TrackError;
use waymark::geo::GeoError;
use waymark::logging::LoggingError;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// Configuration could not be loaded, validated, or saved.
    Config(ConfigError),

    /// The track file could not be loaded.
    Track(TrackError),

    /// A gesture or coordinate was rejected by the camera math.
    Camera(CameraError),

    /// A coordinate argument was invalid.
    Coordinate(GeoError),

    /// Logging could not be initialized.
    Logging(LoggingError),

    /// Failed to create the Tokio runtime or install the signal handler.
    Runtime(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Track(e) => write!(f, "Track error: {}", e),
            CliError::Camera(e) => write!(f, "Camera error: {}", e),
            CliError::Coordinate(e) => write!(f, "Invalid coordinate: {}", e),
            CliError::Logging(e) => write!(f, "Logging error: {}", e),
            CliError::Runtime(msg) => write!(f, "Runtime error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Track(e) => Some(e),
            CliError::Camera(e) => Some(e),
            CliError::Coordinate(e) => Some(e),
            CliError::Logging(e) => Some(e),
            CliError::Runtime(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<TrackError> for CliError {
    fn from(e: TrackError) -> Self {
        CliError::Track(e)
    }
}

impl From<CameraError> for CliError {
    fn from(e: CameraError) -> Self {
        CliError::Camera(e)
    }
}

impl From<GeoError> for CliError {
    fn from(e: GeoError) -> Self {
        CliError::Coordinate(e)
    }
}

impl From<LoggingError> for CliError {
    fn from(e: LoggingError) -> Self {
        CliError::Logging(e)
    }
}
