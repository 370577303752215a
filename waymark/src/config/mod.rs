//! Configuration file handling.
//!
//! Settings live in an INI file, by default at
//! `~/.config/waymark/config.ini` (platform config dir via `dirs`). Missing
//! files and missing keys fall back to the built-in defaults.
//!
//! # Example Configuration (INI)
//!
//! ```ini
//! [driving]
//! history_capacity = 100
//! driving_threshold_m = 30
//! accuracy_threshold_m = 15
//! sample_interval_ms = 1000
//!
//! [camera]
//! tile_size_px = 512
//! min_zoom = 2
//! max_zoom = 20
//! pinch_sensitivity = 2
//! ```

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use ini::{Ini, Properties};
use thiserror::Error;

use crate::camera::{CameraConfig, ZoomRange};
use crate::driving::DrivingConfig;

const DRIVING_SECTION: &str = "driving";
const CAMERA_SECTION: &str = "camera";

/// Errors that can occur while loading, validating, or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid INI.
    #[error("Failed to parse config file: {0}")]
    Parse(String),

    /// A key holds a value of the wrong type.
    #[error("Invalid value '{value}' for {section}.{key}")]
    InvalidValue {
        section: &'static str,
        key: &'static str,
        value: String,
    },

    /// Values parsed but are out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ini::Error> for ConfigError {
    fn from(e: ini::Error) -> Self {
        match e {
            ini::Error::Io(io) => ConfigError::Io(io),
            ini::Error::Parse(parse) => ConfigError::Parse(parse.to_string()),
        }
    }
}

/// Path of the user configuration file.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("waymark")
        .join("config.ini")
}

/// All settings read from the configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    /// Free-driving detection settings.
    pub driving: DrivingConfig,
    /// Camera gesture settings.
    pub camera: CameraConfig,
}

impl ConfigFile {
    /// Load from the default location, using defaults if the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load from `path`, using defaults if the file is absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        let config = Self::from_ini(&ini)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Parse from INI text.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(section) = ini.section(Some(DRIVING_SECTION)) {
            let driving = &mut config.driving;
            if let Some(capacity) = get::<usize>(section, DRIVING_SECTION, "history_capacity")? {
                driving.history_capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
                    ConfigError::Invalid("history_capacity must be at least 1".to_string())
                })?;
            }
            if let Some(v) = get(section, DRIVING_SECTION, "driving_threshold_m")? {
                driving.driving_threshold_m = v;
            }
            if let Some(v) = get(section, DRIVING_SECTION, "accuracy_threshold_m")? {
                driving.accuracy_threshold_m = v;
            }
            if let Some(ms) = get::<u64>(section, DRIVING_SECTION, "sample_interval_ms")? {
                driving.sample_interval = Duration::from_millis(ms);
            }
        }

        if let Some(section) = ini.section(Some(CAMERA_SECTION)) {
            let camera = &mut config.camera;
            if let Some(v) = get(section, CAMERA_SECTION, "tile_size_px")? {
                camera.tile_size_px = v;
            }
            if let Some(v) = get(section, CAMERA_SECTION, "pinch_sensitivity")? {
                camera.pinch_sensitivity = v;
            }
            let min = get(section, CAMERA_SECTION, "min_zoom")?.unwrap_or(camera.zoom_range.min());
            let max = get(section, CAMERA_SECTION, "max_zoom")?.unwrap_or(camera.zoom_range.max());
            camera.zoom_range =
                ZoomRange::new(min, max).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.driving.validate()?;
        self.camera.validate()
    }

    /// Render as INI.
    pub fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        ini.with_section(Some(DRIVING_SECTION))
            .set("history_capacity", self.driving.history_capacity.to_string())
            .set(
                "driving_threshold_m",
                self.driving.driving_threshold_m.to_string(),
            )
            .set(
                "accuracy_threshold_m",
                self.driving.accuracy_threshold_m.to_string(),
            )
            .set(
                "sample_interval_ms",
                self.driving.sample_interval.as_millis().to_string(),
            );
        ini.with_section(Some(CAMERA_SECTION))
            .set("tile_size_px", self.camera.tile_size_px.to_string())
            .set("min_zoom", self.camera.zoom_range.min().to_string())
            .set("max_zoom", self.camera.zoom_range.max().to_string())
            .set(
                "pinch_sensitivity",
                self.camera.pinch_sensitivity.to_string(),
            );
        ini
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.to_ini().write_to_file(path)?;
        Ok(())
    }
}

/// Read and parse an optional key.
fn get<T: FromStr>(
    section: &Properties,
    section_name: &'static str,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match section.get(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                section: section_name,
                key,
                value: raw.to_string(),
            }),
    }
}
