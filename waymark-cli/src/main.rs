//! Waymark CLI - command-line interface
//!
//! Replays recorded position tracks through the free-driving detector and
//! applies single map camera gestures, using the same configuration file the
//! library reads.

mod commands;
mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use waymark::config::{config_file_path, ConfigFile};
use waymark::logging::{self, LoggingOptions};

use commands::camera::{PanArgs, PinchArgs};
use commands::config::ConfigCommands;
use commands::replay::ReplayArgs;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "waymark", version, about = "Free-driving detection and map camera tools")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Use this configuration file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Replay a JSON track through the driving-state monitor
    Replay {
        /// Track file: a JSON array of {"lat", "lon", "accuracy"?} objects
        track: PathBuf,

        /// Override the sample interval in milliseconds
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,
    },

    /// Pan the camera by a screen-space drag
    Pan {
        /// Camera center latitude
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Camera center longitude
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Camera zoom level
        #[arg(long)]
        zoom: f64,

        /// Horizontal drag in pixels (positive moves east)
        #[arg(long, allow_negative_numbers = true)]
        dx: f64,

        /// Vertical drag in pixels (positive moves south)
        #[arg(long, allow_negative_numbers = true)]
        dy: f64,
    },

    /// Zoom the camera by a pinch scale factor
    Pinch {
        /// Camera center latitude
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        lat: f64,

        /// Camera center longitude
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        lon: f64,

        /// Camera zoom level
        #[arg(long)]
        zoom: f64,

        /// Pinch scale factor (>1 spreads fingers, <1 pinches in)
        #[arg(long)]
        scale: f64,
    },

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    let options = LoggingOptions {
        verbose: cli.verbose,
        log_file: cli.log_file.clone(),
    };
    let _guard = match logging::init(&options) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", CliError::from(e));
            process::exit(1);
        }
    };

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.unwrap_or_else(config_file_path);

    match cli.command {
        Commands::Config(command) => commands::config::run(command, &config_path),
        Commands::Replay { track, interval_ms } => {
            let config = ConfigFile::load_from(&config_path)?;
            commands::replay::run(ReplayArgs { track, interval_ms }, &config.driving)
        }
        Commands::Pan {
            lat,
            lon,
            zoom,
            dx,
            dy,
        } => {
            let config = ConfigFile::load_from(&config_path)?;
            commands::camera::run_pan(
                PanArgs {
                    lat,
                    lon,
                    zoom,
                    dx,
                    dy,
                },
                &config.camera,
            )
        }
        Commands::Pinch {
            lat,
            lon,
            zoom,
            scale,
        } => {
            let config = ConfigFile::load_from(&config_path)?;
            commands::camera::run_pinch(
                PinchArgs {
                    lat,
                    lon,
                    zoom,
                    scale,
                },
                &config.camera,
            )
        }
    }
}
