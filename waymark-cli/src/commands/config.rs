//! Configuration CLI commands.
//!
//! Provides `config path`, `config show`, and `config init`.

use std::path::Path;

use clap::Subcommand;
use waymark::config::ConfigFile;

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective configuration (file values over defaults)
    Show,

    /// Write a configuration file populated with the defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run a config subcommand against the file at `path`.
pub fn run(command: ConfigCommands, path: &Path) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(path),
        ConfigCommands::Show => run_show(path),
        ConfigCommands::Init { force } => run_init(path, force),
    }
}

fn run_path(path: &Path) -> Result<(), CliError> {
    println!("{}", path.display());
    if !path.exists() {
        println!("(file does not exist, defaults are in effect)");
    }
    Ok(())
}

fn run_show(path: &Path) -> Result<(), CliError> {
    let config = ConfigFile::load_from(path)?;

    println!("# {}", path.display());
    for (section, properties) in config.to_ini().iter() {
        if section.is_none() && properties.iter().next().is_none() {
            continue;
        }
        if let Some(section) = section {
            println!("[{}]", section);
        }
        for (key, value) in properties.iter() {
            println!("{} = {}", key, value);
        }
        println!();
    }
    Ok(())
}

fn run_init(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        println!("Config file already exists: {}", path.display());
        println!("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    ConfigFile::default().save_to(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
