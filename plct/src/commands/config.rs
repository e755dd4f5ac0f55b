//! Config command implementation.
//!
//! Prints the effective configuration, or writes it to a file so it can be
//! edited.

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::Result;

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Write the configuration here instead of printing it.
    pub write: Option<PathBuf>,
}

/// Run the config command against the loaded configuration.
pub fn run_config(args: ConfigArgs, config: &Config) -> Result<()> {
    match args.write {
        Some(path) => {
            config.save_to_path(&path)?;
            info!(path = %path.display(), "configuration written");
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write!(out, "{}", config.to_toml()?)?;
        }
    }
    Ok(())
}
