//! Address Book - Main entry point
//!
//! Runs the interactive command shell on stdin/stdout. Diagnostics go to
//! stderr so they never mix with command output.

use address_book::{Config, Shell};
use anyhow::{Context, Result};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Configuration comes first since it supplies the fallback log level
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut shell = Shell::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell
        .run(stdin.lock(), stdout.lock())
        .context("Failed to read commands")?;

    Ok(())
}
