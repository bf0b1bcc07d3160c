//! Logging setup
//!
//! Installs a tracing subscriber that appends to the log file under the base
//! directory. Nothing is written to stdout, which keeps the TUI clean.

use std::fs::OpenOptions;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};

/// Initialize file logging. `RUST_LOG` overrides the default level.
pub fn init_logging(paths: &BudgetPaths, verbose: bool) -> BudgetResult<()> {
    paths.ensure_directories()?;

    let log_path = paths.log_file();
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| BudgetError::Io(format!("Failed to open log file: {}", e)))?;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| BudgetError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!(path = %log_path.display(), verbose, "logging initialized");
    Ok(())
}
