//! Tracing subscriber setup.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` when set, otherwise `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logs to stderr, leaving stdout for program output.
pub fn init_stderr_logging(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Logs to a file so output does not interfere with the TUI.
pub fn init_file_logging(path: &Path, default_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Records the configuration a run is using.
///
/// The config is loaded before any subscriber exists, so this is called once
/// logging is set up.
pub fn log_config(config: &AppConfig, source: Option<&Path>) {
    let source = source.map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
    info!(
        %source,
        player_x = %config.player_x_name(),
        player_o = %config.player_o_name(),
        log_filter = %config.log_filter(),
        "Configuration loaded"
    );
}
