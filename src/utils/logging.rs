//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::utils::error::{AdminError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter used by [`init_logging`]
///
/// `RUST_LOG` wins over the configured level when it is set and parses.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| AdminError::config(format!("Invalid log level '{}': {}", config.level, e)))
}

/// Install the global tracing subscriber
///
/// Logs go to stderr so command output on stdout stays clean.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| AdminError::config(format!("Failed to initialize logging: {}", e)))
}
