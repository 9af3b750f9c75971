//! Logging initialisation built on the `tracing` ecosystem.
//!
//! Events go to stdout at the level named in the configuration; when file
//! logging is enabled they are also written to a timestamped
//! `verman_{timestamp}.log` file under the configured directory.

use std::fs::{self, File};
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::utils::config::LogConfig;
use crate::utils::dates;
use crate::utils::error::{Result, VermanError};

/// Map a configured level name to a filter directive.
///
/// Unknown names fall back to "debug".
fn level_directive(level: &str) -> &'static str {
    match level.to_lowercase().as_str() {
        "error" => "error",
        "warning" => "warn",
        "info" => "info",
        _ => "debug",
    }
}

/// Initialise the global tracing subscriber from the logging configuration.
///
/// The `RUST_LOG` environment variable overrides the configured level when
/// set. Repeated calls are no-ops: once a subscriber is installed, later
/// calls return without creating another subscriber or log file.
pub fn init(config: &LogConfig) -> Result<()> {
    // A process gets one global subscriber; a later call must not touch
    // the log directory either.
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(&config.level)));

    let stdout_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    let file_layer = create_log_file(config)?.map(|file| {
        tracing_subscriber::fmt::layer()
            .with_writer(Arc::new(file))
            .with_ansi(false)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init();

    Ok(())
}

/// Create the timestamped log file when file logging is enabled
fn create_log_file(config: &LogConfig) -> Result<Option<File>> {
    if !config.file_logging_enabled {
        return Ok(None);
    }

    let dir = config.file_path.as_ref().ok_or_else(|| {
        VermanError::ConfigError("File logging is enabled but no file path is set".to_string())
    })?;

    fs::create_dir_all(dir)?;
    let path = dir.join(format!("verman_{}.log", dates::now_timestamp()));
    let file = File::create(&path)?;

    Ok(Some(file))
}
