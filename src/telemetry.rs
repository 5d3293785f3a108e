//! Tracing setup. Output goes to a log file because the terminal belongs to the UI.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::config::LogConfig;

/// Errors that can occur while installing the tracing subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': {source}")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Builds the filter: `RUST_LOG` if set and valid, otherwise `level`.
pub fn env_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).map_err(|source| TelemetryError::EnvFilter {
            value: level.to_string(),
            source,
        }),
    }
}

fn open_log_file(path: &Path) -> Result<fs::File, TelemetryError> {
    let to_error = |source| TelemetryError::LogFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)
}

/// Installs the global subscriber. Does nothing when no log file is configured.
#[mutants::skip]
pub fn init(config: &LogConfig) -> Result<(), TelemetryError> {
    let Some(path) = &config.file else {
        return Ok(());
    };
    let filter = env_filter(&config.level)?;
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
