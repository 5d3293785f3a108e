//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::model::FormTimings;

/// Command-line arguments. Every option can also be set through its environment variable.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "placement",
    about = "Browse campus placement drives and submit new ones from the terminal",
    version
)]
pub struct Cli {
    /// JSON file holding an array of drive records (a demo list is used if omitted)
    #[arg(long, env = "PLACEMENT_DRIVES")]
    pub drives: Option<PathBuf>,

    /// Log filter, e.g. `info` or `placement=debug` (RUST_LOG takes precedence)
    #[arg(long, env = "PLACEMENT_LOG", default_value = "info")]
    pub log_level: String,

    /// Log file path (defaults to the platform data directory)
    #[arg(long, env = "PLACEMENT_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Simulated submission latency in milliseconds
    #[arg(long, env = "PLACEMENT_SUBMIT_DELAY_MS", default_value_t = 1000)]
    pub submit_delay_ms: u64,

    /// How long the success notice stays visible, in milliseconds
    #[arg(long, env = "PLACEMENT_SUCCESS_WINDOW_MS", default_value_t = 5000)]
    pub success_window_ms: u64,
}

/// Where the drive list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSource {
    Demo,
    File(PathBuf),
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// `None` when no log file was given and no data directory exists; logging is then off.
    pub file: Option<PathBuf>,
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub board_source: BoardSource,
    pub log: LogConfig,
    pub timings: FormTimings,
}

impl AppConfig {
    /// Parses the process arguments and environment.
    pub fn load() -> Self {
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(cli: Cli) -> Self {
        let board_source = cli.drives.map_or(BoardSource::Demo, BoardSource::File);
        let log = LogConfig {
            level: cli.log_level,
            file: cli.log_file.or_else(default_log_path),
        };
        let timings = FormTimings {
            submit_delay: Duration::from_millis(cli.submit_delay_ms),
            success_window: Duration::from_millis(cli.success_window_ms),
        };
        Self {
            board_source,
            log,
            timings,
        }
    }
}

/// `<data dir>/placement/placement.log`, e.g. `~/.local/share/placement/placement.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("placement").join("placement.log"))
}
