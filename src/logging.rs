//! Tracing setup
//!
//! The TUI owns the terminal, so logs go to a daily-rotated file under the
//! platform data directory (`.../roster/logs/roster.log`).
//!
//! Configure via the `ROSTER_LOG` environment variable, using `EnvFilter`
//! syntax:
//! - `ROSTER_LOG=debug` - every reducer action
//! - `ROSTER_LOG=roster::feed=debug` - module-level filtering

use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "ROSTER_LOG";

/// Directory the log file is written to.
pub fn logs_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Install the global subscriber. Safe to call once per process.
///
/// If the log directory cannot be created, logging is disabled with a
/// warning on stderr.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(dir) = logs_dir() else {
        eprintln!("Warning: could not determine log directory; logging disabled");
        return;
    };
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Warning: Could not initialize file logging: {}", e);
        return;
    }

    let file_appender = tracing_appender::rolling::daily(&dir, "roster.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
    if let Err(e) = result {
        eprintln!("Warning: logging already initialized: {}", e);
    }
}
