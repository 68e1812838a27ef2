//! Logging bootstrap.
//!
//! # Invariants
//! - Logs go to a daily-rolling file so stdout stays reserved for command output.
//! - `RUST_LOG` takes precedence over the configured level.
//! - Initialization never panics; a second call reports an error instead.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_PREFIX: &str = "notekeep.log";

/// Installs the global subscriber writing to `log_dir`.
///
/// The returned guard flushes buffered lines when dropped; keep it alive for
/// the lifetime of the process.
///
/// # Errors
/// - Returns an error when `level` is not a valid filter directive.
/// - Returns an error when `log_dir` cannot be created.
/// - Returns an error when a global subscriber is already installed.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<WorkerGuard, String> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| format!("invalid log level `{}`: {}", level, e))?,
    };

    std::fs::create_dir_all(log_dir).map_err(|e| {
        format!(
            "failed to create log directory `{}`: {}",
            log_dir.display(),
            e
        )
    })?;

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| format!("logging already initialized: {}", e))?;

    tracing::info!(log_dir = %log_dir.display(), "logging initialized");
    Ok(guard)
}
