//! File-based logging setup.
//!
//! The TUI owns the terminal, so logs go to a daily-rolled file under
//! `${SLIDEPHANT_HOME}/logs`. Filtering follows the `SLIDEPHANT_LOG`
//! environment variable (env-filter syntax), defaulting to `info`.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Initializes the global tracing subscriber.
///
/// The returned guard flushes buffered log lines on drop; hold it for the
/// lifetime of the program.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "slidephant.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_env("SLIDEPHANT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
