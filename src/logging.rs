//! Tracing setup
//!
//! The picker owns the terminal, so logs go to a daily-rolling file in the
//! configured log directory through a non-blocking writer. The filter comes
//! from `PICKLIST_LOG` when set, otherwise from the configured level.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a filter directive
pub const LOG_ENV: &str = "PICKLIST_LOG";

/// Log file name prefix inside the log directory
pub const LOG_FILE_PREFIX: &str = "picklist.log";

/// Build the filter from `PICKLIST_LOG`, falling back to `default_level`
///
/// An unparsable directive falls back to `info`.
#[must_use]
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `log_dir`
///
/// The returned guard flushes buffered lines when dropped; keep it alive for
/// the duration of the program.
///
/// # Errors
///
/// Returns an I/O error if the log directory cannot be created.
pub fn init(log_dir: &Path, default_level: &str) -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    // A subscriber may already be installed (tests, embedding hosts)
    let _ = tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(fmt_layer)
        .try_init();

    Ok(guard)
}
