//! Logging setup.
//!
//! The TUI owns stdout/stderr, so log lines go to a file under the app home
//! (`logs/schoolhub.log`) through a non-blocking appender. Filtering follows
//! `SCHOOLHUB_LOG` (EnvFilter syntax), defaulting to `info`.

use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::paths;

/// Initializes file logging and returns the appender guard.
///
/// The guard must be held for the lifetime of the process; dropping it stops
/// the background writer and loses buffered lines.
pub fn init() -> Result<WorkerGuard> {
    init_at(&paths::log_dir())
}

/// Initializes file logging into an explicit directory.
pub fn init_at(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, "schoolhub.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .with_env_var("SCHOOLHUB_LOG")
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(guard)
}
