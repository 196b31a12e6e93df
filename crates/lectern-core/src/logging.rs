//! Logging setup for the lectern process.
//!
//! Log output goes to a daily-rolling file under ${LECTERN_HOME}/logs,
//! never to the terminal the board is drawn on. The file appender writes
//! synchronously from the calling thread.

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::paths;

/// Environment variable controlling the log filter, e.g. `LECTERN_LOG=debug`.
pub const LOG_ENV_VAR: &str = "LECTERN_LOG";

/// Initializes the global tracing subscriber.
///
/// The filter comes from `LECTERN_LOG`, defaulting to `info`. When the logs
/// directory cannot be created the subscriber is installed without a writer,
/// so log lines are dropped instead of bleeding into the board.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to build log filter")?;

    let logs_dir = paths::logs_dir();
    if std::fs::create_dir_all(&logs_dir).is_err() {
        tracing_subscriber::registry()
            .with(filter)
            .try_init()
            .context("Failed to initialize logging")?;
        return Ok(());
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "lectern.log");

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(file_appender))
        .with(filter)
        .try_init()
        .context("Failed to initialize logging")?;

    tracing::info!(logs_dir = %logs_dir.display(), "Logging initialized");
    Ok(())
}
