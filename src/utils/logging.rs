//! Tracing setup. The TUI owns the terminal, so the game logs to a file
//! under the data directory; the simulator logs to stderr.

use super::persistence::angler_dir;
use crate::core::constants::{LOG_DIR, LOG_FILE};
use std::io;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives (`info`, `angler=debug`, ...).
pub const LOG_ENV: &str = "ANGLER_LOG";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to `~/.angler/logs/angler.log`. Keep the guard alive until exit or
/// buffered lines are lost.
pub fn init_file_logging(default_level: &str) -> io::Result<WorkerGuard> {
    let dir = angler_dir()?.join(LOG_DIR);
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    // A second init (tests, repeated calls) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(file_layer)
        .try_init();

    tracing::info!(log_dir = %dir.display(), "logging initialized");
    Ok(guard)
}

pub fn init_stderr_logging(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
