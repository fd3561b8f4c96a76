//! Logging setup for the client binary.
//!
//! Logs always go to stderr so stdout stays clean for the match log or JSON
//! events. A file layer is added when `DUEL_LOG_DIR` is set or `--log-file`
//! is passed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "duel.log";

/// Install the global subscriber.
///
/// Returns the file writer guard when file logging is enabled; dropping it
/// flushes pending lines.
pub fn setup_logging(log_file: bool) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir(log_file) {
        Some(dir) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir(log_file) {
        tracing::debug!("Log file: {}", dir.join(LOG_FILE).display());
    }

    Ok(guard)
}

/// `DUEL_LOG_DIR` when set, else the platform cache directory if requested.
///
/// - macOS: `~/Library/Caches/duel/logs`
/// - Linux: `~/.cache/duel/logs` (or `$XDG_CACHE_HOME/duel/logs`)
/// - Windows: `%LOCALAPPDATA%\duel\logs`
fn log_dir(requested: bool) -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("DUEL_LOG_DIR").filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    requested.then(|| {
        directories::ProjectDirs::from("", "", "duel")
            .map(|dirs| dirs.cache_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("/tmp/duel"))
            .join("logs")
    })
}
