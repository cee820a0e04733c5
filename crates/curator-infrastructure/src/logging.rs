//! Tracing subscriber setup for the binaries.
//!
//! `RUST_LOG` always wins; otherwise the given default level applies.

use curator_core::error::{CuratorError, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Logs to stderr (one-shot CLI commands).
pub fn init_stderr_logging(default_level: &str) {
    // A second init (e.g. in tests) is harmless.
    let _ = fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Logs to a daily-rolling file in `logs_dir` so an interactive terminal
/// stays clean.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the writer.
pub fn init_file_logging(logs_dir: &Path, file_prefix: &str, default_level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)?;

    let appender = tracing_appender::rolling::daily(logs_dir, file_prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| CuratorError::internal(format!("Failed to initialise logging: {}", e)))?;

    Ok(guard)
}
