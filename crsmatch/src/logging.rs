//! Logging infrastructure for crsmatch.
//!
//! Provides structured logging to stderr and, optionally, to a file:
//! - stderr keeps stdout free for lookup results
//! - the log file is cleared on each run
//! - `RUST_LOG` overrides the configured level

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging system.
///
/// # Arguments
///
/// * `level` - Filter directive used when `RUST_LOG` is not set (e.g. "warn")
/// * `log_file` - Optional file receiving a copy of all log output
///
/// # Returns
///
/// LoggingGuard that must be kept alive for logging to work
///
/// # Errors
///
/// Returns error if the log directory cannot be created or the log file
/// cannot be cleared, or if a global subscriber is already installed.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> Result<LoggingGuard, io::Error> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, file_guard) = match log_file {
        Some(path) => {
            let (writer, guard) = open_log_writer(path)?;
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Build the level filter, preferring `RUST_LOG` when set.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL))
}

/// Create the log file (clearing any previous run) and a non-blocking writer for it.
fn open_log_writer(
    path: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), io::Error> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("log file path has no file name: {}", path.display()),
        )
    })?;

    fs::create_dir_all(dir)?;
    fs::write(path, "")?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(file_appender))
}
