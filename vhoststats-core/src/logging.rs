use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostics logging to `log_file`.
///
/// The terminal belongs to the chart, so nothing is installed without a file
/// and events are dropped. With a file, events
/// are written as flattened JSON lines through a non-blocking writer, filtered
/// by `RUST_LOG` (default `info`). Keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init_logging(log_file: Option<&Path>) -> io::Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .json()
        .flatten_event(true)
        .init();

    Ok(Some(guard))
}
