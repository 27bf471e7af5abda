//! Logging setup
//!
//! Console output plus a daily rolling file under `<data_dir>/logs`.

use crate::error::{OrderingError, OrderingResult};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE: &str = "canteen.log";

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Default filter when `RUST_LOG` is not set
fn default_filter() -> EnvFilter {
    if cfg!(debug_assertions) {
        EnvFilter::new("info,canteen_app=debug,canteen_client=debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Install the global subscriber and panic hook.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// stops the file writer.
pub fn init(log_dir: &Path) -> OrderingResult<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .map_err(|e| OrderingError::Config(format!("Failed to create logs directory: {e}")))?;

    let file_appender = rolling::daily(log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(non_blocking_file);

    let stdout_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| OrderingError::Config(format!("Failed to install logger: {e}")))?;

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        let msg = info.to_string();
        eprintln!("!!! PANIC !!!\nMessage: {msg}\nBacktrace:\n{backtrace}");
        tracing::error!(target: "panic", message = %msg, backtrace = %backtrace, "panic occurred");
    }));

    tracing::info!(path = %log_dir.display(), "Tracing initialized");
    Ok(guard)
}
