//! Logging infrastructure for development diagnostics
//!
//! The editor owns the terminal while it runs, so nothing may log to
//! stdout/stderr: all output goes to a rotating file under
//! `~/.config/comet/logs/comet.log`.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=comet::runtime=trace` - module-level filtering

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the tracing subscriber with file-only logging.
///
/// Returns the appender guard; dropping it flushes buffered log lines, so
/// the caller should hold it for the process lifetime.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => dir,
        Err(e) => {
            // Logging is best-effort; the editor works fine without it.
            eprintln!("Warning: could not initialize file logging: {}", e);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::daily(logs_dir, "comet.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).init();

    Some(guard)
}
