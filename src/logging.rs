//! Tracing setup
//!
//! The TUI owns the terminal, so log output goes to a file in the log
//! directory. `RUST_LOG` overrides the default filter.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::ReviewPaths;
use crate::error::{ReviewError, ReviewResult};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "uncleared=info";

/// Build the filter from an explicit directive string, falling back to
/// [`DEFAULT_FILTER`] when it is missing or unparsable
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to [`ReviewPaths::log_file`]
///
/// The returned guard flushes buffered lines on drop; keep it alive for the
/// life of the process.
pub fn init(paths: &ReviewPaths) -> ReviewResult<WorkerGuard> {
    paths.ensure_directories()?;

    let appender = tracing_appender::rolling::never(paths.log_dir(), paths.log_file_name());
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| ReviewError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}
