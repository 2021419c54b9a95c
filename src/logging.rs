//! File-based logging
//!
//! The TUI occupies the terminal, so tracing output goes to a file. Nothing is
//! written unless `RUST_LOG` is set.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "music-search";

/// Initialize the logging system.
///
/// Logs are written to `.logs/music-search.YYYY-MM-DD.log` with daily rotation,
/// filtered by the `RUST_LOG` environment variable. Returns `false` when
/// `RUST_LOG` is unset and logging stays off.
pub fn init_logging() -> anyhow::Result<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => return Ok(false),
    };

    let log_dir = Path::new(LOG_DIR);
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The guard flushes on drop; keep it for the lifetime of the process
    Box::leak(Box::new(guard));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("Logging initialized - logs written to {}/", LOG_DIR);

    Ok(true)
}
