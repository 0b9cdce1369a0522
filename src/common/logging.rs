//! Logging configuration using tracing
//!
//! The TUI owns stdout, so all diagnostics go to a rolling file.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `<data dir>/minetop/logs/`.
/// Log level is controlled by the `MINETOP_LOG` environment variable.
///
/// # Examples
/// ```bash
/// MINETOP_LOG=debug minetop
/// MINETOP_LOG=trace minetop
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "minetop.log");

    // Default to info, allow override via MINETOP_LOG
    let env_filter = EnvFilter::try_from_env("MINETOP_LOG")
        .unwrap_or_else(|_| EnvFilter::new("minetop=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("minetop").join("logs")
}
