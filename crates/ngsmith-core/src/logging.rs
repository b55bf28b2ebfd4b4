//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `<data-local-dir>/angular-smith/logs/` so stdout
/// stays clean for generated output. Log level is controlled by the
/// `NGSMITH_LOG` environment variable.
///
/// # Examples
/// ```bash
/// NGSMITH_LOG=debug ngsmith parse "Name,name"
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "ngsmith.log");

    // Default to info, allow override via NGSMITH_LOG
    let env_filter = EnvFilter::try_from_env("NGSMITH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("angular_smith=info,ngsmith_core=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::debug!("log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("angular-smith").join("logs")
}
