//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Filter used when `PENH_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "permissions_enhancer=info,penh_core=info,penh_app=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/penh/logs/`
/// Log level is controlled by `PENH_LOG` environment variable.
///
/// # Examples
/// ```bash
/// PENH_LOG=debug penh page.html
/// PENH_LOG=penh_core=trace penh page.html
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "penh.log");

    let env_filter = EnvFilter::try_from_env("PENH_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Permissions Enhancer starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("penh").join("logs")
}
