//! Logging setup: console (pretty or JSON) plus a plain-text log file

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FORMAT_VAR: &str = "HOMEWORK_BOT_LOG_FORMAT";
const LOG_PATH_VAR: &str = "HOMEWORK_BOT_LOG_PATH";
const DEFAULT_LOG_PATH: &str = "main.log";
const DEFAULT_FILTER: &str = "homework_bot=debug";

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole process.
///
/// # Environment Variables
///
/// - `RUST_LOG`: filter directives (default: `homework_bot=debug`)
/// - `HOMEWORK_BOT_LOG_FORMAT`: `pretty` (default) or `json`
/// - `HOMEWORK_BOT_LOG_PATH`: log file, `~` expanded (default: `main.log`)
pub fn init_logging() -> Result<WorkerGuard> {
    let log_format = std::env::var(LOG_FORMAT_VAR).unwrap_or_else(|_| "pretty".to_string());
    let log_path = std::env::var(LOG_PATH_VAR).unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let log_path = PathBuf::from(shellexpand::tilde(&log_path).into_owned());

    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_path
        .file_name()
        .ok_or_else(|| anyhow!("Log path has no file name: {}", log_path.display()))?;
    std::fs::create_dir_all(dir)?;

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .with(fmt::layer().with_ansi(false).with_writer(file_writer))
                .init();
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .with(fmt::layer().with_ansi(false).with_writer(file_writer))
                .init();
        }
    }

    Ok(guard)
}
