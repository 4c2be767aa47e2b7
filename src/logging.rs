//! Tracing subscriber setup.
//!
//! The full-screen UI owns the terminal, so logs only go to a file there.
//! Line mode may fall back to stderr for warnings.

use crate::config::LoggingConfig;
use crate::error::AppError;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "PSEUDOTERM_LOG";

/// Level used for the stderr fallback when no log file is configured.
const STDERR_FALLBACK_LEVEL: &str = "warn";

/// Where log records end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(std::path::PathBuf),
    Stderr,
    Off,
}

/// Decide the log destination for a front end.
pub fn log_target(config: &LoggingConfig, stderr_fallback: bool) -> LogTarget {
    match (&config.file, stderr_fallback) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Off,
    }
}

/// Build the filter from `PSEUDOTERM_LOG`, falling back to `default_level`.
pub fn build_filter(env_value: Option<&str>, default_level: &str) -> Result<EnvFilter, AppError> {
    let directives = env_value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default_level);
    EnvFilter::try_new(directives)
        .map_err(|e| AppError::Logging(format!("bad filter `{directives}`: {e}")))
}

/// Install the global subscriber. Does nothing when logging is off.
pub fn init_logging(config: &LoggingConfig, stderr_fallback: bool) -> Result<(), AppError> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    match log_target(config, stderr_fallback) {
        LogTarget::Off => Ok(()),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| AppError::Logging(format!("open {}: {e}", path.display())))?;
            tracing_subscriber::fmt()
                .with_env_filter(build_filter(env_value.as_deref(), &config.level)?)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| AppError::Logging(e.to_string()))
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(build_filter(env_value.as_deref(), STDERR_FALLBACK_LEVEL)?)
            .with_writer(std::io::stderr)
            .without_time()
            .try_init()
            .map_err(|e| AppError::Logging(e.to_string())),
    }
}
