//! File logging
//!
//! The terminal is owned by the UI, so log output always goes to a file.

use crate::engine::config::LoggingConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Log path {0} has no parent directory")]
    NoParent(PathBuf),

    #[error("Log path {0} has no file name")]
    NoFileName(PathBuf),

    #[error("Cannot create log file {path}: {reason}")]
    Appender { path: PathBuf, reason: String },

    #[error("Cannot install log subscriber: {0}")]
    Init(String),
}

/// Build a non-rotating appender for `path`.
///
/// # Errors
///
/// Returns an error if the path has no parent or file name, or the file
/// cannot be created.
pub fn file_appender(path: &Path) -> Result<RollingFileAppender, LoggingError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| LoggingError::NoParent(path.to_path_buf()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::NoFileName(path.to_path_buf()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(parent)
        .map_err(|err| LoggingError::Appender {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init(config: &LoggingConfig) -> Result<PathBuf, LoggingError> {
    let path = config.log_file();
    let appender = file_appender(&path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|err| LoggingError::Init(err.to_string()))?;

    Ok(path)
}
