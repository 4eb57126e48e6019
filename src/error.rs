//! Error types for deploywatch
//!
//! Library code returns `DeployWatchError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deploywatch operations
pub type DeployWatchResult<T> = Result<T, DeployWatchError>;

/// Main error type for deploywatch operations
#[derive(Error, Debug)]
pub enum DeployWatchError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config value out of range or wrong type (env overrides, CLI)
    #[error("invalid value '{value}' for {key}")]
    InvalidConfigValue { key: String, value: String },

    /// Failure report could not be written
    #[error("failed to write report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
