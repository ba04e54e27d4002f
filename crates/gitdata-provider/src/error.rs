//! Error types for the provider

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the provider itself.
///
/// Data source failures are not errors in this sense; they are reported to
/// the host as [`Diagnostic`](crate::Diagnostic) values.
#[derive(Debug, Error)]
pub enum Error {
    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error on the protocol channel or a config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A blocking read task panicked or was cancelled
    #[error("read task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
