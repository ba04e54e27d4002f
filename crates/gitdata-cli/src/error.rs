//! Error types for gitdata-cli

use gitdata_provider::Diagnostic;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from gitdata-core
    #[error(transparent)]
    Core(#[from] gitdata_core::Error),

    /// Error from gitdata-provider (config loading)
    #[error(transparent)]
    Provider(#[from] gitdata_provider::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A data source read that came back with diagnostics
    #[error("{}", render_diagnostics(.0))]
    Diagnostics(Vec<Diagnostic>),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}

fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("{}: {}", d.summary, d.detail))
        .collect::<Vec<_>>()
        .join("\n")
}
