//! Error types for gitdata-core
//!
//! Two layers: [`BackendError`] is what a [`Backend`](crate::Backend)
//! returns, [`Error`] is the classified taxonomy callers see. Readers
//! translate the former into the latter at their boundary.

use std::path::PathBuf;

/// Result type for gitdata-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for backend (git library) operations
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Classified errors surfaced by the inspector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The path does not resolve to a readable repository.
    ///
    /// Covers missing paths, plain directories, permission problems and
    /// corrupted metadata alike.
    #[error("Cannot open repository at {directory}: {reason}")]
    RepositoryNotFound { directory: PathBuf, reason: String },

    #[error("Cannot read branch '{name}': branch not found")]
    BranchNotFound { name: String },

    /// The branch ref exists but does not peel to a commit.
    #[error("Cannot resolve head of branch '{name}': {reason}")]
    InternalResolutionFailure { name: String, reason: String },
}

impl Error {
    pub(crate) fn repository_not_found(
        directory: impl Into<PathBuf>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::RepositoryNotFound {
            directory: directory.into(),
            reason: reason.to_string(),
        }
    }

    /// Short, stable classification used as a diagnostic summary.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::RepositoryNotFound { .. } => "Cannot open repository",
            Self::BranchNotFound { .. } => "Cannot read branch",
            Self::InternalResolutionFailure { .. } => "Cannot resolve branch head",
        }
    }
}

/// Errors reported by a backend.
///
/// Carries only the message text so no library type escapes the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

impl BackendError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<git2::Error> for BackendError {
    fn from(err: git2::Error) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound => Self::NotFound(err.message().to_string()),
            _ => Self::Other(err.message().to_string()),
        }
    }
}
