//! Repository opener

use std::path::{Path, PathBuf};

use crate::backend::{Backend, RepositoryAccess};
use crate::{BackendError, Error, Result};

/// An opened repository, owned by the call that opened it.
///
/// Dropping the handle releases the underlying repository.
#[derive(Debug)]
pub struct RepositoryHandle<R> {
    directory: PathBuf,
    repo: R,
}

impl<R: RepositoryAccess> RepositoryHandle<R> {
    /// The directory exactly as it was given to [`open`].
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Classify a failed read of an already opened repository.
    ///
    /// Unreadable configuration, index or worktree state means the
    /// repository metadata is unusable, which is reported the same way as
    /// a repository that cannot be opened.
    pub(crate) fn unreadable(&self, err: BackendError) -> Error {
        tracing::debug!(
            directory = %self.directory.display(),
            error = %err,
            "Repository read failed"
        );
        Error::repository_not_found(&self.directory, err)
    }
}

/// Open the repository rooted at `directory`.
///
/// Every failure is reported as [`Error::RepositoryNotFound`].
pub fn open<B: Backend>(backend: &B, directory: &Path) -> Result<RepositoryHandle<B::Repository>> {
    tracing::debug!(directory = %directory.display(), "Opening repository");

    let repo = backend.open(directory).map_err(|err| {
        tracing::debug!(
            directory = %directory.display(),
            error = %err,
            "Cannot open repository"
        );
        Error::repository_not_found(directory, err)
    })?;

    Ok(RepositoryHandle {
        directory: directory.to_path_buf(),
        repo,
    })
}
