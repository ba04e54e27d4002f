//! Single entry point for the four reads
//!
//! Every call opens the repository afresh, runs one reader and drops the
//! handle before returning, whether or not the read succeeded.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::backend::Backend;
use crate::git2_backend::Git2Backend;
use crate::records::{BranchRecord, RemoteRecord, StatusSnapshot};
use crate::status::StatusOptions;
use crate::{Result, branch, opener, remote, status};

/// All local branches of the repository at `directory`, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchesView {
    pub directory: PathBuf,
    pub branches: Vec<BranchRecord>,
}

impl BranchesView {
    /// Branches keyed by name.
    pub fn by_name(&self) -> BTreeMap<&str, &BranchRecord> {
        self.branches.iter().map(|b| (b.name.as_str(), b)).collect()
    }
}

/// All remotes of the repository at `directory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemotesView {
    pub directory: PathBuf,
    pub remotes: BTreeMap<String, RemoteRecord>,
}

/// Working tree status of the repository at `directory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    pub directory: PathBuf,
    #[serde(flatten)]
    pub snapshot: StatusSnapshot,
}

/// Reads repository state through a [`Backend`].
///
/// Holds no repository state of its own, so one inspector can serve any
/// number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Inspector<B = Git2Backend> {
    backend: B,
}

impl Inspector<Git2Backend> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: Backend> Inspector<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Read a single local branch.
    pub fn branch(&self, directory: impl AsRef<Path>, name: &str) -> Result<BranchRecord> {
        let handle = opener::open(&self.backend, directory.as_ref())?;
        branch::read_branch(&handle, name)
    }

    /// Read every local branch.
    pub fn branches(&self, directory: impl AsRef<Path>) -> Result<BranchesView> {
        let handle = opener::open(&self.backend, directory.as_ref())?;
        let branches = branch::read_branches(&handle)?;
        Ok(BranchesView {
            directory: handle.directory().to_path_buf(),
            branches,
        })
    }

    /// Read every configured remote.
    pub fn remotes(&self, directory: impl AsRef<Path>) -> Result<RemotesView> {
        let handle = opener::open(&self.backend, directory.as_ref())?;
        let remotes = remote::read_remotes(&handle)?;
        Ok(RemotesView {
            directory: handle.directory().to_path_buf(),
            remotes,
        })
    }

    /// Read working tree status with default options.
    pub fn status(&self, directory: impl AsRef<Path>) -> Result<StatusView> {
        self.status_with(directory, &StatusOptions::default())
    }

    pub fn status_with(
        &self,
        directory: impl AsRef<Path>,
        options: &StatusOptions,
    ) -> Result<StatusView> {
        let handle = opener::open(&self.backend, directory.as_ref())?;
        let snapshot = status::read_status(&handle, options)?;
        Ok(StatusView {
            directory: handle.directory().to_path_buf(),
            snapshot,
        })
    }
}
