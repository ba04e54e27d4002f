//! Capability interface over the git-access library

use std::path::Path;

use crate::BackendResult;
use crate::status::StatusOptions;

/// A change observed between two snapshots of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Added,
    Modified,
    Deleted,
    Renamed,
    Copied,
    TypeChanged,
}

/// Raw per-path status as reported by a backend.
///
/// `index` compares HEAD with the index, `worktree` compares the index
/// with the working tree. A worktree `Added` with no index change is an
/// untracked file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStatus {
    pub path: String,
    pub index: Option<Change>,
    pub worktree: Option<Change>,
    pub ignored: bool,
    pub conflicted: bool,
}

impl PathStatus {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            index: None,
            worktree: None,
            ignored: false,
            conflicted: false,
        }
    }

    pub fn with_index(mut self, change: Change) -> Self {
        self.index = Some(change);
        self
    }

    pub fn with_worktree(mut self, change: Change) -> Self {
        self.worktree = Some(change);
        self
    }
}

/// Opens repositories.
///
/// Implementations must be stateless between calls: every `open` reads
/// the repository fresh.
pub trait Backend {
    type Repository: RepositoryAccess;

    /// Open the repository rooted exactly at `directory`.
    fn open(&self, directory: &Path) -> BackendResult<Self::Repository>;
}

/// Read-only access to an opened repository.
///
/// Nothing here promises an iteration order; callers sort.
pub trait RepositoryAccess {
    /// Whether the repository has no working tree.
    fn is_bare(&self) -> bool;

    /// Short names of all local branches.
    fn list_branches(&self) -> BackendResult<Vec<String>>;

    /// Whether a local branch with this short name exists.
    fn has_branch(&self, name: &str) -> BackendResult<bool>;

    /// Peel a local branch to the hex id of the commit it points at.
    fn resolve_branch(&self, name: &str) -> BackendResult<String>;

    /// Last value of a single-valued configuration key, if set.
    fn config_value(&self, key: &str) -> BackendResult<Option<String>>;

    /// Every value of a multi-valued configuration key, in file order.
    fn config_values(&self, key: &str) -> BackendResult<Vec<String>>;

    /// Names of all configured remotes.
    fn remote_names(&self) -> BackendResult<Vec<String>>;

    /// Compare HEAD, index and working tree. Paths with no change are
    /// not reported.
    fn statuses(&self, options: &StatusOptions) -> BackendResult<Vec<PathStatus>>;
}
