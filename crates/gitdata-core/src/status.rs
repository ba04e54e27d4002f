//! Status reader
//!
//! Each path reported by the backend becomes at most one
//! [`FileStatusRecord`]: `staged_state` describes HEAD against the index and
//! `worktree_state` describes the index against the working tree. A path
//! whose two states are both `unmodified` is dropped, so a file staged back
//! to its committed content never shows up.

use crate::Result;
use crate::backend::{Change, PathStatus, RepositoryAccess};
use crate::normalize;
use crate::opener::RepositoryHandle;
use crate::records::{FileState, FileStatusRecord, StatusSnapshot};

/// Knobs for the working tree scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOptions {
    /// Report files that are not in the index (default: true)
    pub include_untracked: bool,

    /// Report files excluded by ignore rules (default: false)
    pub include_ignored: bool,
}

impl Default for StatusOptions {
    fn default() -> Self {
        Self {
            include_untracked: true,
            include_ignored: false,
        }
    }
}

/// Compute the status of the working tree and index.
///
/// A bare repository has no working tree and is always clean.
pub fn read_status<R: RepositoryAccess>(
    handle: &RepositoryHandle<R>,
    options: &StatusOptions,
) -> Result<StatusSnapshot> {
    let repo = handle.repo();

    if repo.is_bare() {
        tracing::debug!(directory = %handle.directory().display(), "Bare repository is clean");
        return Ok(StatusSnapshot::clean());
    }

    let entries = repo
        .statuses(options)
        .map_err(|err| handle.unreadable(err))?;

    let records = entries.iter().filter_map(classify).collect();
    Ok(normalize::status(records))
}

/// Turn a raw path status into a record, or `None` if nothing changed.
pub fn classify(status: &PathStatus) -> Option<FileStatusRecord> {
    let (staged_state, worktree_state) = if status.conflicted {
        (FileState::Conflicted, FileState::Conflicted)
    } else if status.ignored {
        (FileState::Ignored, FileState::Ignored)
    } else if status.index.is_none() && status.worktree == Some(Change::Added) {
        (FileState::Untracked, FileState::Untracked)
    } else {
        (staged(status.index), worktree(status.worktree))
    };

    if staged_state == FileState::Unmodified && worktree_state == FileState::Unmodified {
        return None;
    }

    Some(FileStatusRecord {
        path: status.path.clone(),
        staged_state,
        worktree_state,
    })
}

fn staged(change: Option<Change>) -> FileState {
    match change {
        None => FileState::Unmodified,
        Some(Change::Added) => FileState::Added,
        Some(Change::Modified | Change::TypeChanged) => FileState::Modified,
        Some(Change::Deleted) => FileState::Deleted,
        Some(Change::Renamed) => FileState::Renamed,
        Some(Change::Copied) => FileState::Copied,
    }
}

fn worktree(change: Option<Change>) -> FileState {
    match change {
        None => FileState::Unmodified,
        // new in the worktree on top of an index entry
        Some(Change::Added) => FileState::Untracked,
        Some(Change::Modified | Change::TypeChanged) => FileState::Modified,
        Some(Change::Deleted) => FileState::Deleted,
        Some(Change::Renamed) => FileState::Renamed,
        Some(Change::Copied) => FileState::Copied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::staged_new(Some(Change::Added), None, FileState::Added, FileState::Unmodified)]
    #[case::staged_then_modified(
        Some(Change::Added),
        Some(Change::Modified),
        FileState::Added,
        FileState::Modified
    )]
    #[case::modified_twice(
        Some(Change::Modified),
        Some(Change::Modified),
        FileState::Modified,
        FileState::Modified
    )]
    #[case::removed_from_disk(None, Some(Change::Deleted), FileState::Unmodified, FileState::Deleted)]
    #[case::removed_from_index(Some(Change::Deleted), None, FileState::Deleted, FileState::Unmodified)]
    #[case::untracked(None, Some(Change::Added), FileState::Untracked, FileState::Untracked)]
    #[case::typechange(None, Some(Change::TypeChanged), FileState::Unmodified, FileState::Modified)]
    #[case::renamed(Some(Change::Renamed), None, FileState::Renamed, FileState::Unmodified)]
    #[case::copied(Some(Change::Copied), None, FileState::Copied, FileState::Unmodified)]
    fn classifies_change_pairs(
        #[case] index: Option<Change>,
        #[case] worktree: Option<Change>,
        #[case] expected_staged: FileState,
        #[case] expected_worktree: FileState,
    ) {
        let status = PathStatus {
            path: "file.txt".into(),
            index,
            worktree,
            ignored: false,
            conflicted: false,
        };

        let record = classify(&status).expect("change should produce a record");
        assert_eq!(record.path, "file.txt");
        assert_eq!(record.staged_state, expected_staged);
        assert_eq!(record.worktree_state, expected_worktree);
    }

    #[test]
    fn unchanged_path_is_dropped() {
        assert_eq!(classify(&PathStatus::new("same.txt")), None);
    }

    #[test]
    fn conflict_overrides_changes() {
        let mut status = PathStatus::new("both.txt")
            .with_index(Change::Modified)
            .with_worktree(Change::Modified);
        status.conflicted = true;

        let record = classify(&status).unwrap();
        assert_eq!(record.staged_state, FileState::Conflicted);
        assert_eq!(record.worktree_state, FileState::Conflicted);
    }

    #[test]
    fn ignored_path_is_reported_as_ignored() {
        let mut status = PathStatus::new("target/out.o");
        status.ignored = true;

        let record = classify(&status).unwrap();
        assert_eq!(record.staged_state, FileState::Ignored);
        assert_eq!(record.worktree_state, FileState::Ignored);
    }

    #[test]
    fn default_options_include_untracked_only() {
        let options = StatusOptions::default();
        assert!(options.include_untracked);
        assert!(!options.include_ignored);
    }
}
