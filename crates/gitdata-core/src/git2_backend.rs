//! [`Backend`] implementation on top of libgit2

use std::path::Path;

use git2::{BranchType, ErrorCode, Repository, Status};

use crate::backend::{Backend, Change, PathStatus, RepositoryAccess};
use crate::status::StatusOptions;
use crate::{BackendError, BackendResult};

/// Opens repositories with `git2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Git2Backend;

impl Backend for Git2Backend {
    type Repository = Git2Repository;

    fn open(&self, directory: &Path) -> BackendResult<Git2Repository> {
        // `open` does not search parent directories, unlike `discover`.
        let repo = Repository::open(directory)?;
        Ok(Git2Repository { repo })
    }
}

/// An opened `git2` repository.
pub struct Git2Repository {
    repo: Repository,
}

impl std::fmt::Debug for Git2Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git2Repository")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl RepositoryAccess for Git2Repository {
    fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }

    fn list_branches(&self) -> BackendResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = entry?;
            match branch.name()? {
                Some(name) => names.push(name.to_string()),
                None => tracing::warn!(
                    name = %String::from_utf8_lossy(branch.name_bytes()?),
                    "Skipping branch with non UTF-8 name"
                ),
            }
        }
        Ok(names)
    }

    fn has_branch(&self, name: &str) -> BackendResult<bool> {
        match self.repo.find_branch(name, BranchType::Local) {
            Ok(_) => Ok(true),
            // An invalid ref name cannot name an existing branch.
            Err(e) if matches!(e.code(), ErrorCode::NotFound | ErrorCode::InvalidSpec) => {
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn resolve_branch(&self, name: &str) -> BackendResult<String> {
        let branch = self.repo.find_branch(name, BranchType::Local)?;
        let commit = branch.get().peel_to_commit()?;
        Ok(commit.id().to_string())
    }

    fn config_value(&self, key: &str) -> BackendResult<Option<String>> {
        let config = self.repo.config()?;
        let entry = match config.get_entry(key) {
            Ok(entry) => entry,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        // A key written without `= value` is boolean true to git.
        if !entry.has_value() {
            return Ok(Some("true".to_string()));
        }
        match entry.value() {
            Some(value) => Ok(Some(value.to_string())),
            None => Ok(Some(String::from_utf8_lossy(entry.value_bytes()).into_owned())),
        }
    }

    fn config_values(&self, key: &str) -> BackendResult<Vec<String>> {
        let config = self.repo.config()?;
        let mut entries = match config.multivar(key, None) {
            Ok(entries) => entries,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut values = Vec::new();
        while let Some(entry) = entries.next() {
            let entry = entry?;
            if let Some(value) = entry.value() {
                values.push(value.to_string());
            }
        }
        Ok(values)
    }

    fn remote_names(&self) -> BackendResult<Vec<String>> {
        let remotes = self.repo.remotes()?;
        Ok(remotes.iter().flatten().map(String::from).collect())
    }

    fn statuses(&self, options: &StatusOptions) -> BackendResult<Vec<PathStatus>> {
        if self.repo.is_bare() {
            return Err(BackendError::Other(
                "bare repository has no working tree".into(),
            ));
        }

        let mut opts = git2::StatusOptions::new();
        opts.include_untracked(options.include_untracked)
            .recurse_untracked_dirs(options.include_untracked)
            .include_ignored(options.include_ignored)
            .include_unmodified(false)
            .renames_head_to_index(true);

        let statuses = self.repo.statuses(Some(&mut opts))?;

        let entries = statuses
            .iter()
            .map(|entry| {
                let bits = entry.status();
                PathStatus {
                    path: entry_path(&entry, bits),
                    index: index_change(bits),
                    worktree: worktree_change(bits),
                    ignored: bits.is_ignored(),
                    conflicted: bits.is_conflicted(),
                }
            })
            .collect();

        Ok(entries)
    }
}

/// Repository-relative path of a status entry.
///
/// `StatusEntry::path` names the old side of a rename; a staged rename is
/// reported under its new path.
fn entry_path(entry: &git2::StatusEntry<'_>, bits: Status) -> String {
    let renamed_to = if bits.is_index_renamed() {
        entry
            .head_to_index()
            .and_then(|delta| delta.new_file().path().map(|p| p.to_string_lossy().into_owned()))
    } else {
        None
    };
    renamed_to.unwrap_or_else(|| match entry.path() {
        Some(path) => path.to_string(),
        None => String::from_utf8_lossy(entry.path_bytes()).into_owned(),
    })
}

fn index_change(bits: Status) -> Option<Change> {
    if bits.is_index_new() {
        Some(Change::Added)
    } else if bits.is_index_renamed() {
        Some(Change::Renamed)
    } else if bits.is_index_deleted() {
        Some(Change::Deleted)
    } else if bits.is_index_typechange() {
        Some(Change::TypeChanged)
    } else if bits.is_index_modified() {
        Some(Change::Modified)
    } else {
        None
    }
}

fn worktree_change(bits: Status) -> Option<Change> {
    if bits.is_wt_new() {
        Some(Change::Added)
    } else if bits.is_wt_renamed() {
        Some(Change::Renamed)
    } else if bits.is_wt_deleted() {
        Some(Change::Deleted)
    } else if bits.is_wt_typechange() {
        Some(Change::TypeChanged)
    } else if bits.is_wt_modified() {
        Some(Change::Modified)
    } else {
        None
    }
}
