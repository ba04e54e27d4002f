//! Immutable value records produced by the readers.

use std::collections::BTreeMap;

use serde::Serialize;

/// A local branch with its head commit and tracking configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchRecord {
    pub name: String,

    /// `branch.<name>.remote`, absent when not configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,

    /// `branch.<name>.rebase`, absent when not configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebase: Option<String>,

    /// 40 lowercase hex characters
    pub head_sha1: String,
}

/// A configured remote and its URLs in configuration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteRecord {
    pub name: String,
    pub urls: Vec<String>,
}

/// State of a path in the index or the working tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileState {
    Unmodified,
    Modified,
    Added,
    Deleted,
    Renamed,
    Copied,
    Untracked,
    Ignored,
    Conflicted,
}

impl FileState {
    /// Porcelain status letter.
    pub fn code(&self) -> char {
        match self {
            Self::Unmodified => ' ',
            Self::Modified => 'M',
            Self::Added => 'A',
            Self::Deleted => 'D',
            Self::Renamed => 'R',
            Self::Copied => 'C',
            Self::Untracked => '?',
            Self::Ignored => '!',
            Self::Conflicted => 'U',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unmodified => "unmodified",
            Self::Modified => "modified",
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::Renamed => "renamed",
            Self::Copied => "copied",
            Self::Untracked => "untracked",
            Self::Ignored => "ignored",
            Self::Conflicted => "conflicted",
        }
    }
}

impl std::fmt::Display for FileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Index and worktree state of one repository-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStatusRecord {
    pub path: String,
    pub staged_state: FileState,
    pub worktree_state: FileState,
}

/// Working tree status at the time of the read.
///
/// `is_clean` is derived from `files`, so the two cannot disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    is_clean: bool,
    files: BTreeMap<String, FileStatusRecord>,
}

impl StatusSnapshot {
    pub fn new(files: BTreeMap<String, FileStatusRecord>) -> Self {
        Self {
            is_clean: files.is_empty(),
            files,
        }
    }

    /// Snapshot of a repository with nothing to report.
    pub fn clean() -> Self {
        Self::new(BTreeMap::new())
    }

    pub fn is_clean(&self) -> bool {
        self.is_clean
    }

    pub fn files(&self) -> &BTreeMap<String, FileStatusRecord> {
        &self.files
    }

    pub fn into_files(self) -> BTreeMap<String, FileStatusRecord> {
        self.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_iff_no_files() {
        assert!(StatusSnapshot::clean().is_clean());
        assert!(StatusSnapshot::default().files().is_empty());

        let mut files = BTreeMap::new();
        files.insert(
            "a.txt".to_string(),
            FileStatusRecord {
                path: "a.txt".into(),
                staged_state: FileState::Added,
                worktree_state: FileState::Unmodified,
            },
        );
        let snapshot = StatusSnapshot::new(files);
        assert!(!snapshot.is_clean());
        assert_eq!(snapshot.files().len(), 1);
    }

    #[test]
    fn absent_tracking_fields_are_not_serialized() {
        let record = BranchRecord {
            name: "main".into(),
            remote: None,
            rebase: None,
            head_sha1: "0".repeat(40),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("remote").is_none());
        assert!(json.get("rebase").is_none());
        assert_eq!(json["name"], "main");
    }

    #[test]
    fn file_state_serializes_snake_case() {
        let json = serde_json::to_value(FileState::Untracked).unwrap();
        assert_eq!(json, "untracked");
    }

    #[test]
    fn file_state_codes() {
        assert_eq!(FileState::Untracked.code(), '?');
        assert_eq!(FileState::Conflicted.code(), 'U');
        assert_eq!(FileState::Unmodified.to_string(), "unmodified");
    }
}
