//! Tests for working tree status classification

use gitdata_core::{FileState, FileStatusRecord, Inspector, StatusOptions};
use gitdata_test_utils::TestRepo;
use pretty_assertions::assert_eq;

fn repo_with_commit() -> TestRepo {
    let repo = TestRepo::new();
    repo.write("README.md", "# Test");
    repo.write("src/lib.rs", "pub fn answer() -> u32 { 42 }\n");
    repo.commit_all("Initial commit");
    repo
}

fn record(path: &str, staged: FileState, worktree: FileState) -> FileStatusRecord {
    FileStatusRecord {
        path: path.to_string(),
        staged_state: staged,
        worktree_state: worktree,
    }
}

#[test]
fn committed_repository_is_clean() {
    let repo = repo_with_commit();

    let view = Inspector::new().status(repo.root()).unwrap();
    assert!(view.snapshot.is_clean());
    assert!(view.snapshot.files().is_empty());
    assert_eq!(view.directory, repo.root());
}

#[test]
fn empty_repository_is_clean() {
    let repo = TestRepo::new();

    let view = Inspector::new().status(repo.root()).unwrap();
    assert!(view.snapshot.is_clean());
}

#[test]
fn staged_new_file_is_one_added_entry() {
    let repo = repo_with_commit();
    repo.write("new.txt", "fresh");
    repo.stage("new.txt");

    let view = Inspector::new().status(repo.root()).unwrap();
    assert!(!view.snapshot.is_clean());
    assert_eq!(view.snapshot.files().len(), 1);
    assert_eq!(
        view.snapshot.files()["new.txt"],
        record("new.txt", FileState::Added, FileState::Unmodified)
    );
}

#[test]
fn staged_file_in_unborn_repository_is_added() {
    let repo = TestRepo::new();
    repo.write("first.txt", "first");
    repo.stage("first.txt");

    let view = Inspector::new().status(repo.root()).unwrap();
    assert_eq!(
        view.snapshot.files()["first.txt"],
        record("first.txt", FileState::Added, FileState::Unmodified)
    );
}

#[test]
fn staged_then_modified_new_file_is_single_entry() {
    let repo = repo_with_commit();
    repo.write("new.txt", "fresh");
    repo.stage("new.txt");
    repo.write("new.txt", "fresh and then edited again");

    let view = Inspector::new().status(repo.root()).unwrap();
    assert_eq!(view.snapshot.files().len(), 1);
    assert_eq!(
        view.snapshot.files()["new.txt"],
        record("new.txt", FileState::Added, FileState::Modified)
    );
}

#[test]
fn staged_then_modified_tracked_file_is_single_entry() {
    let repo = repo_with_commit();
    repo.write("README.md", "# Test\n\nMore text");
    repo.stage("README.md");
    repo.write("README.md", "# Test\n\nMore text, edited once more");

    let view = Inspector::new().status(repo.root()).unwrap();
    assert_eq!(view.snapshot.files().len(), 1);
    assert_eq!(
        view.snapshot.files()["README.md"],
        record("README.md", FileState::Modified, FileState::Modified)
    );
}

#[test]
fn unstaged_modification_is_worktree_modified() {
    let repo = repo_with_commit();
    repo.write("src/lib.rs", "pub fn answer() -> u32 { 41 + 1 }\n");

    let view = Inspector::new().status(repo.root()).unwrap();
    assert_eq!(
        view.snapshot.files()["src/lib.rs"],
        record("src/lib.rs", FileState::Unmodified, FileState::Modified)
    );
}

#[test]
fn deleted_from_disk_is_worktree_deleted() {
    let repo = repo_with_commit();
    repo.remove("README.md");

    let view = Inspector::new().status(repo.root()).unwrap();
    assert_eq!(
        view.snapshot.files()["README.md"],
        record("README.md", FileState::Unmodified, FileState::Deleted)
    );
}

#[test]
fn staged_deletion_is_staged_deleted() {
    let repo = repo_with_commit();
    repo.remove("README.md");
    repo.stage_removal("README.md");

    let view = Inspector::new().status(repo.root()).unwrap();
    assert_eq!(view.snapshot.files().len(), 1);
    assert_eq!(
        view.snapshot.files()["README.md"],
        record("README.md", FileState::Deleted, FileState::Unmodified)
    );
}

#[test]
fn staged_rename_is_keyed_by_new_path() {
    let repo = repo_with_commit();
    repo.remove("src/lib.rs");
    repo.stage_removal("src/lib.rs");
    repo.write("src/answer.rs", "pub fn answer() -> u32 { 42 }\n");
    repo.stage("src/answer.rs");

    let view = Inspector::new().status(repo.root()).unwrap();
    assert_eq!(view.snapshot.files().len(), 1);
    assert_eq!(
        view.snapshot.files()["src/answer.rs"],
        record("src/answer.rs", FileState::Renamed, FileState::Unmodified)
    );
}

#[test]
fn merge_conflict_is_conflicted_on_both_sides() {
    let repo = repo_with_commit();
    repo.conflict("README.md");

    let view = Inspector::new().status(repo.root()).unwrap();
    assert!(!view.snapshot.is_clean());
    assert_eq!(view.snapshot.files().len(), 1);
    assert_eq!(
        view.snapshot.files()["README.md"],
        record("README.md", FileState::Conflicted, FileState::Conflicted)
    );
}

#[test]
fn untracked_files_are_listed_per_file() {
    let repo = repo_with_commit();
    repo.write("notes.txt", "todo");
    repo.write("scratch/a.txt", "a");
    repo.write("scratch/b.txt", "b");

    let view = Inspector::new().status(repo.root()).unwrap();
    let paths: Vec<_> = view.snapshot.files().keys().cloned().collect();
    assert_eq!(paths, vec!["notes.txt", "scratch/a.txt", "scratch/b.txt"]);
    for file in view.snapshot.files().values() {
        assert_eq!(file.staged_state, FileState::Untracked);
        assert_eq!(file.worktree_state, FileState::Untracked);
    }
}

#[test]
fn restaging_committed_content_leaves_no_entry() {
    let repo = repo_with_commit();
    repo.write("README.md", "# Changed heading");
    repo.stage("README.md");
    repo.write("README.md", "# Test");
    repo.stage("README.md");

    let view = Inspector::new().status(repo.root()).unwrap();
    assert!(view.snapshot.is_clean(), "{:?}", view.snapshot.files());
}

#[test]
fn ignored_files_are_hidden_by_default() {
    let repo = repo_with_commit();
    repo.write(".gitignore", "*.log\n");
    repo.commit_all("Ignore logs");
    repo.write("debug.log", "noise");

    let view = Inspector::new().status(repo.root()).unwrap();
    assert!(view.snapshot.is_clean());

    let options = StatusOptions {
        include_ignored: true,
        ..StatusOptions::default()
    };
    let view = Inspector::new().status_with(repo.root(), &options).unwrap();
    assert_eq!(
        view.snapshot.files()["debug.log"],
        record("debug.log", FileState::Ignored, FileState::Ignored)
    );
}

#[test]
fn untracked_can_be_excluded() {
    let repo = repo_with_commit();
    repo.write("notes.txt", "todo");

    let options = StatusOptions {
        include_untracked: false,
        ..StatusOptions::default()
    };
    let view = Inspector::new().status_with(repo.root(), &options).unwrap();
    assert!(view.snapshot.is_clean());
}

#[test]
fn bare_repository_is_always_clean() {
    let repo = TestRepo::bare();
    repo.commit_blob("README.md", "# Bare", "Initial commit");

    let view = Inspector::new().status(repo.root()).unwrap();
    assert!(view.snapshot.is_clean());
    assert!(view.snapshot.files().is_empty());
}

#[test]
fn mixed_changes_are_keyed_and_sorted_by_path() {
    let repo = repo_with_commit();
    repo.write("z-untracked.txt", "z");
    repo.write("a-staged.txt", "a");
    repo.stage("a-staged.txt");
    repo.write("src/lib.rs", "pub fn answer() -> u32 { 0 }\n// changed\n");

    let view = Inspector::new().status(repo.root()).unwrap();
    let paths: Vec<_> = view.snapshot.files().keys().map(String::as_str).collect();
    assert_eq!(paths, vec!["a-staged.txt", "src/lib.rs", "z-untracked.txt"]);
}
