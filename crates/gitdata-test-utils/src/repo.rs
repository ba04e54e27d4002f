//! [`TestRepo`] builder for repository scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use git2::{BranchType, Commit, ConfigLevel, IndexAddOption, Oid, Repository, Signature};
use tempfile::TempDir;

use crate::git;

/// A repository in a temporary directory with helpers to shape its state.
///
/// Every helper panics on failure; these are test fixtures.
///
/// # Example
///
/// ```rust,no_run
/// use gitdata_test_utils::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.write("README.md", "# Test");
/// repo.commit_all("Initial commit");
/// repo.add_remote("origin", "https://example.com/repo.git");
/// repo.set_tracking(&repo.current_branch(), Some("origin"), Some("true"));
/// ```
pub struct TestRepo {
    // Declared first so the repository closes before the directory goes.
    repo: Repository,
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// A repository with a working tree and no commits.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("TestRepo::new: failed to create temp dir");
        let repo = Repository::init(temp_dir.path()).unwrap_or_else(|e| {
            panic!(
                "TestRepo::new: failed to init repository at {}: {e}",
                temp_dir.path().display()
            )
        });
        Self { repo, temp_dir }
    }

    /// A bare repository with no commits.
    pub fn bare() -> Self {
        let temp_dir = TempDir::new().expect("TestRepo::bare: failed to create temp dir");
        let repo = Repository::init_bare(temp_dir.path()).unwrap_or_else(|e| {
            panic!(
                "TestRepo::bare: failed to init bare repository at {}: {e}",
                temp_dir.path().display()
            )
        });
        Self { repo, temp_dir }
    }

    /// Root of the repository (the working tree, or the bare directory).
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The git directory (`.git`, or the root of a bare repository).
    pub fn git_dir(&self) -> PathBuf {
        self.repo.path().to_path_buf()
    }

    /// Write `content` to `path` relative to the working tree.
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("TestRepo::write: {}: {e}", full_path.display()));
    }

    /// Delete `path` from the working tree only.
    pub fn remove(&self, path: &str) {
        fs::remove_file(self.root().join(path)).unwrap();
    }

    /// Stage `path` as it is on disk.
    pub fn stage(&self, path: &str) {
        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(path)).unwrap();
        index.write().unwrap();
    }

    /// Remove `path` from the index, leaving the file on disk alone.
    pub fn stage_removal(&self, path: &str) {
        let mut index = self.repo.index().unwrap();
        index.remove_path(Path::new(path)).unwrap();
        index.write().unwrap();
    }

    /// Stage every file in the working tree and commit.
    pub fn commit_all(&self, message: &str) -> Oid {
        let mut index = self.repo.index().unwrap();
        index
            .add_all(["*"], IndexAddOption::DEFAULT, None)
            .unwrap();
        index.write().unwrap();
        self.commit_index(message)
    }

    /// Commit whatever is currently staged.
    pub fn commit_index(&self, message: &str) -> Oid {
        let mut index = self.repo.index().unwrap();
        let tree_id = index.write_tree().unwrap();
        self.commit_tree(tree_id, message)
    }

    /// Commit a tree with a single file without touching any index.
    ///
    /// Works for bare repositories.
    pub fn commit_blob(&self, path: &str, content: &str, message: &str) -> Oid {
        let blob = self.repo.blob(content.as_bytes()).unwrap();
        let mut builder = self.repo.treebuilder(None).unwrap();
        builder.insert(path, blob, 0o100644).unwrap();
        let tree_id = builder.write().unwrap();
        self.commit_tree(tree_id, message)
    }

    fn commit_tree(&self, tree_id: Oid, message: &str) -> Oid {
        let tree = self.repo.find_tree(tree_id).unwrap();
        let signature = Signature::now("Test User", "test@example.com").unwrap();
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&Commit> = parent.iter().collect();

        self.repo
            .commit(
                Some("HEAD"),
                &signature,
                &signature,
                message,
                &tree,
                &parents,
            )
            .unwrap_or_else(|e| panic!("TestRepo::commit: {e}"))
    }

    /// Short name of the branch HEAD points at (after the first commit).
    pub fn current_branch(&self) -> String {
        let head = self.repo.head().expect("TestRepo::current_branch: HEAD is unborn");
        head.shorthand().unwrap_or("HEAD").to_string()
    }

    /// Create a branch at the current HEAD commit.
    pub fn create_branch(&self, name: &str) -> Oid {
        let commit = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo.branch(name, &commit, false).unwrap();
        commit.id()
    }

    /// Hex id of a local branch's head commit.
    pub fn branch_head(&self, name: &str) -> String {
        let branch = self.repo.find_branch(name, BranchType::Local).unwrap();
        branch.get().peel_to_commit().unwrap().id().to_string()
    }

    /// Detach HEAD at the current commit.
    pub fn detach_head(&self) {
        let commit = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo.set_head_detached(commit.id()).unwrap();
    }

    /// Configure `branch.<name>.remote` / `branch.<name>.rebase`.
    pub fn set_tracking(&self, branch: &str, remote: Option<&str>, rebase: Option<&str>) {
        let mut config = self.local_config();
        if let Some(remote) = remote {
            config
                .set_str(&format!("branch.{branch}.remote"), remote)
                .unwrap();
            config
                .set_str(&format!("branch.{branch}.merge"), &format!("refs/heads/{branch}"))
                .unwrap();
        }
        if let Some(rebase) = rebase {
            config
                .set_str(&format!("branch.{branch}.rebase"), rebase)
                .unwrap();
        }
    }

    /// Add a remote with one URL.
    pub fn add_remote(&self, name: &str, url: &str) {
        self.repo.remote(name, url).unwrap();
    }

    /// Add a remote section with several `url` entries, in order.
    pub fn add_remote_urls(&self, name: &str, urls: &[&str]) {
        let mut section = format!("[remote \"{name}\"]\n");
        for url in urls {
            section.push_str(&format!("\turl = {url}\n"));
        }
        section.push_str(&format!(
            "\tfetch = +refs/heads/*:refs/remotes/{name}/*\n"
        ));
        git::append_config(&self.git_dir(), &section);
    }

    /// Leave `path` conflicted by merging a divergent edit into HEAD.
    ///
    /// Needs at least one commit. `path` must be a top-level file name.
    pub fn conflict(&self, path: &str) {
        let base = self.repo.head().unwrap().peel_to_commit().unwrap();

        let blob = self.repo.blob(b"theirs\n").unwrap();
        let mut builder = self.repo.treebuilder(Some(&base.tree().unwrap())).unwrap();
        builder.insert(path, blob, 0o100644).unwrap();
        let tree = self.repo.find_tree(builder.write().unwrap()).unwrap();
        let signature = Signature::now("Test User", "test@example.com").unwrap();
        let theirs = self
            .repo
            .commit(None, &signature, &signature, "Theirs", &tree, &[&base])
            .unwrap();

        self.write(path, "ours\n");
        self.commit_all("Ours");

        let annotated = self.repo.find_annotated_commit(theirs).unwrap();
        self.repo
            .merge(&[&annotated], None, None)
            .unwrap_or_else(|e| panic!("TestRepo::conflict: merge failed: {e}"));
    }

    /// Point `refs/heads/<name>` at a missing object.
    pub fn dangling_branch(&self, name: &str) {
        git::dangling_branch(&self.git_dir(), name);
    }

    fn local_config(&self) -> git2::Config {
        self.repo
            .config()
            .unwrap()
            .open_level(ConfigLevel::Local)
            .unwrap()
    }
}
