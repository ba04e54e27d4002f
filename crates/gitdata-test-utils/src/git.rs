//! Repository fixtures that operate on a caller-owned path.

use std::fs;
use std::io::Write;
use std::path::Path;

/// Creates a `.git` directory that looks like a repository but cannot be
/// opened: `HEAD` is garbage and there is no object store.
///
/// Use for: corrupted-metadata cases.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn corrupt_git_dir(path: &Path) {
    fs::create_dir_all(path.join(".git/refs/heads"))
        .unwrap_or_else(|e| panic!("corrupt_git_dir: failed to create .git: {e}"));
    fs::write(path.join(".git/HEAD"), "this is not a ref\n")
        .unwrap_or_else(|e| panic!("corrupt_git_dir: failed to write HEAD: {e}"));
}

/// Points `refs/heads/<name>` at an object id that does not exist.
///
/// Written as a loose ref file because libgit2 refuses to create refs to
/// missing objects.
///
/// # Panics
/// Panics if the ref file cannot be written.
pub fn dangling_branch(git_dir: &Path, name: &str) {
    let ref_path = git_dir.join("refs/heads").join(name);
    if let Some(parent) = ref_path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("dangling_branch: failed to create {parent:?}: {e}"));
    }
    fs::write(&ref_path, format!("{}\n", "d".repeat(40)))
        .unwrap_or_else(|e| panic!("dangling_branch: failed to write {ref_path:?}: {e}"));
}

/// Appends raw text to the repository's local config file.
///
/// Use for: multi-valued keys (`url` repeated) and sections libgit2 has no
/// convenience setter for.
///
/// # Panics
/// Panics if the config file cannot be opened or written.
pub fn append_config(git_dir: &Path, text: &str) {
    let config_path = git_dir.join("config");
    let mut file = fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&config_path)
        .unwrap_or_else(|e| panic!("append_config: failed to open {config_path:?}: {e}"));
    file.write_all(text.as_bytes())
        .unwrap_or_else(|e| panic!("append_config: failed to write {config_path:?}: {e}"));
}
