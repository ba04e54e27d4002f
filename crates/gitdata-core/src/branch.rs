//! Branch reader

use crate::backend::RepositoryAccess;
use crate::normalize;
use crate::opener::RepositoryHandle;
use crate::records::BranchRecord;
use crate::{Error, Result};

/// Read one local branch.
///
/// Fails with [`Error::BranchNotFound`] when no such branch exists and with
/// [`Error::InternalResolutionFailure`] when it exists but its head cannot
/// be resolved to a commit.
pub fn read_branch<R: RepositoryAccess>(
    handle: &RepositoryHandle<R>,
    name: &str,
) -> Result<BranchRecord> {
    let exists = handle
        .repo()
        .has_branch(name)
        .map_err(|err| handle.unreadable(err))?;

    if !exists {
        return Err(Error::BranchNotFound {
            name: name.to_string(),
        });
    }

    branch_record(handle, name)
}

/// Read every local branch, sorted by name.
///
/// An empty repository has no branches and yields an empty list.
pub fn read_branches<R: RepositoryAccess>(handle: &RepositoryHandle<R>) -> Result<Vec<BranchRecord>> {
    let names = handle
        .repo()
        .list_branches()
        .map_err(|err| handle.unreadable(err))?;

    let records = names
        .iter()
        .map(|name| branch_record(handle, name))
        .collect::<Result<Vec<_>>>()?;

    Ok(normalize::branches(records))
}

fn branch_record<R: RepositoryAccess>(handle: &RepositoryHandle<R>, name: &str) -> Result<BranchRecord> {
    let repo = handle.repo();

    let raw = repo
        .resolve_branch(name)
        .map_err(|err| Error::InternalResolutionFailure {
            name: name.to_string(),
            reason: err.to_string(),
        })?;

    let head_sha1 =
        normalize::head_sha1(&raw).ok_or_else(|| Error::InternalResolutionFailure {
            name: name.to_string(),
            reason: format!("'{raw}' is not a SHA-1 object id"),
        })?;

    let remote = repo
        .config_value(&format!("branch.{name}.remote"))
        .map_err(|err| handle.unreadable(err))?;
    let rebase = repo
        .config_value(&format!("branch.{name}.rebase"))
        .map_err(|err| handle.unreadable(err))?;

    tracing::debug!(branch = %name, %head_sha1, ?remote, ?rebase, "Read branch");

    Ok(BranchRecord {
        name: name.to_string(),
        remote,
        rebase,
        head_sha1,
    })
}
