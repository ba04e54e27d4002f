//! Remote reader

use std::collections::BTreeMap;

use crate::Result;
use crate::backend::RepositoryAccess;
use crate::normalize;
use crate::opener::RepositoryHandle;
use crate::records::RemoteRecord;

/// Read every configured remote, keyed by name.
///
/// URLs come straight from `remote.<name>.url` in configuration order;
/// nothing is fetched or validated over the network.
pub fn read_remotes<R: RepositoryAccess>(
    handle: &RepositoryHandle<R>,
) -> Result<BTreeMap<String, RemoteRecord>> {
    let repo = handle.repo();
    let names = repo.remote_names().map_err(|err| handle.unreadable(err))?;

    let mut records = Vec::with_capacity(names.len());
    for name in names {
        let urls = repo
            .config_values(&format!("remote.{name}.url"))
            .map_err(|err| handle.unreadable(err))?;

        if urls.is_empty() {
            // e.g. a remote with only a pushurl
            tracing::warn!(remote = %name, "Skipping remote without a url");
            continue;
        }

        records.push(RemoteRecord { name, urls });
    }

    Ok(normalize::remotes(records))
}
