//! Pure normalization helpers applied at the reader boundary.
//!
//! Backends make no ordering promises. Everything leaving a reader passes
//! through here, which sorts by key and collapses duplicate keys (first
//! occurrence wins).

use std::collections::BTreeMap;

use crate::records::{BranchRecord, FileStatusRecord, RemoteRecord, StatusSnapshot};

/// Length of a hex-encoded SHA-1 object id.
pub const SHA1_HEX_LEN: usize = 40;

/// Validate a hex object id and lowercase it.
///
/// Returns `None` unless `raw` is exactly 40 hex digits.
pub fn head_sha1(raw: &str) -> Option<String> {
    if raw.len() == SHA1_HEX_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(raw.to_ascii_lowercase())
    } else {
        None
    }
}

/// Sort branches by name (byte-wise) and drop repeated names.
pub fn branches(mut records: Vec<BranchRecord>) -> Vec<BranchRecord> {
    // Stable sort keeps the first record of a repeated name in front.
    records.sort_by(|a, b| a.name.cmp(&b.name));
    records.dedup_by(|later, earlier| later.name == earlier.name);
    records
}

/// Key remotes by name.
pub fn remotes(records: Vec<RemoteRecord>) -> BTreeMap<String, RemoteRecord> {
    let mut keyed = BTreeMap::new();
    for record in records {
        keyed.entry(record.name.clone()).or_insert(record);
    }
    keyed
}

/// Key file records by path and derive cleanliness.
pub fn status(records: Vec<FileStatusRecord>) -> StatusSnapshot {
    let mut files = BTreeMap::new();
    for record in records {
        if files.contains_key(&record.path) {
            tracing::debug!(path = %record.path, "Dropping repeated status entry");
            continue;
        }
        files.insert(record.path.clone(), record);
    }
    StatusSnapshot::new(files)
}
