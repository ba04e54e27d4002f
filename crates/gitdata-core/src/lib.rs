//! Read-only repository introspection for gitdata
//!
//! Opens a repository, reads its branches, remotes and working tree
//! status, and returns deterministically ordered records with a small,
//! closed error taxonomy. The git library sits behind the [`Backend`]
//! trait; [`Git2Backend`] is the libgit2 implementation.

pub mod backend;
pub mod branch;
pub mod error;
pub mod git2_backend;
pub mod inspector;
pub mod normalize;
pub mod opener;
pub mod records;
pub mod remote;
pub mod status;

pub use backend::{Backend, Change, PathStatus, RepositoryAccess};
pub use error::{BackendError, BackendResult, Error, Result};
pub use git2_backend::{Git2Backend, Git2Repository};
pub use inspector::{BranchesView, Inspector, RemotesView, StatusView};
pub use opener::RepositoryHandle;
pub use records::{BranchRecord, FileState, FileStatusRecord, RemoteRecord, StatusSnapshot};
pub use status::StatusOptions;
