//! Data source provider for gitdata
//!
//! Exposes the repository reads of `gitdata-core` to a declarative host
//! tool as four data sources, each with an attribute schema:
//!
//! - `git_branch` - one local branch by name
//! - `git_branches` - every local branch
//! - `git_remotes` - every configured remote
//! - `git_statuses` - working tree and index status
//!
//! ```text
//! [ host tool ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ ProviderServer ] --> [ DataSource + Schema ] --> [ gitdata_core::Inspector ]
//! ```
//!
//! Failures the caller can act on (bad arguments, missing repository,
//! missing branch) come back as [`Diagnostic`] values inside a successful
//! response. Protocol failures are JSON-RPC errors.

pub mod config;
pub mod datasource;
pub mod diagnostic;
pub mod error;
pub mod protocol;
pub mod schema;
pub mod server;

pub use config::ProviderConfig;
pub use datasource::DataSource;
pub use diagnostic::{Diagnostic, Severity};
pub use error::{Error, Result};
pub use schema::{Arguments, Attribute, AttributeMode, AttributeType, Schema};
pub use server::ProviderServer;
