//! Shared test utilities for the gitdata workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`]: low-level fixtures that put a directory into a given state
//! - [`repo`]: [`TestRepo`](repo::TestRepo) builder owning a temporary repository

pub mod git;
pub mod repo;

pub use repo::TestRepo;
