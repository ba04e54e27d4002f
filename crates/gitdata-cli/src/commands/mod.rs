//! Command implementations for gitdata-cli
//!
//! Each command returns the text to print on stdout.

pub mod branch;
pub mod remote;
pub mod status;

pub use branch::{run_branch, run_branches};
pub use remote::run_remotes;
pub use status::{StatusFlags, run_status};

use serde_json::Value;

use crate::error::Result;

fn render(state: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}
