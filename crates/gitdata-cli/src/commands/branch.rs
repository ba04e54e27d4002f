//! Branch commands

use gitdata_provider::DataSource;
use serde_json::json;

use super::render;
use crate::context::Context;
use crate::error::Result;

/// Print one branch as JSON
pub fn run_branch(ctx: &Context, name: &str) -> Result<String> {
    let state = ctx.read(
        DataSource::Branch,
        json!({"directory": ctx.directory_argument(), "name": name}),
    )?;
    render(&state)
}

/// Print every branch as JSON
pub fn run_branches(ctx: &Context) -> Result<String> {
    let state = ctx.read(
        DataSource::Branches,
        json!({"directory": ctx.directory_argument()}),
    )?;
    render(&state)
}
