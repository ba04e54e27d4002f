//! Remotes command

use gitdata_provider::DataSource;
use serde_json::json;

use super::render;
use crate::context::Context;
use crate::error::Result;

/// Print every remote as JSON
pub fn run_remotes(ctx: &Context) -> Result<String> {
    let state = ctx.read(
        DataSource::Remotes,
        json!({"directory": ctx.directory_argument()}),
    )?;
    render(&state)
}
