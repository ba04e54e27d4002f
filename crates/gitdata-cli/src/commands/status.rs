//! Status command implementation

use gitdata_core::StatusSnapshot;
use gitdata_provider::DataSource;
use serde_json::json;

use super::render;
use crate::context::Context;
use crate::error::Result;

/// Status flags from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFlags {
    pub short: bool,
    pub ignored: bool,
    pub no_untracked: bool,
}

/// Print working tree status, as JSON or one `XY path` line per file
pub fn run_status(ctx: &Context, flags: StatusFlags) -> Result<String> {
    if flags.short {
        let mut options = ctx.config().status_options();
        options.include_ignored |= flags.ignored;
        options.include_untracked &= !flags.no_untracked;
        let view = ctx.inspector().status_with(ctx.directory(), &options)?;
        return Ok(short_format(&view.snapshot));
    }

    // Unset flags leave the configured default in place.
    let mut arguments = json!({"directory": ctx.directory_argument()});
    if flags.ignored {
        arguments["include_ignored"] = json!(true);
    }
    if flags.no_untracked {
        arguments["include_untracked"] = json!(false);
    }

    let state = ctx.read(DataSource::Statuses, arguments)?;
    render(&state)
}

fn short_format(snapshot: &StatusSnapshot) -> String {
    snapshot
        .files()
        .values()
        .map(|file| {
            format!(
                "{}{} {}\n",
                file.staged_state.code(),
                file.worktree_state.code(),
                file.path
            )
        })
        .collect()
}
