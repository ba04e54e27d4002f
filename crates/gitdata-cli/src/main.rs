//! gitdata CLI
//!
//! One-shot reads of a local repository, printed as JSON.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use gitdata_provider::ProviderConfig;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::StatusFlags;
use context::Context;
use error::{CliError, Result};

fn main() {
    match run() {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<String> {
    let cli = Cli::parse();

    // Setup tracing if verbose; stdout stays clean for the JSON
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let config = ProviderConfig::load(cli.config.as_deref())?;
    let ctx = Context::new(cli.directory, config);

    let mut output = execute_command(&ctx, cli.command)?;
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn execute_command(ctx: &Context, cmd: Commands) -> Result<String> {
    match cmd {
        Commands::Branch { name } => commands::run_branch(ctx, &name),
        Commands::Branches => commands::run_branches(ctx),
        Commands::Remotes => commands::run_remotes(ctx),
        Commands::Status {
            short,
            ignored,
            no_untracked,
        } => commands::run_status(
            ctx,
            StatusFlags {
                short,
                ignored,
                no_untracked,
            },
        ),
    }
}
