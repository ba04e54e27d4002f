//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gitdata_provider::config::CONFIG_ENV;

/// gitdata - Read branches, remotes and status of a local repository
#[derive(Parser, Debug)]
#[command(name = "gitdata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (logs to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Provider config file (TOML)
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Repository root to read; parent directories are not searched
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub directory: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show one local branch (git_branch)
    ///
    /// Examples:
    ///   gitdata branch main
    ///   gitdata -C ../other branch feature/login
    Branch {
        /// Short name of the branch
        name: String,
    },

    /// Show every local branch (git_branches)
    Branches,

    /// Show every configured remote (git_remotes)
    Remotes,

    /// Show working tree status (git_statuses)
    Status {
        /// One `XY path` line per file instead of JSON
        #[arg(long)]
        short: bool,

        /// Include files excluded by ignore rules
        #[arg(long)]
        ignored: bool,

        /// Leave out files not in the index
        #[arg(long)]
        no_untracked: bool,
    },
}
