//! gitdata provider server
//!
//! # Usage
//!
//! ```bash
//! gitdata-provider [--config <path>]
//! ```
//!
//! # Environment Variables
//!
//! - `GITDATA_CONFIG`: config file path when `--config` is not given
//! - `RUST_LOG`: log filter (default: the config's `log_filter`, else
//!   `gitdata_provider=info`)
//!
//! # Protocol
//!
//! JSON-RPC 2.0 over stdio, one message per line. Logs go to stderr.

use std::path::PathBuf;

use clap::Parser;
use gitdata_provider::config::CONFIG_ENV;
use gitdata_provider::{ProviderConfig, ProviderServer};
use tracing_subscriber::EnvFilter;

/// Data source provider for gitdata
#[derive(Parser)]
#[command(name = "gitdata-provider")]
#[command(about = "Serve repository data sources over JSON-RPC on stdio")]
#[command(version)]
struct Args {
    /// Provider config file (TOML)
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = ProviderConfig::load(args.config.as_deref())?;

    // stdout is reserved for the protocol
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(config = ?args.config, "Starting gitdata-provider");

    let mut server = ProviderServer::new(config);
    server.run().await?;

    Ok(())
}
