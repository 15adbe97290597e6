mod commands;
mod config;
mod logging;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use protocol_vendor::{StatusPolicy, VendorConfig};
use protocol_vendor_http::HttpFetcher;

#[derive(Parser)]
#[command(name = "protocol-vendor")]
#[command(about = "Vendor generated LSP protocol bindings from a pinned gopls revision")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory a relative target directory is resolved against (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// TOML file overriding the built-in configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write non-2xx responses to disk instead of failing
    #[arg(long, global = true)]
    permissive: bool,

    /// Give up on a download after this many seconds (default: wait forever)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Remove stale generated files and download the pinned revision (default)
    Sync,
    /// Remove generated files only
    Clean,
    /// Print what would be downloaded and where
    Plan,
}

fn build_config(cli: &Cli) -> Result<VendorConfig> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("could not determine current directory")?,
    };

    let mut config = config::load_config(cli.config.as_deref())?.rooted_at(&root);
    if cli.permissive {
        config.status_policy = StatusPolicy::Permissive;
    }

    Ok(config)
}

fn build_fetcher(timeout_secs: Option<u64>) -> Result<HttpFetcher> {
    let fetcher = match timeout_secs {
        Some(secs) => HttpFetcher::with_timeout(Duration::from_secs(secs)),
        None => HttpFetcher::new(),
    };
    Ok(fetcher?)
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    match cli.command.unwrap_or(Command::Sync) {
        Command::Sync => {
            let fetcher = build_fetcher(cli.timeout_secs)?;
            commands::sync::run(&fetcher, &config).await
        }
        Command::Clean => commands::clean::run(&config).await,
        Command::Plan => commands::plan::run(&config),
    }
}
