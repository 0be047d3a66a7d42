//! Binary crate for the `owm` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Calling the core client
//! - Human-friendly output formatting

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
