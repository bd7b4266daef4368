//! Binary crate for the `weatherbot` command-line front-end.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - The chat session standing in for a real chat transport

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod chat;
mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
