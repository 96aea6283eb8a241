//! Geochat CLI - Terminal client for the AI mapping assistant
//!
//! This is the interactive session surface for the mapping service.

mod bands;
mod chat;
mod cli;
mod commands;
mod config;
mod notify;
mod output;
mod progress;
mod render;
mod style;
mod uploader;

#[cfg(test)]
mod testutil;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Create async runtime
    let runtime = tokio::runtime::Runtime::new()?;

    // Execute the command
    runtime.block_on(async { commands::execute(cli).await })?;

    Ok(())
}
