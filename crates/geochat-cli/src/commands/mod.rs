//! Command implementations

mod chat;
mod query;
mod status;
mod upload;

use crate::cli::{Cli, Commands};
use crate::config;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let settings = config::resolve(cli.server, cli.artifacts_dir)?;

    match cli.command {
        Commands::Chat(args) => chat::execute(args, &output, &settings).await,
        Commands::Upload(args) => upload::execute(args, &output, &settings).await,
        Commands::Query(args) => query::execute(args, &output, &settings).await,
        Commands::Status(args) => status::execute(args, &output, &settings),
    }
}
