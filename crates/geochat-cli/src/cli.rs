use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Geochat - terminal client for the AI mapping assistant
#[derive(Parser, Debug)]
#[command(name = "geochat")]
#[command(about = "Chat with your geospatial data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Mapping service base URL (overrides config file and GEOCHAT_SERVER)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Directory rendered map artifacts are written to
    #[arg(long, global = true)]
    pub artifacts_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive chat session
    Chat(ChatArgs),

    /// Upload a geospatial asset
    Upload(UploadArgs),

    /// Submit a single query and render the reply
    Query(QueryArgs),

    /// Show the session configuration and stored asset
    Status(StatusArgs),
}

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Upload this asset before the first prompt
    #[arg(long)]
    pub upload: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct UploadArgs {
    /// Path to the asset file (raster imagery or tabular/vector data)
    pub path: PathBuf,

    /// Skip the band-selection workflow for raster uploads
    #[arg(long)]
    pub no_bands: bool,
}

#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// The query text
    pub query: String,
}

#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Show detailed session information
    #[arg(long)]
    pub verbose: bool,
}
