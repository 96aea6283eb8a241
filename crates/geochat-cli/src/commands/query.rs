//! Query command implementation

use anyhow::Result;
use std::sync::Arc;

use geochat_client::HttpMappingApi;
use geochat_core::registry::MemoryMapRegistry;
use geochat_core::session::{FlowTokens, Transcript};

use crate::chat::ChatController;
use crate::cli::QueryArgs;
use crate::config::Settings;
use crate::output::OutputWriter;
use crate::render::ResponseRenderer;

pub async fn execute(args: QueryArgs, _output: &OutputWriter, settings: &Settings) -> Result<()> {
    let api = HttpMappingApi::new(settings.base_url.clone());
    let registry = Arc::new(MemoryMapRegistry::new());
    let renderer = ResponseRenderer::new(settings.artifacts_dir.clone(), registry);
    let mut transcript = Transcript::new();
    let mut tokens = FlowTokens::new();

    ChatController {
        api: &api,
        transcript: &mut transcript,
        tokens: &mut tokens,
        renderer: &renderer,
    }
    .submit_query(&args.query)
    .await
}
