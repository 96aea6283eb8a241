//! Upload command implementation

use anyhow::Result;
use std::sync::Arc;

use geochat_client::HttpMappingApi;
use geochat_core::registry::MemoryMapRegistry;
use geochat_core::session::{FlowTokens, SessionStore, Transcript};

use crate::bands::BandSelectionWorkflow;
use crate::cli::UploadArgs;
use crate::config::Settings;
use crate::notify::Notifier;
use crate::output::OutputWriter;
use crate::render::ResponseRenderer;
use crate::uploader::UploadController;

pub async fn execute(args: UploadArgs, output: &OutputWriter, settings: &Settings) -> Result<()> {
    let api = HttpMappingApi::new(settings.base_url.clone());
    let registry = Arc::new(MemoryMapRegistry::new());
    let renderer = ResponseRenderer::new(settings.artifacts_dir.clone(), registry);
    let mut notify = Notifier::new();
    let mut store = SessionStore::new();
    let mut tokens = FlowTokens::new();
    let mut transcript = Transcript::new();

    let handle = UploadController {
        api: &api,
        notify: &mut notify,
        store: &mut store,
        tokens: &mut tokens,
    }
    .on_asset_selected(Some(&args.path))
    .await;

    if let Some(raster) = handle {
        if args.no_bands {
            output.info(format!(
                "Raster stored at {} ({} bands); run 'geochat chat' to analyze it",
                raster.path, raster.band_count
            ));
        } else {
            BandSelectionWorkflow {
                api: &api,
                notify: &mut notify,
                renderer: &renderer,
                transcript: &mut transcript,
                tokens: &mut tokens,
            }
            .present(&raster.path, raster.band_count)
            .await?;
        }
    }

    Ok(())
}
