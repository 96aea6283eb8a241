//! Interactive chat session command.
//!
//! One session owns the transcript, the session store, the map registry,
//! and the toast notifier. Free text submits queries; slash commands drive
//! the upload, band-selection, and style controllers.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use dialoguer::Input;

use geochat_client::HttpMappingApi;
use geochat_core::registry::MemoryMapRegistry;
use geochat_core::session::{FlowTokens, SessionStore, Transcript};

use super::status;
use crate::bands::BandSelectionWorkflow;
use crate::chat::ChatController;
use crate::cli::ChatArgs;
use crate::config::Settings;
use crate::notify::Notifier;
use crate::output::OutputWriter;
use crate::render::ResponseRenderer;
use crate::style::MapStyleController;
use crate::uploader::{RasterHandle, UploadController};

pub async fn execute(args: ChatArgs, output: &OutputWriter, settings: &Settings) -> Result<()> {
    let mut session = ChatSession::new(settings);

    output.info("Chat session started. Type /help for commands, /quit to leave.");

    if let Some(path) = args.upload {
        session.upload(&path).await?;
    }

    loop {
        let line: String = match Input::new()
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // EOF or terminal teardown ends the session
            Err(_) => break,
        };

        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix('/') {
            if !session.handle_command(command, output, settings).await? {
                break;
            }
        } else {
            session.query(&line).await?;
        }
    }

    Ok(())
}

/// Everything one interactive session owns.
struct ChatSession {
    api: HttpMappingApi,
    transcript: Transcript,
    store: SessionStore,
    tokens: FlowTokens,
    notify: Notifier,
    renderer: ResponseRenderer,
    style: MapStyleController,
    last_raster: Option<RasterHandle>,
}

impl ChatSession {
    fn new(settings: &Settings) -> Self {
        let registry = Arc::new(MemoryMapRegistry::new());
        Self {
            api: HttpMappingApi::new(settings.base_url.clone()),
            transcript: Transcript::new(),
            store: SessionStore::new(),
            tokens: FlowTokens::new(),
            notify: Notifier::new(),
            renderer: ResponseRenderer::new(settings.artifacts_dir.clone(), registry.clone()),
            style: MapStyleController::new(registry),
            last_raster: None,
        }
    }

    async fn upload(&mut self, path: &Path) -> Result<()> {
        let handle = UploadController {
            api: &self.api,
            notify: &mut self.notify,
            store: &mut self.store,
            tokens: &mut self.tokens,
        }
        .on_asset_selected(Some(path))
        .await;

        if let Some(handle) = handle {
            // A new raster supersedes the previous workflow; only one is
            // ever live.
            self.last_raster = Some(handle);
            self.bands().await?;
        }
        Ok(())
    }

    async fn bands(&mut self) -> Result<()> {
        let Some(raster) = self.last_raster.clone() else {
            self.notify.error("Upload a raster asset first");
            return Ok(());
        };

        BandSelectionWorkflow {
            api: &self.api,
            notify: &mut self.notify,
            renderer: &self.renderer,
            transcript: &mut self.transcript,
            tokens: &mut self.tokens,
        }
        .present(&raster.path, raster.band_count)
        .await
    }

    async fn query(&mut self, line: &str) -> Result<()> {
        ChatController {
            api: &self.api,
            transcript: &mut self.transcript,
            tokens: &mut self.tokens,
            renderer: &self.renderer,
        }
        .submit_query(line)
        .await
    }

    /// Returns false when the session should end.
    async fn handle_command(
        &mut self,
        command: &str,
        output: &OutputWriter,
        settings: &Settings,
    ) -> Result<bool> {
        let mut parts = command.split_whitespace();
        match parts.next() {
            Some("quit") | Some("exit") => return Ok(false),
            Some("help") | None => print_help(output),
            Some("upload") => match parts.next() {
                Some(path) => self.upload(Path::new(path)).await?,
                None => output.error("Usage: /upload <path>"),
            },
            Some("bands") => self.bands().await?,
            Some("color") => match (parts.next(), parts.next()) {
                (Some(column), Some(scheme)) => self.style.set_color_scheme(column, scheme),
                _ => output.error("Usage: /color <column> <scheme>"),
            },
            Some("opacity") => match (parts.next(), parts.next()) {
                (Some(layer), Some(value)) => self.style.set_opacity(layer, value),
                _ => output.error("Usage: /opacity <layer> <value>"),
            },
            Some("status") => status::print_session(output, settings, &self.store),
            Some(other) => output.error(format!("Unknown command: /{other}")),
        }
        Ok(true)
    }
}

fn print_help(output: &OutputWriter) {
    output.info(
        "Commands: /upload <path>, /bands, /color <column> <scheme>, \
         /opacity <layer> <value>, /status, /quit",
    );
}
