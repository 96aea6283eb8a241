//! Upload controller.
//!
//! Drives the upload request and branches on the asset kind: raster assets
//! hand off to the band-selection workflow, everything else lands in the
//! session store. The pending selection is consumed win or lose, so the
//! same file can be re-submitted immediately.

use std::path::Path;

use geochat_client::MappingApi;
use geochat_core::models::{AssetKind, UploadedAsset};
use geochat_core::session::{Flow, FlowTokens, SessionStore};

use crate::notify::Notifier;
use crate::progress;

/// Raster handle passed to the band-selection workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterHandle {
    pub path: String,
    pub band_count: u32,
}

pub struct UploadController<'a> {
    pub api: &'a dyn MappingApi,
    pub notify: &'a mut Notifier,
    pub store: &'a mut SessionStore,
    pub tokens: &'a mut FlowTokens,
}

impl UploadController<'_> {
    /// Handle a file selection. `None` (nothing selected) is a no-op.
    /// Returns the raster handle when the response calls for the
    /// band-selection workflow.
    pub async fn on_asset_selected(&mut self, selection: Option<&Path>) -> Option<RasterHandle> {
        let path = selection?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();

        self.notify.info(format!("Uploading {filename}..."));

        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(error) => {
                self.notify.error(format!("Upload failed: {error}"));
                tracing::error!(path = %path.display(), error = %error, "could not read upload");
                return None;
            }
        };

        let token = self.tokens.issue(Flow::Upload);
        let spinner = progress::create_spinner("Uploading...");
        let result = self.api.upload_file(&filename, bytes).await;
        progress::finish_and_clear(&spinner);

        if !self.tokens.is_current(token) {
            tracing::debug!("discarding stale upload response");
            return None;
        }

        match result {
            Ok(response) => {
                self.notify.success(response.message.clone());

                let asset = response.into_asset();
                match asset.kind {
                    AssetKind::Raster => Some(RasterHandle {
                        path: asset.filepath.clone().unwrap_or_default(),
                        band_count: asset.band_count,
                    }),
                    AssetKind::Tabular => {
                        self.remember_tabular(&asset);
                        None
                    }
                }
            }
            Err(error) => {
                self.notify.error(error.to_string());
                tracing::error!(error = %error, "upload error");
                None
            }
        }
    }

    fn remember_tabular(&mut self, asset: &UploadedAsset) {
        if let Some(path) = &asset.filepath {
            self.store.set_current_file(path.clone());
        }
        if let Err(error) = self.store.set_columns(&asset.columns) {
            tracing::error!(error = %error, "could not store column list");
        }
    }
}
