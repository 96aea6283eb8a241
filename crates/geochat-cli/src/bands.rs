//! Band-selection workflow.
//!
//! Builds the index-computation menu from the static catalog, validates the
//! band inputs, issues the compute request, and hands results to the
//! renderer. The workflow is modal: it owns the terminal until the user
//! computes an index or closes it, so only one can exist at a time.
//! Re-presenting after a new upload replaces the previous one.

use dialoguer::{Input, Select};

use geochat_client::dto::IndexRequest;
use geochat_client::{ApiError, MappingApi};
use geochat_core::catalog::{self, IndexSpec, INDEX_CATALOG};
use geochat_core::session::{Flow, FlowTokens, Transcript};
use geochat_core::GeochatError;

use crate::notify::Notifier;
use crate::progress;
use crate::render::ResponseRenderer;

pub struct BandSelectionWorkflow<'a> {
    pub api: &'a dyn MappingApi,
    pub notify: &'a mut Notifier,
    pub renderer: &'a ResponseRenderer,
    pub transcript: &'a mut Transcript,
    pub tokens: &'a mut FlowTokens,
}

impl BandSelectionWorkflow<'_> {
    /// Present the workflow for `raster_path`. Returns when the user
    /// chooses Close; unsaved input is discarded.
    pub async fn present(&mut self, raster_path: &str, band_count: u32) -> anyhow::Result<()> {
        loop {
            let mut items: Vec<String> = INDEX_CATALOG
                .iter()
                .map(|spec| format!("{} ({})", spec.key, spec.label))
                .collect();
            items.push("Close".to_string());

            let choice = Select::new()
                .with_prompt(format!("Select bands for analysis (1-{band_count})"))
                .items(&items)
                .default(0)
                .interact()?;

            let Some(spec) = INDEX_CATALOG.get(choice) else {
                // Close
                return Ok(());
            };

            let raw = self.prompt_bands(spec, band_count)?;
            self.compute(spec, &raw, raster_path, band_count).await;
        }
    }

    /// One free-form input per required band role, in catalog order.
    fn prompt_bands(&self, spec: &IndexSpec, band_count: u32) -> anyhow::Result<Vec<String>> {
        let mut raw = Vec::with_capacity(spec.required_bands.len());
        for role in spec.required_bands {
            let value: String = Input::new()
                .with_prompt(format!("{} (1-{band_count})", role.label()))
                .allow_empty(true)
                .interact_text()?;
            raw.push(value);
        }
        Ok(raw)
    }

    /// Validate `raw` against the catalog entry and issue the compute
    /// request. Invalid input aborts with a toast; nothing is sent.
    pub async fn compute(
        &mut self,
        spec: &IndexSpec,
        raw: &[String],
        raster_path: &str,
        band_count: u32,
    ) {
        let bands = match catalog::parse_selection(spec, raw, band_count) {
            Ok(bands) => bands,
            Err(error @ GeochatError::BandOutOfRange { .. }) => {
                self.notify.error(error.to_string());
                return;
            }
            Err(_) => {
                self.notify.error("Please enter valid band numbers");
                return;
            }
        };

        let request = IndexRequest {
            raster_path: raster_path.to_string(),
            index_type: spec.key.to_string(),
            bands,
        };

        let token = self.tokens.issue(Flow::Index);
        let spinner = progress::create_spinner(&format!("Calculating {}...", spec.key));
        let result = self.api.calculate_index(&request).await;
        progress::finish_and_clear(&spinner);

        if !self.tokens.is_current(token) {
            tracing::debug!("discarding stale index response");
            return;
        }

        match result {
            Ok(response) => {
                if let Err(error) = self.renderer.render_analysis_result(
                    self.transcript,
                    &request.index_type,
                    &response.image_data,
                ) {
                    tracing::error!(error = %error, "could not render analysis result");
                }
            }
            Err(ApiError::Api { message }) => self.notify.error(message),
            Err(error) => self.notify.error(format!("Calculation failed: {error}")),
        }
    }
}
