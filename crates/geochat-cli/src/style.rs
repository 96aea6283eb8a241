//! Map style controller.
//!
//! Best-effort, idempotent mutations of the currently rendered map's
//! layers. A missing map instance is logged and ignored; nothing here
//! propagates errors to the caller.

use std::fs;
use std::sync::Arc;

use geochat_core::models::CHOROPLETH_LAYER;
use geochat_core::ports::MapRegistry;

pub struct MapStyleController {
    registry: Arc<dyn MapRegistry>,
}

impl MapStyleController {
    pub fn new(registry: Arc<dyn MapRegistry>) -> Self {
        Self { registry }
    }

    /// Retarget the choropleth layer's fill color and request a redraw.
    ///
    /// `column_name` identifies the control that changed; the layer lookup
    /// always uses the fixed choropleth sentinel.
    pub fn set_color_scheme(&self, column_name: &str, selected_scheme: &str) {
        let Some(instance) = self.registry.current() else {
            tracing::error!(
                column = column_name,
                "map instance is not available in set_color_scheme"
            );
            return;
        };

        let mut instance = instance.lock().unwrap();
        for layer in instance.layers_named_mut(CHOROPLETH_LAYER) {
            layer.fill_color = Some(selected_scheme.to_string());
        }

        // Redraw: only the color path rewrites the artifact.
        if let Err(error) = fs::write(&instance.artifact, instance.patched_document()) {
            tracing::error!(error = %error, "could not redraw map artifact");
        }
    }

    /// Set fill opacity on every layer named `layer_name`. The value is
    /// parsed as a float; anything else is logged and ignored.
    pub fn set_opacity(&self, layer_name: &str, value: &str) {
        let Some(instance) = self.registry.current() else {
            tracing::error!(
                layer = layer_name,
                "map instance is not available in set_opacity"
            );
            return;
        };

        let opacity: f64 = match value.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::error!(value, "opacity is not a number");
                return;
            }
        };

        let mut instance = instance.lock().unwrap();
        for layer in instance.layers_named_mut(layer_name) {
            layer.fill_opacity = Some(opacity);
        }
    }
}
