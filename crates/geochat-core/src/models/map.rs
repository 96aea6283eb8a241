use serde_json::json;
use std::path::PathBuf;

/// Name of the global slot a rendered map installs itself under.
pub const MAP_GLOBAL_SLOT: &str = "myMap";

/// Layer name the color-scheme control targets.
pub const CHOROPLETH_LAYER: &str = "Choropleth";

/// One named layer of a rendered map.
///
/// Style fields start unset; the style controller fills them in. Unset
/// fields leave the map library's own defaults untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLayer {
    pub name: String,
    pub fill_color: Option<String>,
    pub fill_opacity: Option<f64>,
}

impl MapLayer {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fill_color: None,
            fill_opacity: None,
        }
    }
}

/// The currently rendered interactive map: the artifact written to disk
/// plus the named layers discovered in its markup.
#[derive(Debug, Clone)]
pub struct MapInstance {
    /// Where the activated document was written.
    pub artifact: PathBuf,

    /// The activated document, without any style patch.
    pub document: String,

    /// Layers discovered in the markup's script fragments.
    pub layers: Vec<MapLayer>,
}

impl MapInstance {
    pub fn new(artifact: PathBuf, document: String, layer_names: Vec<String>) -> Self {
        Self {
            artifact,
            document,
            layers: layer_names.into_iter().map(MapLayer::named).collect(),
        }
    }

    /// Mutable view of every layer whose name equals `name`.
    pub fn layers_named_mut<'a>(
        &'a mut self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a mut MapLayer> + 'a {
        self.layers.iter_mut().filter(move |layer| layer.name == name)
    }

    /// Script fragment that re-applies the stored layer styles, or `None`
    /// when no style has been set. The fragment targets the map through its
    /// global slot, the same handle the live controls use.
    pub fn style_patch(&self) -> Option<String> {
        let mut styles = serde_json::Map::new();
        for layer in &self.layers {
            let mut style = serde_json::Map::new();
            if let Some(color) = &layer.fill_color {
                style.insert("fillColor".to_string(), json!(color));
            }
            if let Some(opacity) = layer.fill_opacity {
                style.insert("fillOpacity".to_string(), json!(opacity));
            }
            if !style.is_empty() {
                styles.insert(layer.name.clone(), serde_json::Value::Object(style));
            }
        }
        if styles.is_empty() {
            return None;
        }

        Some(format!(
            "(function () {{\n  var styles = {styles};\n  var map = window.{slot};\n  if (!map) {{ return; }}\n  Object.values(map._layers).forEach(function (layer) {{\n    var style = styles[layer.name];\n    if (style && layer.setStyle) {{ layer.setStyle(style); }}\n  }});\n}})();",
            styles = serde_json::Value::Object(styles),
            slot = MAP_GLOBAL_SLOT,
        ))
    }

    /// Full artifact document including the current style patch.
    pub fn patched_document(&self) -> String {
        match self.style_patch() {
            Some(patch) => format!("{}\n<script>{}</script>", self.document, patch),
            None => self.document.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance_with_layers(names: &[&str]) -> MapInstance {
        MapInstance::new(
            PathBuf::from("/tmp/map.html"),
            "<div id=\"map\"></div>".to_string(),
            names.iter().map(|n| n.to_string()).collect(),
        )
    }

    #[test]
    fn unstyled_instance_has_no_patch() {
        let instance = instance_with_layers(&[CHOROPLETH_LAYER]);
        assert!(instance.style_patch().is_none());
        assert_eq!(instance.patched_document(), instance.document);
    }

    #[test]
    fn style_patch_carries_mutated_layers_only() {
        let mut instance = instance_with_layers(&[CHOROPLETH_LAYER, "Heatmap"]);
        for layer in instance.layers_named_mut(CHOROPLETH_LAYER) {
            layer.fill_color = Some("Blues".to_string());
        }

        let patch = instance.style_patch().unwrap();
        assert!(patch.contains("\"Choropleth\":{\"fillColor\":\"Blues\"}"));
        assert!(!patch.contains("Heatmap"));
        assert!(patch.contains(MAP_GLOBAL_SLOT));
    }

    #[test]
    fn patched_document_appends_script() {
        let mut instance = instance_with_layers(&["Boundaries"]);
        for layer in instance.layers_named_mut("Boundaries") {
            layer.fill_opacity = Some(0.4);
        }

        let document = instance.patched_document();
        assert!(document.starts_with(&instance.document));
        assert!(document.contains("fillOpacity"));
        assert!(document.trim_end().ends_with("</script>"));
    }
}
