//! Activation of server-supplied map markup.
//!
//! Injected markup arrives with inert script fragments: dropping markup
//! into an already-rendered document does not execute the scripts it
//! contains, so the interactive map never initializes. Activation extracts
//! every inline `<script>` fragment and re-attaches it at the document
//! tail, which re-runs the fragments in their original order when the
//! artifact is opened.
//!
//! The markup is control-plane trusted: it comes from the configured server
//! and is written out without sanitization.

const SCRIPT_OPEN: &str = "<script";
const SCRIPT_CLOSE: &str = "</script>";

/// Markup with its executable fragments re-attached, plus what was learned
/// while scanning them.
#[derive(Debug, Clone)]
pub struct ActivatedMarkup {
    /// The document to write out: original markup with inline scripts
    /// stripped, then re-attached at the tail.
    pub document: String,

    /// Inline script fragments in original order.
    pub scripts: Vec<String>,

    /// Layer names declared in the script fragments.
    pub layer_names: Vec<String>,
}

/// Activate `markup`: re-attach its inline scripts and scan them for layer
/// declarations.
pub fn activate(markup: &str) -> ActivatedMarkup {
    let (stripped, scripts) = extract_scripts(markup);
    let layer_names = scan_layer_names(&scripts);

    let mut document = stripped;
    for fragment in &scripts {
        document.push_str("\n<script>");
        document.push_str(fragment);
        document.push_str("</script>");
    }

    tracing::debug!(
        scripts = scripts.len(),
        layers = layer_names.len(),
        "activated map markup"
    );

    ActivatedMarkup {
        document,
        scripts,
        layer_names,
    }
}

/// Split `markup` into its non-script remainder and the inline script
/// fragments, in order. Scripts without inline text (e.g. `src=` loaders)
/// carry no executable fragment and are dropped, matching the web client's
/// text-only re-creation.
fn extract_scripts(markup: &str) -> (String, Vec<String>) {
    let lower = markup.to_ascii_lowercase();
    let mut remainder = String::with_capacity(markup.len());
    let mut scripts = Vec::new();
    let mut pos = 0;

    while let Some(rel) = lower[pos..].find(SCRIPT_OPEN) {
        let open_at = pos + rel;
        let Some(tag_end_rel) = lower[open_at..].find('>') else {
            break;
        };
        let body_start = open_at + tag_end_rel + 1;
        let Some(close_rel) = lower[body_start..].find(SCRIPT_CLOSE) else {
            break;
        };
        let body_end = body_start + close_rel;

        remainder.push_str(&markup[pos..open_at]);
        let fragment = &markup[body_start..body_end];
        if !fragment.trim().is_empty() {
            scripts.push(fragment.to_string());
        }
        pos = body_end + SCRIPT_CLOSE.len();
    }

    remainder.push_str(&markup[pos..]);
    (remainder, scripts)
}

/// Scan script fragments for layer `name` declarations, preserving first
/// occurrence order and dropping duplicates.
fn scan_layer_names(scripts: &[String]) -> Vec<String> {
    const PATTERNS: &[&str] = &["name: \"", "name: '", "\"name\": \""];

    let mut names: Vec<String> = Vec::new();
    for script in scripts {
        for pattern in PATTERNS {
            let quote = match pattern.chars().last() {
                Some(q) => q,
                None => continue,
            };
            let mut pos = 0;
            while let Some(rel) = script[pos..].find(pattern) {
                let start = pos + rel + pattern.len();
                let Some(end_rel) = script[start..].find(quote) else {
                    break;
                };
                let name = &script[start..start + end_rel];
                if !name.is_empty() && !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
                pos = start + end_rel + 1;
            }
        }
    }
    names
}
