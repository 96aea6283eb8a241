//! Terminal response renderer.
//!
//! Maps reply payloads to transcript entries and terminal output. Interactive
//! maps and static images become HTML artifacts on disk; rendering a map also
//! installs it as the current instance in the map registry. Output always
//! ends with the newest entry, so the bottom of the terminal is the bottom of
//! the transcript.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use console::style;
use uuid::Uuid;

use geochat_core::markup::ActivatedMarkup;
use geochat_core::models::{AiReply, ChatMessage, MapInstance};
use geochat_core::ports::MapRegistry;
use geochat_core::render::{render_analysis, render_reply, RenderBlock, StatSection};
use geochat_core::session::Transcript;

pub struct ResponseRenderer {
    artifacts_dir: PathBuf,
    registry: Arc<dyn MapRegistry>,
}

impl ResponseRenderer {
    pub fn new(artifacts_dir: PathBuf, registry: Arc<dyn MapRegistry>) -> Self {
        Self {
            artifacts_dir,
            registry,
        }
    }

    /// Render a reply: append one AI transcript entry and present its
    /// blocks in order.
    pub fn render(&self, transcript: &mut Transcript, reply: &AiReply) -> Result<()> {
        let blocks = render_reply(reply);
        transcript.push(ChatMessage::ai(reply.text.clone().unwrap_or_default()));
        self.present(&blocks)
    }

    /// Render a band-computation result entry.
    pub fn render_analysis_result(
        &self,
        transcript: &mut Transcript,
        index_type: &str,
        image_data: &str,
    ) -> Result<()> {
        let blocks = render_analysis(index_type, image_data);
        transcript.push(ChatMessage::ai(format!("{index_type} calculation completed")));
        self.present(&blocks)
    }

    fn present(&self, blocks: &[RenderBlock]) -> Result<()> {
        for block in blocks {
            match block {
                RenderBlock::Text(text) => {
                    println!("{} {}", style("ai>").cyan().bold(), text);
                }
                RenderBlock::Map(markup) => {
                    let path = self.write_map_artifact(markup)?;
                    println!(
                        "{} interactive map: {}",
                        style("map>").green().bold(),
                        path.display()
                    );
                }
                RenderBlock::MapImage(url) => {
                    let path = self.write_image_artifact(url)?;
                    println!(
                        "{} map image: {}",
                        style("map>").green().bold(),
                        path.display()
                    );
                }
                RenderBlock::Statistics(sections) => self.present_statistics(sections),
            }
        }
        Ok(())
    }

    fn present_statistics(&self, sections: &[StatSection]) {
        println!("{}", style("Statistics").bold().underlined());
        for section in sections {
            if let Some(column) = &section.column {
                println!("  {}", style(column).bold());
            }
            for line in &section.lines {
                println!("    {line}");
            }
        }
    }

    /// Write the activated map document and install it as the current map
    /// instance.
    fn write_map_artifact(&self, markup: &ActivatedMarkup) -> Result<PathBuf> {
        let path = self.artifact_path("map", "html")?;
        fs::write(&path, &markup.document)
            .with_context(|| format!("Failed to write map artifact: {}", path.display()))?;

        self.registry.install(MapInstance::new(
            path.clone(),
            markup.document.clone(),
            markup.layer_names.clone(),
        ));
        Ok(path)
    }

    /// Wrap a static image reference in a minimal HTML artifact. The value
    /// is kept opaque (usually a data URL), never decoded.
    fn write_image_artifact(&self, url: &str) -> Result<PathBuf> {
        let path = self.artifact_path("image", "html")?;
        let document = format!("<img src=\"{url}\" class=\"map-image\">");
        fs::write(&path, document)
            .with_context(|| format!("Failed to write image artifact: {}", path.display()))?;
        Ok(path)
    }

    fn artifact_path(&self, prefix: &str, ext: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.artifacts_dir).with_context(|| {
            format!(
                "Failed to create artifacts directory: {}",
                self.artifacts_dir.display()
            )
        })?;
        Ok(self
            .artifacts_dir
            .join(format!("{prefix}-{}.{ext}", Uuid::new_v4())))
    }
}
