//! Mapping from reply payloads to ordered render blocks.
//!
//! The terminal front-end decides how blocks look; this module decides what
//! they contain and in which order they appear.

use crate::markup::{activate, ActivatedMarkup};
use crate::models::{AiReply, ColumnStats, StatBlock, Statistics};

/// One renderable block of an AI transcript entry, in presentation order.
#[derive(Debug, Clone)]
pub enum RenderBlock {
    /// Plain text, never interpreted as markup.
    Text(String),
    /// An activated interactive map document.
    Map(ActivatedMarkup),
    /// A static map image reference.
    MapImage(String),
    /// Statistics sections, one per column (or a single free-form section).
    Statistics(Vec<StatSection>),
}

/// One statistics sub-block.
#[derive(Debug, Clone, PartialEq)]
pub struct StatSection {
    /// Column heading; `None` for a free-form statistics note.
    pub column: Option<String>,
    pub lines: Vec<String>,
}

/// Map a reply to its ordered blocks: text first, then the map (markup wins
/// over a static image), then statistics.
pub fn render_reply(reply: &AiReply) -> Vec<RenderBlock> {
    let mut blocks = Vec::new();

    if let Some(text) = &reply.text {
        blocks.push(RenderBlock::Text(text.clone()));
    }

    if let Some(markup) = &reply.map_markup {
        blocks.push(RenderBlock::Map(activate(markup)));
    } else if let Some(url) = &reply.map_image_url {
        blocks.push(RenderBlock::MapImage(url.clone()));
    }

    if let Some(statistics) = &reply.statistics {
        blocks.push(RenderBlock::Statistics(render_statistics(statistics)));
    }

    blocks
}

/// Blocks for a band-computation result: the fixed completion line plus the
/// returned image.
pub fn render_analysis(index_type: &str, image_data: &str) -> Vec<RenderBlock> {
    vec![
        RenderBlock::Text(format!("{index_type} calculation completed")),
        RenderBlock::MapImage(image_data.to_string()),
    ]
}

fn render_statistics(statistics: &Statistics) -> Vec<StatSection> {
    match statistics {
        Statistics::Text(text) => vec![StatSection {
            column: None,
            lines: vec![text.clone()],
        }],
        Statistics::PerColumn(columns) => columns
            .iter()
            .map(|(column, stats)| {
                let lines = match stats {
                    ColumnStats::Text(text) => vec![text.clone()],
                    ColumnStats::Summary(block) => stat_block_lines(block),
                };
                StatSection {
                    column: Some(column.clone()),
                    lines,
                }
            })
            .collect(),
    }
}

/// Fixed-order summary lines. Mean and Std round to two decimals and fall
/// back to "N/A" when the server omits them.
pub fn stat_block_lines(block: &StatBlock) -> Vec<String> {
    vec![
        format!("Count: {}", format_number(block.count)),
        format!("Mean: {}", format_rounded(block.mean)),
        format!("Std: {}", format_rounded(block.std)),
        format!("Min: {}", format_optional(block.min)),
        format!("Max: {}", format_optional(block.max)),
    ]
}

fn format_rounded(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "N/A".to_string(),
    }
}

fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => format_number(v),
        None => "N/A".to_string(),
    }
}

/// Print whole numbers without a trailing ".0"; keep everything else as-is.
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elevation_block() -> StatBlock {
        StatBlock {
            count: 10.0,
            mean: Some(5.5),
            std: Some(1.234),
            min: Some(1.0),
            max: Some(9.0),
        }
    }

    #[test]
    fn stat_lines_round_mean_and_std_to_two_decimals() {
        let lines = stat_block_lines(&elevation_block());
        assert_eq!(
            lines,
            vec!["Count: 10", "Mean: 5.50", "Std: 1.23", "Min: 1", "Max: 9"]
        );
    }

    #[test]
    fn missing_mean_and_std_render_as_na() {
        let block = StatBlock {
            count: 10.0,
            mean: None,
            std: None,
            min: None,
            max: None,
        };
        let lines = stat_block_lines(&block);
        assert_eq!(
            lines,
            vec!["Count: 10", "Mean: N/A", "Std: N/A", "Min: N/A", "Max: N/A"]
        );
    }

    #[test]
    fn markup_wins_over_static_image() {
        let reply = AiReply {
            map_markup: Some("<div id=\"map\"></div>".to_string()),
            map_image_url: Some("data:image/png;base64,abc".to_string()),
            ..Default::default()
        };
        let blocks = render_reply(&reply);

        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], RenderBlock::Map(_)));
    }

    #[test]
    fn image_renders_when_markup_is_absent() {
        let reply = AiReply {
            map_image_url: Some("data:image/png;base64,abc".to_string()),
            ..Default::default()
        };
        let blocks = render_reply(&reply);

        assert!(matches!(&blocks[0], RenderBlock::MapImage(url) if url.contains("base64")));
    }

    #[test]
    fn text_and_verbatim_statistics_without_map() {
        let reply = AiReply {
            text: Some("3 flood zones found".to_string()),
            statistics: Some(Statistics::Text("No numeric columns".to_string())),
            ..Default::default()
        };
        let blocks = render_reply(&reply);

        assert_eq!(blocks.len(), 2);
        assert!(matches!(&blocks[0], RenderBlock::Text(t) if t == "3 flood zones found"));
        let RenderBlock::Statistics(sections) = &blocks[1] else {
            panic!("expected statistics block");
        };
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].column, None);
        assert_eq!(sections[0].lines, vec!["No numeric columns"]);
    }

    #[test]
    fn per_column_statistics_mix_text_and_summaries() {
        let reply = AiReply {
            statistics: Some(Statistics::PerColumn(vec![
                ("elevation".to_string(), ColumnStats::Summary(elevation_block())),
                (
                    "name".to_string(),
                    ColumnStats::Text(
                        "Statistics not available for non-numeric column: name".to_string(),
                    ),
                ),
            ])),
            ..Default::default()
        };

        let RenderBlock::Statistics(sections) = &render_reply(&reply)[0] else {
            panic!("expected statistics block");
        };
        assert_eq!(sections[0].column.as_deref(), Some("elevation"));
        assert_eq!(sections[0].lines[1], "Mean: 5.50");
        assert_eq!(sections[1].column.as_deref(), Some("name"));
        assert_eq!(sections[1].lines.len(), 1);
    }

    #[test]
    fn analysis_result_has_completion_line_and_image() {
        let blocks = render_analysis("NDVI", "data:image/png;base64,xyz");

        assert!(matches!(&blocks[0], RenderBlock::Text(t) if t == "NDVI calculation completed"));
        assert!(matches!(&blocks[1], RenderBlock::MapImage(url) if url.ends_with("xyz")));
    }

    #[test]
    fn empty_reply_renders_no_blocks() {
        assert!(render_reply(&AiReply::default()).is_empty());
    }
}
