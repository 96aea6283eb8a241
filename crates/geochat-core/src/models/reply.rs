use serde::{Deserialize, Serialize};

/// Summary statistics for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatBlock {
    pub count: f64,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Statistics payload of a column: either a free-form note (e.g. for
/// non-numeric columns) or a numeric summary.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnStats {
    Text(String),
    Summary(StatBlock),
}

/// Statistics payload of a reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Statistics {
    /// Free-form note rendered verbatim.
    Text(String),
    /// Per-column statistics, in column order.
    PerColumn(Vec<(String, ColumnStats)>),
}

/// A reply from the query endpoint.
///
/// All fields are optional. At most one of `map_markup` / `map_image_url`
/// is rendered; markup wins when both are present.
#[derive(Debug, Clone, Default)]
pub struct AiReply {
    pub text: Option<String>,
    pub map_markup: Option<String>,
    pub map_image_url: Option<String>,
    pub statistics: Option<Statistics>,
}
