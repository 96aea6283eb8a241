use serde::Deserialize;
use std::collections::BTreeMap;

use geochat_core::models::{
    effective_band_count, AiReply, AssetKind, ColumnStats, StatBlock, Statistics, UploadedAsset,
};

/// Success body of `POST /api/upload-file`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub message: String,

    /// Server-side path of the stored file; omitted for some tabular
    /// uploads.
    #[serde(default)]
    pub filepath: Option<String>,

    pub file_type: String,

    #[serde(default)]
    pub band_count: Option<u32>,

    #[serde(default)]
    pub columns: Option<Vec<String>>,
}

impl UploadResponse {
    pub fn is_raster(&self) -> bool {
        self.file_type == "raster"
    }

    /// Domain asset for this response. Any non-raster `file_type` is
    /// treated as tabular.
    pub fn into_asset(self) -> UploadedAsset {
        if self.is_raster() {
            UploadedAsset {
                filepath: self.filepath,
                kind: AssetKind::Raster,
                band_count: effective_band_count(self.band_count),
                columns: Vec::new(),
            }
        } else {
            UploadedAsset::tabular(self.filepath, self.columns.unwrap_or_default())
        }
    }
}

/// Success body of `POST /api/calculate-index`.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexResponse {
    #[serde(default)]
    pub index_type: Option<String>,

    /// Rendered visualization, typically a data URL.
    pub image_data: String,
}

/// Success body of `POST /api/process-query`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub ai_response: Option<String>,

    #[serde(default)]
    pub map_html: Option<String>,

    #[serde(default)]
    pub map_image: Option<String>,

    #[serde(default)]
    pub statistics: Option<StatisticsDto>,
}

impl QueryResponse {
    /// Convert into the domain reply model.
    pub fn into_reply(self) -> AiReply {
        AiReply {
            text: self.ai_response,
            map_markup: self.map_html,
            map_image_url: self.map_image,
            statistics: self.statistics.map(StatisticsDto::into_statistics),
        }
    }
}

/// Statistics payload: free-form text or per-column entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StatisticsDto {
    Text(String),
    PerColumn(BTreeMap<String, ColumnStatsDto>),
}

impl StatisticsDto {
    fn into_statistics(self) -> Statistics {
        match self {
            StatisticsDto::Text(text) => Statistics::Text(text),
            StatisticsDto::PerColumn(columns) => Statistics::PerColumn(
                columns
                    .into_iter()
                    .map(|(name, stats)| (name, stats.into_column_stats()))
                    .collect(),
            ),
        }
    }
}

/// One column's statistics: a numeric summary or an explanatory string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColumnStatsDto {
    Summary(StatBlockDto),
    Text(String),
}

impl ColumnStatsDto {
    fn into_column_stats(self) -> ColumnStats {
        match self {
            ColumnStatsDto::Summary(block) => ColumnStats::Summary(block.into()),
            ColumnStatsDto::Text(text) => ColumnStats::Text(text),
        }
    }
}

/// Numeric summary in the describe-output shape; quantile keys and other
/// extras are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StatBlockDto {
    pub count: f64,

    #[serde(default)]
    pub mean: Option<f64>,

    #[serde(default)]
    pub std: Option<f64>,

    #[serde(default)]
    pub min: Option<f64>,

    #[serde(default)]
    pub max: Option<f64>,
}

impl From<StatBlockDto> for StatBlock {
    fn from(dto: StatBlockDto) -> Self {
        Self {
            count: dto.count,
            mean: dto.mean,
            std: dto.std,
            min: dto.min,
            max: dto.max,
        }
    }
}

/// Failure body shared by all endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
