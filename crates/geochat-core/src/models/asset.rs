use serde::{Deserialize, Serialize};

/// Kind of an uploaded geospatial asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Multi-band imagery; drives the band-selection workflow.
    Raster,
    /// Vector or tabular data; carries a column list.
    Tabular,
}

/// An uploaded geospatial asset, as reported by the upload endpoint.
///
/// The session holds at most one asset; a later upload overwrites it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedAsset {
    /// Server-side path of the stored file. The server omits this for some
    /// tabular uploads.
    pub filepath: Option<String>,

    /// Asset kind, branching the post-upload flow.
    pub kind: AssetKind,

    /// Number of bands (raster assets; zero otherwise).
    pub band_count: u32,

    /// Column names in server order (tabular assets; empty otherwise).
    pub columns: Vec<String>,
}

impl UploadedAsset {
    /// A raster asset with the given band count.
    pub fn raster(filepath: impl Into<String>, band_count: u32) -> Self {
        Self {
            filepath: Some(filepath.into()),
            kind: AssetKind::Raster,
            band_count,
            columns: Vec::new(),
        }
    }

    /// A tabular asset with the given column list.
    pub fn tabular(filepath: Option<String>, columns: Vec<String>) -> Self {
        Self {
            filepath,
            kind: AssetKind::Tabular,
            band_count: 0,
            columns,
        }
    }
}

/// Band count assumed when the upload endpoint does not report one.
pub const DEFAULT_BAND_COUNT: u32 = 4;

/// Band count to use for the selection workflow. The upload endpoint may
/// omit `band_count` or report zero; both fall back to [`DEFAULT_BAND_COUNT`].
pub fn effective_band_count(reported: Option<u32>) -> u32 {
    match reported {
        Some(n) if n > 0 => n,
        _ => DEFAULT_BAND_COUNT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reported_band_count_is_used() {
        assert_eq!(effective_band_count(Some(8)), 8);
        assert_eq!(effective_band_count(Some(1)), 1);
    }

    #[test]
    fn missing_or_zero_band_count_falls_back_to_four() {
        assert_eq!(effective_band_count(None), 4);
        assert_eq!(effective_band_count(Some(0)), 4);
    }
}
