//! Declarative catalog of spectral indices.
//!
//! Each entry names the band roles a computation needs, in the exact order
//! the compute endpoint expects them. Adding an index is a catalog edit,
//! not new workflow code.

use crate::error::{GeochatError, Result};

/// A band role a spectral index reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandRole {
    Nir,
    Red,
    Green,
    Swir,
}

impl BandRole {
    /// Prompt label for this role.
    pub fn label(self) -> &'static str {
        match self {
            BandRole::Nir => "NIR Band",
            BandRole::Red => "Red Band",
            BandRole::Green => "Green Band",
            BandRole::Swir => "SWIR Band",
        }
    }
}

/// One computable spectral index.
#[derive(Debug, Clone, Copy)]
pub struct IndexSpec {
    /// Key sent to the compute endpoint as `index_type`.
    pub key: &'static str,

    /// Human-readable name shown in the selection menu.
    pub label: &'static str,

    /// Band roles in the order the endpoint expects them. Fixed contract,
    /// not user-configurable.
    pub required_bands: &'static [BandRole],
}

/// The built-in index catalog.
pub const INDEX_CATALOG: &[IndexSpec] = &[
    IndexSpec {
        key: "NDVI",
        label: "Normalized Difference Vegetation Index",
        required_bands: &[BandRole::Nir, BandRole::Red],
    },
    IndexSpec {
        key: "NDWI",
        label: "Normalized Difference Water Index",
        required_bands: &[BandRole::Green, BandRole::Nir],
    },
    IndexSpec {
        key: "SAWI",
        label: "Soil Adjusted Water Index",
        required_bands: &[BandRole::Nir, BandRole::Swir],
    },
];

/// Look up a catalog entry by key.
pub fn find_index(key: &str) -> Result<&'static IndexSpec> {
    INDEX_CATALOG
        .iter()
        .find(|spec| spec.key == key)
        .ok_or_else(|| GeochatError::UnknownIndex { name: key.to_string() })
}

/// Parse a single band input and check it against the raster's band count.
pub fn parse_band(raw: &str, band_count: u32) -> Result<u32> {
    let band: i64 = raw.trim().parse().map_err(|_| GeochatError::InvalidBandInput)?;
    if band < 1 || band > i64::from(band_count) {
        return Err(GeochatError::BandOutOfRange { band, max: band_count });
    }
    Ok(band as u32)
}

/// Parse one raw input per required band role, preserving catalog order.
///
/// Any non-numeric input rejects the whole selection; nothing is sent to
/// the server in that case.
pub fn parse_selection(spec: &IndexSpec, raw: &[String], band_count: u32) -> Result<Vec<u32>> {
    if raw.len() != spec.required_bands.len() {
        return Err(GeochatError::InvalidBandInput);
    }
    raw.iter().map(|input| parse_band(input, band_count)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_band_order_is_fixed() {
        let ndvi = find_index("NDVI").unwrap();
        assert_eq!(ndvi.required_bands, &[BandRole::Nir, BandRole::Red]);

        let ndwi = find_index("NDWI").unwrap();
        assert_eq!(ndwi.required_bands, &[BandRole::Green, BandRole::Nir]);

        let sawi = find_index("SAWI").unwrap();
        assert_eq!(sawi.required_bands, &[BandRole::Nir, BandRole::Swir]);
    }

    #[test]
    fn unknown_index_is_rejected() {
        assert!(matches!(
            find_index("EVI"),
            Err(GeochatError::UnknownIndex { .. })
        ));
    }

    #[test]
    fn bands_are_bounded_by_band_count() {
        assert_eq!(parse_band("1", 8).unwrap(), 1);
        assert_eq!(parse_band("8", 8).unwrap(), 8);
        assert!(matches!(
            parse_band("9", 8),
            Err(GeochatError::BandOutOfRange { band: 9, max: 8 })
        ));
        assert!(matches!(
            parse_band("0", 8),
            Err(GeochatError::BandOutOfRange { band: 0, max: 8 })
        ));
    }

    #[test]
    fn non_numeric_band_input_is_rejected() {
        assert!(matches!(
            parse_band("abc", 4),
            Err(GeochatError::InvalidBandInput)
        ));
        assert!(matches!(
            parse_band("", 4),
            Err(GeochatError::InvalidBandInput)
        ));
        assert!(matches!(
            parse_band("2.5", 4),
            Err(GeochatError::InvalidBandInput)
        ));
    }

    #[test]
    fn selection_parses_in_catalog_order() {
        let ndvi = find_index("NDVI").unwrap();
        let bands =
            parse_selection(ndvi, &["5".to_string(), "4".to_string()], 8).unwrap();
        assert_eq!(bands, vec![5, 4]);
    }

    #[test]
    fn selection_rejects_any_invalid_input() {
        let ndvi = find_index("NDVI").unwrap();
        assert!(parse_selection(ndvi, &["5".to_string(), "x".to_string()], 8).is_err());
        assert!(parse_selection(ndvi, &["5".to_string()], 8).is_err());
    }
}
