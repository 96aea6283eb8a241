//! Error types for geochat

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeochatError {
    // Band selection errors
    #[error("Please enter valid band numbers")]
    InvalidBandInput,

    #[error("Band {band} is out of range for this raster (valid: 1-{max})")]
    BandOutOfRange { band: i64, max: u32 },

    #[error("Unknown spectral index: {name}")]
    UnknownIndex { name: String },

    // Session errors
    #[error("Session value for '{key}' is not valid JSON: {reason}")]
    SessionValue { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, GeochatError>;
