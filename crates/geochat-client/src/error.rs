//! Client-side error type for the mapping service.

use thiserror::Error;

/// Errors surfaced by the mapping service client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status. Carries the body's
    /// `error` field when present, otherwise a per-operation fallback.
    #[error("{message}")]
    Api { message: String },

    /// The request never completed.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
