//! Geochat Client - Wire contract and HTTP adapter
//!
//! This crate defines the wire DTOs for the mapping service, the
//! `MappingApi` port, and the reqwest adapter implementing it.

pub mod dto;
pub mod error;
pub mod http;
pub mod ports;

pub use error::{ApiError, ApiResult};
pub use http::HttpMappingApi;
pub use ports::MappingApi;
