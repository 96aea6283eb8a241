use serde::Serialize;

/// Body of `POST /api/calculate-index`.
///
/// `bands` is ordered to match the index's required band roles; the order
/// is part of the wire contract.
#[derive(Debug, Clone, Serialize)]
pub struct IndexRequest {
    pub raster_path: String,
    pub index_type: String,
    pub bands: Vec<u32>,
}

/// Body of `POST /api/process-query`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub message: String,
}
