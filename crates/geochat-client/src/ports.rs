//! Mapping service port definitions

use async_trait::async_trait;

use crate::dto::{IndexRequest, IndexResponse, QueryResponse, UploadResponse};
use crate::error::ApiResult;

/// Port for the mapping service the session talks to.
///
/// The server is an opaque collaborator; this port carries exactly the
/// three calls the session issues. No call is retried or cancelled once
/// issued.
#[async_trait]
pub trait MappingApi: Send + Sync {
    /// `POST /api/upload-file` with the raw file bytes.
    async fn upload_file(&self, filename: &str, bytes: Vec<u8>) -> ApiResult<UploadResponse>;

    /// `POST /api/calculate-index`.
    async fn calculate_index(&self, request: &IndexRequest) -> ApiResult<IndexResponse>;

    /// `POST /api/process-query` with the raw message text.
    async fn process_query(&self, message: &str) -> ApiResult<QueryResponse>;
}
