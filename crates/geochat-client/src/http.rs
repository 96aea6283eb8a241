//! HTTP adapter for the mapping service.

use async_trait::async_trait;
use reqwest::multipart;

use crate::dto::{
    ErrorBody, IndexRequest, IndexResponse, QueryRequest, QueryResponse, UploadResponse,
};
use crate::error::{ApiError, ApiResult};
use crate::ports::MappingApi;

/// Mapping service client over HTTP.
pub struct HttpMappingApi {
    /// Base URL of the mapping service (e.g. "http://localhost:5000").
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpMappingApi {
    /// Create a new client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Create with the default local development URL.
    pub fn localhost() -> Self {
        Self::new("http://localhost:5000")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body, or map a non-success status to the body's
    /// `error` field, falling back to `fallback` when the body carries
    /// none.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        fallback: &str,
    ) -> ApiResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => fallback.to_string(),
        };
        tracing::debug!(%status, %message, "mapping service returned an error");
        Err(ApiError::api(message))
    }
}

#[async_trait]
impl MappingApi for HttpMappingApi {
    async fn upload_file(&self, filename: &str, bytes: Vec<u8>) -> ApiResult<UploadResponse> {
        let part = multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint("/api/upload-file"))
            .multipart(form)
            .send()
            .await?;

        Self::decode(response, "Upload failed").await
    }

    async fn calculate_index(&self, request: &IndexRequest) -> ApiResult<IndexResponse> {
        let response = self
            .client
            .post(self.endpoint("/api/calculate-index"))
            .json(request)
            .send()
            .await?;

        Self::decode(response, "Index calculation failed").await
    }

    async fn process_query(&self, message: &str) -> ApiResult<QueryResponse> {
        let request = QueryRequest {
            message: message.to_string(),
        };
        let response = self
            .client
            .post(self.endpoint("/api/process-query"))
            .json(&request)
            .send()
            .await?;

        Self::decode(response, "Request failed").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = HttpMappingApi::new("http://localhost:5000/");
        assert_eq!(
            api.endpoint("/api/process-query"),
            "http://localhost:5000/api/process-query"
        );
    }

    #[test]
    fn localhost_points_at_the_default_port() {
        let api = HttpMappingApi::localhost();
        assert_eq!(api.endpoint("/api/upload-file"), "http://localhost:5000/api/upload-file");
    }
}
