//! Test doubles shared by the controller tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use geochat_client::dto::{IndexRequest, IndexResponse, QueryResponse, UploadResponse};
use geochat_client::{ApiError, ApiResult, MappingApi};

/// Scripted mapping service double that records what it was asked.
#[derive(Default)]
pub struct MockApi {
    upload: Mutex<Option<Result<UploadResponse, String>>>,
    index: Mutex<Option<Result<IndexResponse, String>>>,
    query: Mutex<Option<Result<QueryResponse, String>>>,

    pub calls: AtomicUsize,
    pub last_index_request: Mutex<Option<IndexRequest>>,
    pub last_query: Mutex<Option<String>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_upload(response: UploadResponse) -> Self {
        let api = Self::new();
        *api.upload.lock().unwrap() = Some(Ok(response));
        api
    }

    pub fn with_upload_error(message: &str) -> Self {
        let api = Self::new();
        *api.upload.lock().unwrap() = Some(Err(message.to_string()));
        api
    }

    pub fn with_index(response: IndexResponse) -> Self {
        let api = Self::new();
        *api.index.lock().unwrap() = Some(Ok(response));
        api
    }

    pub fn with_index_error(message: &str) -> Self {
        let api = Self::new();
        *api.index.lock().unwrap() = Some(Err(message.to_string()));
        api
    }

    pub fn with_query(response: QueryResponse) -> Self {
        let api = Self::new();
        *api.query.lock().unwrap() = Some(Ok(response));
        api
    }

    pub fn with_query_error(message: &str) -> Self {
        let api = Self::new();
        *api.query.lock().unwrap() = Some(Err(message.to_string()));
        api
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn take<T>(slot: &Mutex<Option<Result<T, String>>>, what: &str) -> ApiResult<T> {
        match slot.lock().unwrap().take() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(ApiError::api(message)),
            None => Err(ApiError::api(format!("unexpected {what} call"))),
        }
    }
}

#[async_trait]
impl MappingApi for MockApi {
    async fn upload_file(&self, _filename: &str, _bytes: Vec<u8>) -> ApiResult<UploadResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Self::take(&self.upload, "upload")
    }

    async fn calculate_index(&self, request: &IndexRequest) -> ApiResult<IndexResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_index_request.lock().unwrap() = Some(request.clone());
        Self::take(&self.index, "calculate-index")
    }

    async fn process_query(&self, message: &str) -> ApiResult<QueryResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(message.to_string());
        Self::take(&self.query, "process-query")
    }
}
