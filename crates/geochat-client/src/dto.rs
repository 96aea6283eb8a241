//! Wire DTOs for the mapping service endpoints.

pub mod request;
pub mod response;

pub use request::{IndexRequest, QueryRequest};
pub use response::{
    ColumnStatsDto, ErrorBody, IndexResponse, QueryResponse, StatBlockDto, StatisticsDto,
    UploadResponse,
};
