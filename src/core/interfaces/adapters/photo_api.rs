use async_trait::async_trait;
use thiserror::Error;

use crate::core::models::{PhotoRecord, SearchQuery, UploadRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoApiError {
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    #[error("Upload failed with status {status}")]
    UploadRejected { status: u16, body: String },
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("{0}")]
    Transport(String),
}

#[async_trait]
pub trait PhotoApi: Send + Sync {
    async fn search_photos(&self, query: &SearchQuery) -> Result<Vec<PhotoRecord>, PhotoApiError>;

    async fn upload_photo(&self, request: &UploadRequest) -> Result<(), PhotoApiError>;
}
