use async_trait::async_trait;
use std::sync::Arc;

use crate::core::interfaces::adapters::{PhotoApi, PhotoApiError};
use crate::core::models::{ClientConfig, PhotoRecord, SearchQuery, SearchResponse, UploadRequest};
use crate::global_constants;

/// Talks to the API Gateway front of the search index and the S3 upload proxy.
pub struct ApiGatewayPhotoService {
    http_client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl ApiGatewayPhotoService {
    pub fn new(config: Arc<ClientConfig>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}?q={}",
            self.config.endpoint_url(global_constants::SEARCH_PATH),
            query.percent_encoded()
        )
    }
}

fn transport_error(error: reqwest::Error) -> PhotoApiError {
    PhotoApiError::Transport(error.to_string())
}

#[async_trait]
impl PhotoApi for ApiGatewayPhotoService {
    async fn search_photos(&self, query: &SearchQuery) -> Result<Vec<PhotoRecord>, PhotoApiError> {
        let search_url = self.search_url(query);
        log::debug!("[API] GET {}", search_url);

        let response = self
            .http_client
            .get(&search_url)
            .header(global_constants::HEADER_API_KEY, &self.config.api_key)
            .header(
                reqwest::header::CONTENT_TYPE,
                global_constants::SEARCH_CONTENT_TYPE,
            )
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        log::info!("[API] Search response status: {}", status.as_u16());

        if !status.is_success() {
            return Err(PhotoApiError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(transport_error)?;
        log::debug!("[API] Search response body: {}", body);

        let records = SearchResponse::from_json(&body)
            .map_err(|e| PhotoApiError::MalformedResponse(e.to_string()))?
            .into_records();

        Ok(records)
    }

    async fn upload_photo(&self, request: &UploadRequest) -> Result<(), PhotoApiError> {
        let upload_url = self.config.endpoint_url(global_constants::UPLOAD_PATH);

        log::debug!("[API] PUT {}", upload_url);
        log::debug!(
            "[API] Request headers: {}={}, content-type={}, {}={}, {}={}",
            global_constants::HEADER_API_KEY,
            self.config.masked_api_key(),
            request.file.media_type,
            global_constants::HEADER_OBJECT_KEY,
            request.derived_file_name,
            global_constants::HEADER_CUSTOM_LABELS,
            request.custom_labels.as_deref().unwrap_or("(none)")
        );

        let mut builder = self
            .http_client
            .put(&upload_url)
            .header(global_constants::HEADER_API_KEY, &self.config.api_key)
            .header(reqwest::header::CONTENT_TYPE, &request.file.media_type)
            .header(
                global_constants::HEADER_OBJECT_KEY,
                &request.derived_file_name,
            );

        if let Some(labels) = &request.custom_labels {
            builder = builder.header(global_constants::HEADER_CUSTOM_LABELS, labels);
        }

        let response = builder
            .body(request.file.bytes.clone())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        log::info!("[API] Upload response status: {}", status.as_u16());
        log::debug!("[API] Upload response headers: {:?}", response.headers());

        if status.is_success() {
            return Ok(());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::debug!("[API] Could not read upload failure body: {}", e);
                String::new()
            }
        };
        log::error!("[API] Upload failed - Status: {}", status.as_u16());
        log::error!("[API] Upload failed - Response: {}", body);

        Err(PhotoApiError::UploadRejected {
            status: status.as_u16(),
            body,
        })
    }
}
