use std::sync::Arc;

use crate::core::interfaces::adapters::{PhotoApi, PhotoApiError};
use crate::core::interfaces::ports::{Clock, FileInputState, ViewBindings};
use crate::core::models::{
    ClientConfig, DisplayMessage, MessageKind, PhotoRecord, Region, SearchQuery, UploadRequest,
};
use crate::global_constants;
use crate::presentation::photo_markup;

/// Drives search and upload for one page.
///
/// Search writes only to `results` and `searchMessage`; upload writes only to
/// `uploadMessage`. Overlapping runs of the same operation leave the region
/// showing whichever response resolved last.
pub struct PhotoClient {
    config: Arc<ClientConfig>,
    photo_api: Arc<dyn PhotoApi>,
    view: Arc<dyn ViewBindings>,
    clock: Arc<dyn Clock>,
}

impl PhotoClient {
    pub fn build(
        config: Arc<ClientConfig>,
        photo_api: Arc<dyn PhotoApi>,
        view: Arc<dyn ViewBindings>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        log::info!("[CLIENT] {} initialized", global_constants::APPLICATION_NAME);
        config.report_startup();

        Self {
            config,
            photo_api,
            view,
            clock,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn search_photos(&self) {
        let Some(raw_query) = self.view.search_query_value() else {
            self.view.alert(global_constants::ALERT_SEARCH_INPUT_MISSING);
            return;
        };

        let query = match SearchQuery::parse(&raw_query) {
            Ok(query) => query,
            Err(error) => {
                self.show_message(Region::SearchMessage, &error.to_string(), MessageKind::Error);
                return;
            }
        };

        self.view.reveal_results_section();
        self.write_region(Region::Results, &photo_markup::searching_markup());

        log::info!("[SEARCH] Searching for: {}", query.as_str());

        match self.photo_api.search_photos(&query).await {
            Ok(results) => {
                log::info!("[SEARCH] Received {} results", results.len());
                self.render_results(&results);
            }
            Err(error) => {
                log::error!("[SEARCH] Search error: {}", error);
                self.write_region(
                    Region::Results,
                    &photo_markup::search_failure_markup(&error.to_string()),
                );
            }
        }
    }

    pub fn render_results(&self, results: &[PhotoRecord]) {
        self.write_region(Region::Results, &photo_markup::results_markup(results));
    }

    pub async fn handle_search_key_press(&self, key: &str) {
        if key == global_constants::SEARCH_TRIGGER_KEY {
            self.search_photos().await;
        }
    }

    pub fn open_image(&self, url: &str) -> anyhow::Result<()> {
        self.view.open_in_new_context(url)
    }

    pub fn handle_file_select(&self) {
        let FileInputState::Selected(file) = self.view.file_input() else {
            return;
        };

        log::info!(
            "[UPLOAD] File selected: {} {} {}",
            file.name,
            file.media_type,
            file.size_bytes()
        );

        self.write_region(Region::UploadMessage, "");

        if !file.is_image() {
            self.show_message(
                Region::UploadMessage,
                global_constants::USER_MESSAGE_NOT_AN_IMAGE,
                MessageKind::Error,
            );
            self.view.clear_file_input();
        }
    }

    pub async fn upload_photo(&self) {
        let selected_file = match self.view.file_input() {
            FileInputState::Missing => {
                self.view.alert(global_constants::ALERT_FILE_INPUT_MISSING);
                return;
            }
            FileInputState::Empty => None,
            FileInputState::Selected(file) => Some(file),
        };

        let custom_labels = self.view.custom_labels_value().unwrap_or_default();

        let request =
            match UploadRequest::prepare(selected_file, &custom_labels, self.clock.now_millis()) {
                Ok(request) => request,
                Err(error) => {
                    log::warn!("[UPLOAD] Rejected before sending: {}", error.diagnostic());
                    self.show_message(Region::UploadMessage, &error.to_string(), MessageKind::Error);
                    return;
                }
            };

        self.show_message(
            Region::UploadMessage,
            global_constants::USER_MESSAGE_UPLOADING,
            MessageKind::Info,
        );

        log::info!("[UPLOAD] Uploading file: {}", request.derived_file_name);
        log::debug!("[UPLOAD] File type: {}", request.file.media_type);
        log::debug!("[UPLOAD] File size: {} bytes", request.file.size_bytes());
        log::debug!(
            "[UPLOAD] Custom labels: {}",
            request.custom_labels.as_deref().unwrap_or("(none)")
        );

        match self.photo_api.upload_photo(&request).await {
            Ok(()) => {
                self.show_message(
                    Region::UploadMessage,
                    global_constants::USER_MESSAGE_UPLOAD_SUCCESS,
                    MessageKind::Success,
                );
                self.view.clear_file_input();
                self.view.clear_custom_labels();
                log::info!("[UPLOAD] Upload successful: {}", request.derived_file_name);
            }
            Err(error) => {
                log::error!("[UPLOAD] Upload error: {}", error);
                if let PhotoApiError::UploadRejected { body, .. } = &error {
                    log::debug!("[UPLOAD] Rejection body: {}", body);
                }
                let text = format!(
                    "Upload failed: {}. {}.",
                    photo_markup::escape_html(&error.to_string()),
                    global_constants::USER_MESSAGE_CHECK_LOGS
                );
                self.show_message(Region::UploadMessage, &text, MessageKind::Error);
            }
        }
    }

    pub fn show_message(&self, region: Region, text: &str, kind: MessageKind) {
        let message = DisplayMessage::new(region, text, kind);

        if self.view.replace_region(
            message.target_region,
            &photo_markup::message_markup(&message),
        ) {
            return;
        }

        log::error!(
            "[MESSAGE] Element with id '{}' not found",
            message.target_region.id()
        );
        log::info!("[MESSAGE] {}", message.text);
        if message.kind == MessageKind::Error {
            self.view.alert(&message.text);
        }
    }

    fn write_region(&self, region: Region, markup: &str) {
        if !self.view.replace_region(region, markup) {
            log::warn!("[CLIENT] Region '{}' is not on the page, skipping update", region.id());
        }
    }
}
