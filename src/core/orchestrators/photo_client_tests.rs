use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::adapters::HtmlDocument;
use crate::core::interfaces::adapters::{PhotoApi, PhotoApiError};
use crate::core::interfaces::ports::{Clock, FileInputState, ViewBindings};
use crate::core::models::{
    ClientConfig, MessageKind, PhotoRecord, Region, SearchQuery, SelectedFile, UploadRequest,
};
use crate::core::orchestrators::PhotoClient;

const FIXED_TIMESTAMP: i64 = 1_700_000_000_000;

struct FixedClock;

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        FIXED_TIMESTAMP
    }
}

struct MockPhotoApi {
    searches: Arc<Mutex<Vec<String>>>,
    uploads: Arc<Mutex<Vec<UploadRequest>>>,
    search_outcome: Result<Vec<PhotoRecord>, PhotoApiError>,
    upload_outcome: Result<(), PhotoApiError>,
    delays_by_query: HashMap<String, Duration>,
}

impl MockPhotoApi {
    fn new() -> Self {
        Self {
            searches: Arc::new(Mutex::new(Vec::new())),
            uploads: Arc::new(Mutex::new(Vec::new())),
            search_outcome: Ok(Vec::new()),
            upload_outcome: Ok(()),
            delays_by_query: HashMap::new(),
        }
    }

    fn returning_results(mut self, results: Vec<PhotoRecord>) -> Self {
        self.search_outcome = Ok(results);
        self
    }

    fn failing_search(mut self, error: PhotoApiError) -> Self {
        self.search_outcome = Err(error);
        self
    }

    fn failing_upload(mut self, error: PhotoApiError) -> Self {
        self.upload_outcome = Err(error);
        self
    }

    fn delaying(mut self, query: &str, delay: Duration) -> Self {
        self.delays_by_query.insert(query.to_string(), delay);
        self
    }

    fn search_count(&self) -> usize {
        self.searches.lock().unwrap().len()
    }

    fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

#[async_trait]
impl PhotoApi for MockPhotoApi {
    async fn search_photos(&self, query: &SearchQuery) -> Result<Vec<PhotoRecord>, PhotoApiError> {
        self.searches
            .lock()
            .unwrap()
            .push(query.as_str().to_string());

        if let Some(delay) = self.delays_by_query.get(query.as_str()) {
            tokio::time::sleep(*delay).await;
        }

        match &self.search_outcome {
            Ok(results) => Ok(results
                .iter()
                .map(|record| {
                    let mut record = record.clone();
                    record.labels.push(query.as_str().to_string());
                    record
                })
                .collect()),
            Err(error) => Err(error.clone()),
        }
    }

    async fn upload_photo(&self, request: &UploadRequest) -> Result<(), PhotoApiError> {
        self.uploads.lock().unwrap().push(request.clone());
        self.upload_outcome.clone()
    }
}

/// Records what the client asks of the page without touching a browser.
struct RecordingView {
    opened_urls: Mutex<Vec<String>>,
}

impl ViewBindings for RecordingView {
    fn search_query_value(&self) -> Option<String> {
        None
    }

    fn file_input(&self) -> FileInputState {
        FileInputState::Missing
    }

    fn custom_labels_value(&self) -> Option<String> {
        None
    }

    fn clear_file_input(&self) {}

    fn clear_custom_labels(&self) {}

    fn replace_region(&self, _region: Region, _markup: &str) -> bool {
        false
    }

    fn reveal_results_section(&self) {}

    fn alert(&self, _text: &str) {}

    fn open_in_new_context(&self, url: &str) -> anyhow::Result<()> {
        self.opened_urls.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

fn build_client(api: Arc<MockPhotoApi>, document: Arc<HtmlDocument>) -> PhotoClient {
    PhotoClient::build(
        Arc::new(ClientConfig::default()),
        api,
        document,
        Arc::new(FixedClock),
    )
}

fn region(document: &HtmlDocument, region: Region) -> String {
    document.region_markup(region).unwrap_or_default()
}

fn jpeg_file(size: usize) -> SelectedFile {
    SelectedFile::new("photo vacation.JPG", "image/jpeg", vec![7u8; size])
}

// The mock echoes the query as an extra label, so plain records come back
// with it appended.
fn beach_record() -> PhotoRecord {
    PhotoRecord::new("https://x/1.jpg", vec!["sunset".to_string()])
}

#[tokio::test]
async fn test_search_with_query_issues_one_request_and_renders_cards() {
    let api = Arc::new(MockPhotoApi::new().returning_results(vec![beach_record()]));
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(Arc::clone(&api), Arc::clone(&document));

    document.set_search_query("  beach ");
    client.search_photos().await;

    assert_eq!(*api.searches.lock().unwrap(), vec!["beach".to_string()]);
    let results = region(&document, Region::Results);
    assert_eq!(results.matches("class=\"photo-card\"").count(), 1);
    assert!(results.contains("<span class=\"label-tag\">sunset</span>"));
    assert!(results.contains("<span class=\"label-tag\">beach</span>"));
    assert!(document.is_results_section_visible());
}

#[tokio::test]
async fn test_whitespace_query_shows_inline_error_without_request() {
    let api = Arc::new(MockPhotoApi::new());
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(Arc::clone(&api), Arc::clone(&document));

    document.set_search_query("   ");
    client.search_photos().await;

    assert_eq!(api.search_count(), 0);
    assert_eq!(
        region(&document, Region::SearchMessage),
        "<div class=\"error-message\">Please enter a search query</div>"
    );
    assert_eq!(region(&document, Region::Results), "");
}

#[tokio::test]
async fn test_missing_search_field_raises_alert() {
    let api = Arc::new(MockPhotoApi::new());
    let document = Arc::new(HtmlDocument::with_standard_layout().without_search_field());
    let client = build_client(Arc::clone(&api), Arc::clone(&document));

    client.search_photos().await;

    assert_eq!(api.search_count(), 0);
    assert_eq!(document.alerts(), vec!["Search input not found".to_string()]);
}

#[tokio::test]
async fn test_search_failure_is_rendered_inline_with_status() {
    let api = Arc::new(MockPhotoApi::new().failing_search(PhotoApiError::HttpStatus(502)));
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(api, Arc::clone(&document));

    document.set_search_query("beach");
    client.search_photos().await;

    let results = region(&document, Region::Results);
    assert!(results.contains("Search failed: HTTP error! status: 502"));
    assert!(document.alerts().is_empty());
}

#[tokio::test]
async fn test_malformed_response_is_rendered_inline() {
    let api = Arc::new(
        MockPhotoApi::new()
            .failing_search(PhotoApiError::MalformedResponse("invalid type".to_string())),
    );
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(api, Arc::clone(&document));

    document.set_search_query("beach");
    client.search_photos().await;

    assert!(region(&document, Region::Results)
        .contains("Search failed: Malformed response: invalid type"));
}

#[tokio::test]
async fn test_empty_results_render_placeholder() {
    let api = Arc::new(MockPhotoApi::new());
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(api, Arc::clone(&document));

    document.set_search_query("nothing-here");
    client.search_photos().await;

    assert!(region(&document, Region::Results).contains("No photos found matching your search."));
}

#[tokio::test]
async fn test_enter_key_triggers_search_and_other_keys_do_not() {
    let api = Arc::new(MockPhotoApi::new());
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(Arc::clone(&api), Arc::clone(&document));
    document.set_search_query("beach");

    client.handle_search_key_press("a").await;
    client.handle_search_key_press("Escape").await;
    assert_eq!(api.search_count(), 0);

    client.handle_search_key_press("Enter").await;
    assert_eq!(api.search_count(), 1);
}

#[test]
fn test_render_results_escapes_labels() {
    let api = Arc::new(MockPhotoApi::new());
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(api, Arc::clone(&document));

    client.render_results(&[PhotoRecord::new(
        "https://x/1.jpg",
        vec!["<script>alert('x')</script>".to_string()],
    )]);

    let results = region(&document, Region::Results);
    assert!(!results.contains("<script>"));
    assert!(results.contains("&lt;script&gt;"));
}

#[test]
fn test_open_image_uses_new_browsing_context() {
    let view = Arc::new(RecordingView {
        opened_urls: Mutex::new(Vec::new()),
    });
    let client = PhotoClient::build(
        Arc::new(ClientConfig::default()),
        Arc::new(MockPhotoApi::new()),
        view.clone() as Arc<dyn ViewBindings>,
        Arc::new(FixedClock),
    );

    client.open_image("https://x/1.jpg").unwrap();

    assert_eq!(
        *view.opened_urls.lock().unwrap(),
        vec!["https://x/1.jpg".to_string()]
    );
}

#[test]
fn test_file_select_rejects_non_image_and_clears_selection() {
    let api = Arc::new(MockPhotoApi::new());
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(api, Arc::clone(&document));
    document.replace_region(Region::UploadMessage, "<div>old</div>");

    document.select_file(SelectedFile::new("notes.txt", "text/plain", vec![1]));
    client.handle_file_select();

    assert!(!document.has_selected_file());
    assert_eq!(
        region(&document, Region::UploadMessage),
        "<div class=\"error-message\">Please select an image file</div>"
    );
}

#[test]
fn test_file_select_of_image_clears_previous_message_and_keeps_file() {
    let api = Arc::new(MockPhotoApi::new());
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(api, Arc::clone(&document));
    document.replace_region(Region::UploadMessage, "<div>old</div>");

    document.select_file(SelectedFile::new("cat.webp", "image/webp", vec![1]));
    client.handle_file_select();

    assert!(document.has_selected_file());
    assert_eq!(region(&document, Region::UploadMessage), "");
}

#[tokio::test]
async fn test_upload_without_file_shows_error_without_request() {
    let api = Arc::new(MockPhotoApi::new());
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(Arc::clone(&api), Arc::clone(&document));

    client.upload_photo().await;

    assert_eq!(api.upload_count(), 0);
    assert!(region(&document, Region::UploadMessage).contains("Please select a file to upload"));
}

#[tokio::test]
async fn test_upload_rejects_oversized_file_without_request() {
    let api = Arc::new(MockPhotoApi::new());
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(Arc::clone(&api), Arc::clone(&document));

    document.select_file(jpeg_file(5_242_881));
    client.upload_photo().await;

    assert_eq!(api.upload_count(), 0);
    assert!(region(&document, Region::UploadMessage)
        .contains("File is too large. Maximum size is 5MB."));
    assert!(document.has_selected_file());
}

#[tokio::test]
async fn test_upload_rejects_unsupported_media_type_without_request() {
    let api = Arc::new(MockPhotoApi::new());
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(Arc::clone(&api), Arc::clone(&document));

    document.select_file(SelectedFile::new("cat.webp", "image/webp", vec![1, 2]));
    client.upload_photo().await;

    assert_eq!(api.upload_count(), 0);
    assert!(region(&document, Region::UploadMessage).contains("Invalid file type."));
}

#[tokio::test]
async fn test_missing_file_input_raises_alert() {
    let api = Arc::new(MockPhotoApi::new());
    let document = Arc::new(HtmlDocument::with_standard_layout().without_file_input());
    let client = build_client(Arc::clone(&api), Arc::clone(&document));

    client.upload_photo().await;

    assert_eq!(api.upload_count(), 0);
    assert_eq!(document.alerts(), vec!["File input not found".to_string()]);
}

#[tokio::test]
async fn test_successful_upload_sends_derived_key_and_clears_inputs() {
    let api = Arc::new(MockPhotoApi::new());
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(Arc::clone(&api), Arc::clone(&document));

    document.select_file(jpeg_file(16));
    document.set_custom_labels("  family, lake ");
    client.upload_photo().await;

    let uploads = api.uploads.lock().unwrap().clone();
    assert_eq!(uploads.len(), 1);
    assert_eq!(
        uploads[0].derived_file_name,
        "photo-vacation-1700000000000.jpg"
    );
    assert_eq!(uploads[0].custom_labels.as_deref(), Some("family, lake"));
    assert_eq!(uploads[0].file.bytes, vec![7u8; 16]);

    assert!(region(&document, Region::UploadMessage).starts_with(
        "<div class=\"success-message\">Photo uploaded successfully! It will be indexed in a few seconds."
    ));
    assert!(!document.has_selected_file());
    assert_eq!(document.custom_labels().as_deref(), Some(""));
}

#[tokio::test]
async fn test_failed_upload_reports_status_and_keeps_inputs() {
    let api = Arc::new(MockPhotoApi::new().failing_upload(PhotoApiError::UploadRejected {
        status: 403,
        body: "Forbidden".to_string(),
    }));
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(Arc::clone(&api), Arc::clone(&document));

    document.select_file(jpeg_file(16));
    document.set_custom_labels("family");
    client.upload_photo().await;

    assert_eq!(api.upload_count(), 1);
    assert_eq!(
        region(&document, Region::UploadMessage),
        "<div class=\"error-message\">Upload failed: Upload failed with status 403. Check the log output for details.</div>"
    );
    assert!(document.has_selected_file());
    assert_eq!(document.custom_labels().as_deref(), Some("family"));
}

#[tokio::test]
async fn test_upload_works_without_custom_labels_field() {
    let api = Arc::new(MockPhotoApi::new());
    let document = Arc::new(HtmlDocument::with_standard_layout().without_custom_labels_field());
    let client = build_client(Arc::clone(&api), Arc::clone(&document));

    document.select_file(jpeg_file(4));
    client.upload_photo().await;

    let uploads = api.uploads.lock().unwrap().clone();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].custom_labels, None);
}

#[test]
fn test_show_message_on_missing_region_alerts_only_for_errors() {
    let api = Arc::new(MockPhotoApi::new());
    let document = Arc::new(HtmlDocument::with_standard_layout().without_region(Region::UploadMessage));
    let client = build_client(api, Arc::clone(&document));

    client.show_message(Region::UploadMessage, "Uploading...", MessageKind::Info);
    client.show_message(Region::UploadMessage, "All good", MessageKind::Success);
    assert!(document.alerts().is_empty());

    client.show_message(Region::UploadMessage, "Broken", MessageKind::Error);
    assert_eq!(document.alerts(), vec!["Broken".to_string()]);
}

#[test]
fn test_show_message_replaces_previous_message() {
    let api = Arc::new(MockPhotoApi::new());
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(api, Arc::clone(&document));

    client.show_message(Region::UploadMessage, "first", MessageKind::Info);
    client.show_message(Region::UploadMessage, "second", MessageKind::Success);

    assert_eq!(
        region(&document, Region::UploadMessage),
        "<div class=\"success-message\">second</div>"
    );
}

#[tokio::test]
async fn test_search_and_upload_overlap_without_touching_each_others_regions() {
    let api = Arc::new(
        MockPhotoApi::new()
            .returning_results(vec![beach_record()])
            .delaying("beach", Duration::from_millis(30)),
    );
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(Arc::clone(&api), Arc::clone(&document));

    document.set_search_query("beach");
    document.select_file(jpeg_file(8));
    futures::join!(client.search_photos(), client.upload_photo());

    assert!(region(&document, Region::Results).contains("photo-card"));
    assert!(region(&document, Region::UploadMessage).contains("success-message"));
    assert_eq!(region(&document, Region::SearchMessage), "");
}

#[tokio::test]
async fn test_overlapping_searches_show_last_resolved_response() {
    let api = Arc::new(
        MockPhotoApi::new()
            .returning_results(vec![beach_record()])
            .delaying("slow", Duration::from_millis(50)),
    );
    let document = Arc::new(HtmlDocument::with_standard_layout());
    let client = build_client(Arc::clone(&api), Arc::clone(&document));

    let slow_search = async {
        document.set_search_query("slow");
        client.search_photos().await;
    };
    let fast_search = async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        document.set_search_query("fast");
        client.search_photos().await;
    };
    futures::join!(slow_search, fast_search);

    assert_eq!(api.search_count(), 2);
    let results = region(&document, Region::Results);
    assert!(results.contains("<span class=\"label-tag\">slow</span>"));
    assert!(!results.contains("<span class=\"label-tag\">fast</span>"));
}
