pub const APPLICATION_NAME: &str = "Photo Album Client";

pub const DEFAULT_API_ENDPOINT: &str =
    "https://uuh0u6vum4.execute-api.us-east-1.amazonaws.com/prod";
pub const DEFAULT_API_KEY: &str = "GqljqurJQQm30OmqxckZ4vOfyThQEBg4U0kl7cD9";
pub const DEFAULT_BUCKET_NAME: &str = "photo-storage-ml";

pub const PLACEHOLDER_API_ENDPOINT_MARKER: &str = "YOUR-API-ID";
pub const PLACEHOLDER_API_KEY: &str = "YOUR-API-KEY-HERE";
pub const PLACEHOLDER_BUCKET_NAME: &str = "YOUR-PHOTO-BUCKET-NAME";

pub const CONFIG_DIR_NAME: &str = "photo-album-client";
pub const CONFIG_FILE_NAME: &str = "client_config.json";

pub const SEARCH_PATH: &str = "/search";
pub const UPLOAD_PATH: &str = "/upload";

pub const HEADER_API_KEY: &str = "x-api-key";
pub const HEADER_OBJECT_KEY: &str = "x-amz-meta-key";
pub const HEADER_CUSTOM_LABELS: &str = "x-amz-meta-customLabels";
pub const SEARCH_CONTENT_TYPE: &str = "application/json";

pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
pub const ACCEPTED_MEDIA_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/gif"];
pub const IMAGE_MEDIA_TYPE_PREFIX: &str = "image/";

pub const REGION_ID_RESULTS: &str = "results";
pub const REGION_ID_SEARCH_MESSAGE: &str = "searchMessage";
pub const REGION_ID_UPLOAD_MESSAGE: &str = "uploadMessage";

pub const SEARCH_TRIGGER_KEY: &str = "Enter";

pub const USER_MESSAGE_EMPTY_QUERY: &str = "Please enter a search query";
pub const USER_MESSAGE_SEARCHING: &str = "Searching...";
pub const USER_MESSAGE_NO_FILE: &str = "Please select a file to upload";
pub const USER_MESSAGE_FILE_TOO_LARGE: &str = "File is too large. Maximum size is 5MB.";
pub const USER_MESSAGE_INVALID_TYPE: &str =
    "Invalid file type. Please upload JPEG, PNG, or GIF images.";
pub const USER_MESSAGE_NOT_AN_IMAGE: &str = "Please select an image file";
pub const USER_MESSAGE_UPLOADING: &str = "<div class=\"spinner\"></div>Uploading...";
pub const USER_MESSAGE_UPLOAD_SUCCESS: &str =
    "Photo uploaded successfully! It will be indexed in a few seconds. You can then search for it.";
pub const USER_MESSAGE_CHECK_LOGS: &str = "Check the log output for details";

pub const ALERT_SEARCH_INPUT_MISSING: &str = "Search input not found";
pub const ALERT_FILE_INPUT_MISSING: &str = "File input not found";

pub const IMAGE_ERROR_PLACEHOLDER: &str = "data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 width=%22280%22 height=%22250%22><rect fill=%22%23ddd%22 width=%22280%22 height=%22250%22/><text x=%2250%%22 y=%2250%%22 font-size=%2218%22 text-anchor=%22middle%22 fill=%22%23999%22>Image Error</text></svg>";

pub const INTERACTIVE_QUIT_COMMAND: &str = "quit";
