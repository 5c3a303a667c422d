mod api_gateway_photo_service;
mod html_document;
mod local_file_picker;
mod system_clock;

pub use api_gateway_photo_service::ApiGatewayPhotoService;
pub use html_document::HtmlDocument;
pub use local_file_picker::read_selected_file;
pub use system_clock::SystemClock;
