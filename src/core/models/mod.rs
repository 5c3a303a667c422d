mod client_config;
mod display_message;
mod photo_record;
mod search_query;
mod upload_request;

pub use client_config::ClientConfig;
pub use display_message::{DisplayMessage, MessageKind, Region};
pub use photo_record::{PhotoRecord, SearchResponse};
pub use search_query::SearchQuery;
pub use upload_request::{SelectedFile, UploadRequest};
