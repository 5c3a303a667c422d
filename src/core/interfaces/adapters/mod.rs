mod photo_api;

pub use photo_api::{PhotoApi, PhotoApiError};
