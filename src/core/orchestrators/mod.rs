mod photo_client;

#[cfg(test)]
mod photo_client_tests;

pub use photo_client::PhotoClient;
