use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl PhotoRecord {
    #[allow(dead_code)]
    pub fn new(url: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            url: url.into(),
            labels,
        }
    }
}

/// Body of a successful `GET /search` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<PhotoRecord>>,
}

impl SearchResponse {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn into_records(self) -> Vec<PhotoRecord> {
        self.results.unwrap_or_default()
    }
}
