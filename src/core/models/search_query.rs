use thiserror::Error;

use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchQueryError {
    #[error("{}", global_constants::USER_MESSAGE_EMPTY_QUERY)]
    Empty,
}

/// A trimmed, non-empty search string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw_input: &str) -> Result<Self, SearchQueryError> {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() {
            return Err(SearchQueryError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn percent_encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}
