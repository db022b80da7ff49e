use serde::Deserialize;

use super::error::SearchError;

/// One user account returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    /// Account id, unique within a result set.
    pub id: u64,
    /// Display name (GitHub login).
    pub login: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Profile page URL.
    pub html_url: String,
}

/// Ordered results of one successful search.
pub type ResultSet = Vec<SearchResult>;

/// Outcome of a search as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success(ResultSet),
    /// Human-readable error description.
    Failure(String),
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success(_))
    }
}

impl From<Result<ResultSet, SearchError>> for RequestOutcome {
    fn from(result: Result<ResultSet, SearchError>) -> Self {
        match result {
            Ok(items) => RequestOutcome::Success(items),
            Err(e) => RequestOutcome::Failure(e.to_string()),
        }
    }
}
