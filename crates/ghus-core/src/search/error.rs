//! Search error type.

use thiserror::Error;

/// Why a single search attempt failed.
///
/// The retry loop surfaces the last attempt's error verbatim, so these
/// messages are what the user eventually sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The request could not be sent or no response arrived.
    #[error("{0}")]
    Transport(String),
    /// A response arrived with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    HttpStatus(u32),
    /// 2xx response whose body is not a search payload.
    #[error("invalid search response: {0}")]
    Payload(String),
    /// The request URL could not be built from the configured base URL.
    #[error("invalid search URL: {0}")]
    InvalidUrl(String),
}

impl From<curl::Error> for SearchError {
    fn from(e: curl::Error) -> Self {
        SearchError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_embeds_code() {
        assert_eq!(
            SearchError::HttpStatus(422).to_string(),
            "HTTP error! status: 422"
        );
    }

    #[test]
    fn transport_message_is_verbatim() {
        let e = SearchError::Transport("Couldn't resolve host name".to_string());
        assert_eq!(e.to_string(), "Couldn't resolve host name");
    }
}
