//! Decode the `/search/users` JSON payload.

use serde::Deserialize;

use super::error::SearchError;
use super::model::{ResultSet, SearchResult};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Option<Vec<SearchResult>>,
}

/// Parse a response body into a result set. A missing or null `items`
/// field yields an empty list; other fields are ignored.
pub fn parse_response(body: &[u8]) -> Result<ResultSet, SearchError> {
    let resp: SearchResponse =
        serde_json::from_slice(body).map_err(|e| SearchError::Payload(e.to_string()))?;
    Ok(resp.items.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_items_in_order() {
        let body = br#"{
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                {"login": "octocat", "id": 1, "avatar_url": "https://a/1", "html_url": "https://github.com/octocat", "type": "User", "score": 1.0},
                {"login": "hubot", "id": 2, "avatar_url": "https://a/2", "html_url": "https://github.com/hubot"}
            ]
        }"#;
        let items = parse_response(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].login, "octocat");
        assert_eq!(items[0].id, 1);
        assert_eq!(items[1].html_url, "https://github.com/hubot");
    }

    #[test]
    fn missing_items_is_empty() {
        let items = parse_response(br#"{"total_count": 0}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn null_items_is_empty() {
        let items = parse_response(br#"{"items": null}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn non_json_is_payload_error() {
        match parse_response(b"<html>rate limited</html>") {
            Err(SearchError::Payload(_)) => {}
            other => panic!("expected payload error, got {:?}", other),
        }
    }
}
