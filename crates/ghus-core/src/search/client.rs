//! Blocking search client backed by libcurl.

use std::time::Duration;

use super::error::SearchError;
use super::model::ResultSet;
use super::parse::parse_response;

/// Anything that can run one search attempt.
///
/// Implementations block; run them from `spawn_blocking` in async code.
pub trait SearchClient: Send + Sync {
    fn search(&self, query: &str, page: u32) -> Result<ResultSet, SearchError>;
}

/// Settings for [`CurlSearchClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API root, e.g. `https://api.github.com`.
    pub base_url: String,
    /// Results requested per API page (`per_page`).
    pub per_page: u32,
    /// Sent as `User-Agent`; GitHub rejects requests without one.
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Optional bearer token (raises the API rate limit).
    pub token: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            per_page: 100,
            user_agent: concat!("ghus/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: Duration::from_secs(15),
            request_timeout: Duration::from_secs(30),
            token: None,
        }
    }
}

/// Build `{base}/search/users?q=..&per_page=..&page=..` with the query encoded.
pub fn search_url(base: &str, query: &str, per_page: u32, page: u32) -> Result<String, SearchError> {
    let mut url = url::Url::parse(base).map_err(|e| SearchError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| SearchError::InvalidUrl(format!("{} cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(["search", "users"]);
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("per_page", &per_page.to_string())
        .append_pair("page", &page.to_string());
    Ok(url.into())
}

/// Issues GET requests with a fresh curl `Easy` handle per call.
#[derive(Debug, Clone, Default)]
pub struct CurlSearchClient {
    opts: ClientOptions,
}

impl CurlSearchClient {
    pub fn new(opts: ClientOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.opts
    }

    fn get(&self, url: &str) -> Result<(u32, Vec<u8>), SearchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)
            .map_err(|e| SearchError::InvalidUrl(e.to_string()))?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(5)?;
        easy.useragent(&self.opts.user_agent)?;
        easy.connect_timeout(self.opts.connect_timeout)?;
        easy.timeout(self.opts.request_timeout)?;

        let mut list = curl::easy::List::new();
        list.append("Accept: application/vnd.github+json")?;
        if let Some(token) = self.opts.token.as_deref() {
            list.append(&format!("Authorization: Bearer {}", token.trim()))?;
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl SearchClient for CurlSearchClient {
    fn search(&self, query: &str, page: u32) -> Result<ResultSet, SearchError> {
        let url = search_url(&self.opts.base_url, query, self.opts.per_page, page)?;
        tracing::debug!("GET {}", url);

        let (code, body) = self.get(&url)?;
        if !(200..300).contains(&code) {
            return Err(SearchError::HttpStatus(code));
        }

        let items = parse_response(&body)?;
        tracing::debug!(count = items.len(), "search returned results");
        Ok(items)
    }
}
