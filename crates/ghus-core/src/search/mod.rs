//! GitHub user search over HTTP.
//!
//! Uses the curl crate (libcurl) to issue one GET against `/search/users`
//! and decode the `items` list. The client is blocking; async callers go
//! through [`crate::searcher`], which runs it on `spawn_blocking`.

mod client;
mod error;
mod model;
mod parse;

pub use client::{search_url, ClientOptions, CurlSearchClient, SearchClient};
pub use error::SearchError;
pub use model::{RequestOutcome, ResultSet, SearchResult};
pub use parse::parse_response;
