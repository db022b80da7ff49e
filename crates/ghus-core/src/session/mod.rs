//! Search session state owned by the presentation layer.
//!
//! All UI-visible state (query, status, error, results, page) lives in one
//! [`SearchSession`] and only changes through its methods. Each search gets
//! a [`RequestToken`]; completions carrying an older token are stale and
//! dropped, since an earlier retry sequence is never cancelled.

use thiserror::Error;

use crate::paginate::Paginator;
use crate::search::{RequestOutcome, ResultSet, SearchResult};

/// Observable lifecycle of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Generation id of one search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Rejected page selection. The session state is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("page {requested} is out of range ({page_count} pages)")]
    OutOfRange { requested: usize, page_count: usize },
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    query: String,
    status: SearchStatus,
    error: Option<String>,
    results: ResultSet,
    page: usize,
    generation: u64,
    paginator: Paginator,
}

impl SearchSession {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            status: SearchStatus::Idle,
            error: None,
            results: Vec::new(),
            page: 0,
            generation: 0,
            paginator: Paginator::new(page_size),
        }
    }

    /// Start a new search: status becomes `Loading`, page resets to 0 and the
    /// previous results and error are dropped. Supersedes any in-flight search.
    pub fn begin_search(&mut self, query: impl Into<String>) -> RequestToken {
        self.generation += 1;
        self.query = query.into();
        self.status = SearchStatus::Loading;
        self.error = None;
        self.results = Vec::new();
        self.page = 0;
        tracing::debug!(generation = self.generation, query = %self.query, "search started");
        RequestToken(self.generation)
    }

    /// Apply the outcome of the search identified by `token`.
    ///
    /// Returns false (and changes nothing) when the token is not the current
    /// in-flight search.
    pub fn complete(&mut self, token: RequestToken, outcome: RequestOutcome) -> bool {
        if token.0 != self.generation || self.status != SearchStatus::Loading {
            tracing::debug!(
                stale = token.0,
                current = self.generation,
                "discarding stale search outcome"
            );
            return false;
        }
        match outcome {
            RequestOutcome::Success(items) => {
                self.results = items;
                self.error = None;
                self.status = SearchStatus::Success;
            }
            RequestOutcome::Failure(msg) => {
                self.results = Vec::new();
                self.error = Some(msg);
                self.status = SearchStatus::Error;
            }
        }
        self.page = 0;
        true
    }

    /// Select a zero-based page. Index 0 is always accepted.
    pub fn select_page(&mut self, index: usize) -> Result<(), PageError> {
        if !self.paginator.is_valid_index(&self.results, index) {
            return Err(PageError::OutOfRange {
                requested: index,
                page_count: self.page_count(),
            });
        }
        self.page = index;
        Ok(())
    }

    pub fn next_page(&mut self) -> Result<(), PageError> {
        self.select_page(self.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> Result<(), PageError> {
        match self.page.checked_sub(1) {
            Some(index) => self.select_page(index),
            None => Err(PageError::OutOfRange {
                requested: 0,
                page_count: self.page_count(),
            }),
        }
    }

    /// Results on the current page.
    pub fn visible(&self) -> &[SearchResult] {
        self.paginator.visible_page(&self.results, self.page)
    }

    pub fn page_count(&self) -> usize {
        self.paginator.page_count(&self.results)
    }

    /// Pagination controls are shown only when there is more than one page.
    pub fn shows_pagination(&self) -> bool {
        self.paginator.shows_controls(&self.results)
    }

    /// A finished search that matched nothing ("No results found").
    pub fn is_empty_success(&self) -> bool {
        self.status == SearchStatus::Success && self.results.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.paginator.page_size()
    }

    /// Token of the most recent search, if any was started.
    pub fn current_token(&self) -> Option<RequestToken> {
        (self.generation > 0).then_some(RequestToken(self.generation))
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(Paginator::default().page_size())
    }
}
