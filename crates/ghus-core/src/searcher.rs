//! Runs searches through the retry policy.
//!
//! [`Searcher::search`] wraps one blocking client call per attempt in
//! `spawn_blocking` and retries it with backoff. [`Searcher::spawn_search`]
//! runs that as a detached task and reports `(token, outcome)` on a channel,
//! so the session can drop completions that belong to a superseded search.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::retry::{run_with_retry, RetryPolicy};
use crate::search::{RequestOutcome, ResultSet, SearchClient, SearchError};
use crate::session::RequestToken;

/// A finished search, tagged with the request it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub token: RequestToken,
    pub outcome: RequestOutcome,
}

#[derive(Clone)]
pub struct Searcher {
    client: Arc<dyn SearchClient>,
    policy: RetryPolicy,
    api_page: u32,
}

impl Searcher {
    pub fn new(client: Arc<dyn SearchClient>, policy: RetryPolicy) -> Self {
        Self {
            client,
            policy,
            api_page: 1,
        }
    }

    /// Request a different API page (the `page` query parameter). Defaults to 1.
    pub fn with_api_page(mut self, page: u32) -> Self {
        self.api_page = page.max(1);
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// One client call on the blocking pool.
    async fn attempt(&self, query: &str) -> Result<ResultSet, SearchError> {
        let client = Arc::clone(&self.client);
        let query = query.to_string();
        let page = self.api_page;
        tokio::task::spawn_blocking(move || client.search(&query, page))
            .await
            .map_err(|e| SearchError::Transport(format!("search task failed: {}", e)))?
    }

    /// Search with retry; the last attempt's error becomes the failure message.
    pub async fn search(&self, query: &str) -> RequestOutcome {
        tracing::info!(query, max_attempts = self.policy.max_attempts, "searching");
        let result = run_with_retry(&self.policy, || self.attempt(query)).await;
        if let Err(e) = &result {
            tracing::warn!(query, "search failed: {}", e);
        }
        RequestOutcome::from(result)
    }

    /// Run [`Self::search`] on a new task and send the tagged outcome to `tx`.
    /// The task runs to completion even if a newer search starts.
    pub fn spawn_search(
        &self,
        token: RequestToken,
        query: String,
        tx: mpsc::UnboundedSender<Completion>,
    ) -> JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move {
            let outcome = this.search(&query).await;
            if tx.send(Completion { token, outcome }).is_err() {
                tracing::debug!(generation = token.generation(), "search receiver gone");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchResult;
    use crate::session::{SearchSession, SearchStatus};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Fails the first `failures` calls, then returns `count` users.
    struct ScriptedClient {
        failures: u32,
        count: usize,
        calls: AtomicU32,
        seen: Mutex<Vec<(String, u32)>>,
    }

    impl ScriptedClient {
        fn new(failures: u32, count: usize) -> Self {
            Self {
                failures,
                count,
                calls: AtomicU32::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl SearchClient for ScriptedClient {
        fn search(&self, query: &str, page: u32) -> Result<ResultSet, SearchError> {
            self.seen.lock().unwrap().push((query.to_string(), page));
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                return Err(SearchError::HttpStatus(502));
            }
            Ok((0..self.count)
                .map(|i| SearchResult {
                    id: i as u64,
                    login: format!("{query}{i}"),
                    avatar_url: String::new(),
                    html_url: String::new(),
                })
                .collect())
        }
    }

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(max_attempts, Duration::from_millis(1))
    }

    #[tokio::test]
    async fn retries_until_client_succeeds() {
        let client = Arc::new(ScriptedClient::new(2, 4));
        let searcher = Searcher::new(client.clone(), fast_policy(5));
        let outcome = searcher.search("ann").await;
        match outcome {
            RequestOutcome::Success(items) => assert_eq!(items.len(), 4),
            RequestOutcome::Failure(msg) => panic!("unexpected failure: {msg}"),
        }
        assert_eq!(client.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausted_retries_report_last_error() {
        let client = Arc::new(ScriptedClient::new(u32::MAX, 0));
        let searcher = Searcher::new(client.clone(), fast_policy(3));
        let outcome = searcher.search("ann").await;
        assert_eq!(
            outcome,
            RequestOutcome::Failure("HTTP error! status: 502".to_string())
        );
        assert_eq!(client.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn api_page_is_forwarded() {
        let client = Arc::new(ScriptedClient::new(0, 1));
        let searcher = Searcher::new(client.clone(), fast_policy(1)).with_api_page(3);
        searcher.search("bo").await;
        assert_eq!(client.seen.lock().unwrap().as_slice(), &[("bo".to_string(), 3)]);
    }

    #[tokio::test]
    async fn spawned_searches_deliver_tagged_outcomes() {
        let slow = Searcher::new(Arc::new(ScriptedClient::new(2, 7)), fast_policy(5));
        let fast = Searcher::new(Arc::new(ScriptedClient::new(0, 2)), fast_policy(5));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = SearchSession::new(10);

        let old = session.begin_search("slow");
        let h1 = slow.spawn_search(old, "slow".to_string(), tx.clone());
        let new = session.begin_search("fast");
        let h2 = fast.spawn_search(new, "fast".to_string(), tx);
        h1.await.unwrap();
        h2.await.unwrap();

        let mut applied = 0;
        while let Some(done) = rx.recv().await {
            if session.complete(done.token, done.outcome) {
                applied += 1;
            }
        }
        assert_eq!(applied, 1);
        assert_eq!(session.status(), SearchStatus::Success);
        assert_eq!(session.results().len(), 2);
        assert_eq!(session.results()[0].login, "fast0");
    }
}
