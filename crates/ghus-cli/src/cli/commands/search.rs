//! `ghus search <query>` – one-shot search, prints a single page.

use anyhow::{bail, Result};
use ghus_core::config::{self, GhusConfig};
use ghus_core::retry::RetryPolicy;
use ghus_core::search::CurlSearchClient;
use ghus_core::searcher::Searcher;
use ghus_core::session::{SearchSession, SearchStatus};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use super::render;

/// Per-invocation overrides on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// 1-based page to print.
    pub page: usize,
    pub page_size: Option<usize>,
    pub max_attempts: Option<u32>,
    pub base_delay_ms: Option<u64>,
}

/// Config retry policy with command-line overrides applied.
pub(super) fn retry_policy(
    cfg: &GhusConfig,
    max_attempts: Option<u32>,
    base_delay_ms: Option<u64>,
) -> RetryPolicy {
    let base = cfg.retry_policy();
    RetryPolicy::new(
        max_attempts.unwrap_or(base.max_attempts),
        base_delay_ms
            .map(|ms| Duration::from_millis(ms.max(1)))
            .unwrap_or(base.base_delay),
    )
}

pub(super) fn build_searcher(cfg: &GhusConfig, policy: RetryPolicy) -> Searcher {
    let client = CurlSearchClient::new(cfg.client_options(config::token_from_env()));
    Searcher::new(Arc::new(client), policy)
}

pub async fn run_search(cfg: &GhusConfig, query: &str, opts: &SearchOptions) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        bail!("search query is empty");
    }

    let policy = retry_policy(cfg, opts.max_attempts, opts.base_delay_ms);
    let searcher = build_searcher(cfg, policy);
    let mut session = SearchSession::new(opts.page_size.unwrap_or(cfg.page_size));

    let token = session.begin_search(query);
    eprintln!("Loading...");
    let outcome = searcher.search(query).await;
    session.complete(token, outcome);

    if session.status() == SearchStatus::Error {
        bail!("{}", session.error().unwrap_or("search failed"));
    }

    session.select_page(opts.page.saturating_sub(1))?;

    let mut out = std::io::stdout().lock();
    render::render_session(&session, &mut out)?;
    if let Some(footer) = render::pagination_footer(&session) {
        writeln!(out, "{}", footer)?;
    }
    Ok(())
}
