//! `ghus interactive` – line-oriented search session.
//!
//! A plain line starts a new search. An in-flight search is never cancelled;
//! it finishes in the background and its outcome is dropped by the session
//! because its token is no longer current.

use anyhow::Result;
use ghus_core::config::GhusConfig;
use ghus_core::searcher::Completion;
use ghus_core::session::SearchSession;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use super::render;
use super::search::{build_searcher, retry_policy};

const HELP: &str = "type a query to search; :n next page, :p previous page, :page N, :q quit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Input {
    Search(String),
    Next,
    Prev,
    /// 1-based page number as typed.
    Page(usize),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub(crate) fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    let Some(cmd) = line.strip_prefix(':') else {
        return Input::Search(line.to_string());
    };
    let mut parts = cmd.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("n" | "next"), None, None) => Input::Next,
        (Some("p" | "prev"), None, None) => Input::Prev,
        (Some("q" | "quit"), None, None) => Input::Quit,
        (Some("h" | "help"), None, None) => Input::Help,
        (Some("page"), Some(n), None) => match n.parse::<usize>() {
            Ok(n) if n >= 1 => Input::Page(n),
            _ => Input::Unknown(line.to_string()),
        },
        _ => Input::Unknown(line.to_string()),
    }
}

fn redraw(session: &SearchSession) -> Result<()> {
    let mut out = std::io::stdout().lock();
    render::render_session(session, &mut out)?;
    if let Some(footer) = render::pagination_footer(session) {
        writeln!(out, "{}  [:n / :p / :page N]", footer)?;
    }
    out.flush()?;
    Ok(())
}

pub async fn run_interactive(cfg: &GhusConfig, page_size: Option<usize>) -> Result<()> {
    let searcher = build_searcher(cfg, retry_policy(cfg, None, None));
    let mut session = SearchSession::new(page_size.unwrap_or(cfg.page_size));
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_input(&line) {
                    Input::Quit => break,
                    Input::Empty => {}
                    Input::Help => println!("{}", HELP),
                    Input::Unknown(s) => println!("unknown command: {} ({})", s, HELP),
                    Input::Search(query) => {
                        let token = session.begin_search(query.clone());
                        searcher.spawn_search(token, query, tx.clone());
                        redraw(&session)?;
                    }
                    Input::Next => match session.next_page() {
                        Ok(()) => redraw(&session)?,
                        Err(e) => println!("{}", e),
                    },
                    Input::Prev => match session.prev_page() {
                        Ok(()) => redraw(&session)?,
                        Err(e) => println!("{}", e),
                    },
                    Input::Page(n) => match session.select_page(n - 1) {
                        Ok(()) => redraw(&session)?,
                        Err(e) => println!("{}", e),
                    },
                }
            }
            Some(done) = rx.recv() => {
                if session.complete(done.token, done.outcome) {
                    redraw(&session)?;
                }
            }
        }
    }

    tracing::debug!("interactive session ended");
    Ok(())
}
