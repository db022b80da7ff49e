//! Plain-text rendering of a search session.

use ghus_core::session::{SearchSession, SearchStatus};
use std::io::{self, Write};

/// Write the session's observable state: loading marker, error, "no results",
/// or the visible page as a table.
pub fn render_session<W: Write>(session: &SearchSession, out: &mut W) -> io::Result<()> {
    match session.status() {
        SearchStatus::Idle => {}
        SearchStatus::Loading => writeln!(out, "Loading...")?,
        SearchStatus::Error => {
            writeln!(out, "error: {}", session.error().unwrap_or("search failed"))?;
        }
        SearchStatus::Success if session.is_empty_success() => {
            writeln!(out, "No results found")?;
        }
        SearchStatus::Success => {
            writeln!(out, "{:<10} {:<24} {:<44} {}", "ID", "LOGIN", "PROFILE", "AVATAR")?;
            for user in session.visible() {
                writeln!(
                    out,
                    "{:<10} {:<24} {:<44} {}",
                    user.id, user.login, user.html_url, user.avatar_url
                )?;
            }
        }
    }
    Ok(())
}

/// "Page x of y (n results)", only when there is more than one page.
pub fn pagination_footer(session: &SearchSession) -> Option<String> {
    if !session.shows_pagination() {
        return None;
    }
    Some(format!(
        "Page {} of {} ({} results)",
        session.page() + 1,
        session.page_count(),
        session.results().len()
    ))
}
