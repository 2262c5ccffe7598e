//! Rendering for the `projects` command results.

use crate::api::{sort_by_recent_push, RepoSummary};
use crate::error::FetchError;
use crate::tui::prompt::{announce_banner, write_prompt};
use crate::tui::style::{emphasis, StyleColor};
use crate::ui::render::OutputSink;

/// Shown in place of a missing or empty description.
pub const NO_DESCRIPTION: &str = "No description";
pub const FETCHING_NOTICE: &str = " Fetching projects...";
const HEADING: &str = " Projects I've worked on:";
const FOOTER: &str = " Feel free to click on the link to visit the respective repository!";
/// Longest error text put on the surface, in characters.
const MAX_ERROR_CHARS: usize = 160;

/// Lines for one repository block, including the trailing blank line.
pub fn repo_block(repo: &RepoSummary) -> [String; 4] {
    [
        format!(" {} {}", emphasis("Name:", StyleColor::Magenta), repo.name),
        format!(" {}", emphasis(&format!("URL: {}", repo.url), StyleColor::Cyan)),
        format!(
            " {} {}",
            emphasis("Description:", StyleColor::Magenta),
            repo.description_text().unwrap_or(NO_DESCRIPTION)
        ),
        String::new(),
    ]
}

/// Replace the surface content with the sorted project listing.
pub fn render_projects(sink: &dyn OutputSink, compact_columns: u16, mut repos: Vec<RepoSummary>) {
    sort_by_recent_push(&mut repos);
    sink.clear();
    announce_banner(sink, compact_columns);
    sink.writeln("");
    sink.writeln(&emphasis(HEADING, StyleColor::Magenta));
    sink.writeln("");
    for repo in &repos {
        for line in repo_block(repo) {
            sink.writeln(&line);
        }
    }
    sink.writeln(&emphasis(FOOTER, StyleColor::Gray));
    sink.writeln("");
    write_prompt(sink);
}

/// Report a failed fetch on the surface and hand the prompt back.
///
/// The prompt drawn after `projects` is still open, so the report starts on a
/// fresh line.
pub fn render_fetch_failure(sink: &dyn OutputSink, err: &FetchError) {
    sink.writeln("");
    sink.writeln(&format!(
        " {}",
        emphasis(
            &format!("Failed to fetch projects: {}", surface_safe(&err.to_string())),
            StyleColor::Red
        )
    ));
    sink.writeln("");
    write_prompt(sink);
}

/// Flatten remote error text onto one line: whitespace controls become
/// spaces, other control characters are dropped and long text is cut.
fn surface_safe(text: &str) -> String {
    let mut cleaned: String = text
        .chars()
        .filter_map(|ch| match ch {
            '\n' | '\r' | '\t' => Some(' '),
            ch if ch.is_control() => None,
            ch => Some(ch),
        })
        .collect();
    if let Some((cut, _)) = cleaned.char_indices().nth(MAX_ERROR_CHARS) {
        cleaned.truncate(cut);
        cleaned.push_str("...");
    }
    cleaned
}
