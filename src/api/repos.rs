//! Repository summary wire model.

use crate::error::FetchError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use tracing::warn;

/// One entry of the repo-list response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    #[serde(rename = "html_url")]
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Absent for repositories that were never pushed to, or whose timestamp
    /// could not be read.
    #[serde(
        rename = "pushed_at",
        default,
        deserialize_with = "deserialize_timestamp"
    )]
    pub last_pushed_at: Option<DateTime<Utc>>,
}

impl RepoSummary {
    /// Description text, or `None` when missing or empty.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|text| !text.is_empty())
    }
}

/// Decode a JSON array of repositories.
pub fn parse_repo_list(body: &str) -> Result<Vec<RepoSummary>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Most recently pushed first; equal timestamps keep their input order.
pub fn sort_by_recent_push(repos: &mut [RepoSummary]) {
    // `sort_by` is stable, which preserves collaborator order on ties.
    repos.sort_by(|a, b| b.last_pushed_at.cmp(&a.last_pushed_at));
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let parsed = parse_timestamp(&raw);
    if parsed.is_none() {
        warn!(pushed_at = raw.as_str(), "unreadable push timestamp; sorting last");
    }
    Ok(parsed)
}

/// Parse RFC 3339 timestamps, falling back to bare `YYYY-MM-DD` dates.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
