//! Repository-list collaborator used by the `projects` command.
//!
//! The session only depends on [`RepoSource`]; [`GitHubClient`] is the
//! production implementation and tests substitute canned lists.

use crate::error::FetchError;
use async_trait::async_trait;

mod client;
mod repos;

pub use client::GitHubClient;
pub use repos::{parse_repo_list, sort_by_recent_push, RepoSummary};

/// Source of repository summaries.
///
/// Each call performs a fresh fetch; nothing is cached between invocations.
#[async_trait]
pub trait RepoSource: Send + Sync {
    async fn fetch_repos(&self) -> Result<Vec<RepoSummary>, FetchError>;
}
