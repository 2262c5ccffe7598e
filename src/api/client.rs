//! HTTP client for the GitHub repo-list endpoint.

use super::repos::parse_repo_list;
use super::{RepoSource, RepoSummary};
use crate::config::ProjectsConfig;
use crate::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

/// Client for a fixed repo-list endpoint.
pub struct GitHubClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GitHubClient {
    /// Build a client from the `[projects]` configuration.
    pub fn new(config: &ProjectsConfig) -> Self {
        Self {
            http: build_http_client(Duration::from_secs(config.timeout_secs), &config.user_agent),
            endpoint: config.endpoint.trim().to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    async fn fetch_repos(&self) -> Result<Vec<RepoSummary>, FetchError> {
        debug!(endpoint = %self.endpoint, "fetching repo list");
        let response = self
            .http
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, ACCEPT_GITHUB_JSON)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status(status, body));
        }

        let body = response.text().await?;
        parse_repo_list(&body)
    }
}

/// Build an HTTP client with timeout and user agent applied.
fn build_http_client(timeout: Duration, user_agent: &str) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent.to_string())
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
