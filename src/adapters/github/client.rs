//! GitHub HTTP client for the notifications API.
//!
//! Wraps `GET /notifications` of the GitHub REST API v3 and maps HTTP and
//! network failures to [`DomainError`] variants the reconciler can log.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{GitHubConfig, RemoteNotification};
use crate::domain::ports::NotificationFeed;

use super::models::GitHubNotification;

/// HTTP client for the GitHub notifications API.
#[derive(Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client.
    http: Client,
    /// Personal access token sent as a bearer token.
    token: String,
    /// API base URL without a trailing slash.
    api_url: String,
}

impl fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubClient")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Create a client for the configured API endpoint.
    pub fn new(token: String, config: &GitHubConfig) -> DomainResult<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                DomainError::FeedUnavailable(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            token,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// List the authenticated user's notification threads, newest first.
    ///
    /// With `all` set, threads already marked read are included. Only the
    /// first page is requested.
    pub async fn list_notifications(&self, all: bool) -> DomainResult<Vec<GitHubNotification>> {
        let url = format!("{}/notifications?all={all}", self.api_url);

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| {
                DomainError::FeedUnavailable(format!(
                    "GitHub list_notifications request failed: {e}"
                ))
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::FeedResponse { status, body });
        }

        resp.json::<Vec<GitHubNotification>>().await.map_err(|e| {
            DomainError::MalformedPayload(format!("GitHub list_notifications parse failed: {e}"))
        })
    }
}

#[async_trait]
impl NotificationFeed for GitHubClient {
    async fn fetch_all(&self) -> DomainResult<Vec<RemoteNotification>> {
        let threads = self.list_notifications(true).await?;
        Ok(threads.into_iter().map(RemoteNotification::from).collect())
    }
}
