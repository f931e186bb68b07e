//! GitHub notifications API response models.
//!
//! These structs map to the JSON payload of `GET /notifications`. They are
//! internal to the adapter and converted into
//! [`RemoteNotification`](crate::domain::models::RemoteNotification) before
//! anything else sees them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::{
    NotificationReason, RemoteNotification, RepositoryRef, Subject, SubjectKind,
};

/// A notification thread returned by the GitHub API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubNotification {
    /// Thread identifier (a numeric string).
    pub id: String,
    /// Whether the thread still has unread activity.
    pub unread: bool,
    /// Why the user received the notification, e.g. "mention".
    pub reason: String,
    /// ISO 8601 timestamp of the last update.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Repository the thread belongs to.
    pub repository: GitHubRepository,
    /// The issue, pull request, release, ... the thread is about.
    pub subject: GitHubSubject,
}

/// The subset of the repository object the adapter needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepository {
    /// `owner/name`
    pub full_name: String,
}

/// Subject of a notification thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubSubject {
    pub title: String,
    /// API URL of the subject; null for discussions and check suites.
    #[serde(default)]
    pub url: Option<String>,
    /// "Issue", "PullRequest", "Release", "Commit", ...
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<GitHubNotification> for RemoteNotification {
    fn from(n: GitHubNotification) -> Self {
        Self {
            reason: NotificationReason::from(n.reason.as_str()),
            updated_at: n
                .updated_at
                .as_deref()
                .and_then(|ts| ts.parse::<DateTime<Utc>>().ok()),
            repository: RepositoryRef {
                full_name: n.repository.full_name,
            },
            subject: Subject {
                kind: SubjectKind::from(n.subject.kind.as_str()),
                title: n.subject.title,
                url: n.subject.url,
            },
            id: n.id,
            unread: n.unread,
        }
    }
}
