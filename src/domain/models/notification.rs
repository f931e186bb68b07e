//! Notification domain model.
//!
//! A [`RemoteNotification`] is one entry of the GitHub notification feed.
//! A [`LocalNotification`] is what gets put on the desktop for it, and the
//! [`DisplayHandle`] is the desktop's name for that popup.

use std::fmt;

use chrono::{DateTime, Utc};

/// Application label attached to every desktop notification.
pub const APP_NAME: &str = "GitHub";

/// Category hint attached to every desktop notification.
pub const CATEGORY: &str = "github";

/// Why GitHub raised a notification.
///
/// Only the reasons the formatter treats specially get their own variant;
/// everything else is kept verbatim in [`NotificationReason::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NotificationReason {
    /// A comment was posted on a thread the user participates in
    Comment,
    /// The user was @mentioned
    Mention,
    /// The user watches the repository
    Subscribed,
    /// Any other reason string, e.g. `review_requested` or `ci_activity`
    Other(String),
}

impl NotificationReason {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Comment => "comment",
            Self::Mention => "mention",
            Self::Subscribed => "subscribed",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for NotificationReason {
    fn from(raw: &str) -> Self {
        match raw {
            "comment" => Self::Comment,
            "mention" => Self::Mention,
            "subscribed" => Self::Subscribed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for NotificationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of entity a notification is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubjectKind {
    Issue,
    PullRequest,
    Release,
    /// Discussions, commits, check suites and whatever GitHub adds next
    Other(String),
}

impl SubjectKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Issue => "Issue",
            Self::PullRequest => "PullRequest",
            Self::Release => "Release",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for SubjectKind {
    fn from(raw: &str) -> Self {
        match raw {
            "Issue" => Self::Issue,
            "PullRequest" => Self::PullRequest,
            "Release" => Self::Release,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repository a notification belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    /// `owner/name`
    pub full_name: String,
}

/// The entity a notification is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub kind: SubjectKind,
    pub title: String,
    /// API URL of the subject. Its last path segment is the issue or pull
    /// request number. GitHub sends `null` for some subject kinds.
    pub url: Option<String>,
}

impl Subject {
    /// Last path segment of the subject URL, the way `basename` computes it.
    ///
    /// Trailing slashes are ignored; an all-slash URL yields `/` and an empty
    /// one yields `.`. A missing URL yields an empty string.
    pub fn number(&self) -> &str {
        let Some(url) = self.url.as_deref() else {
            return "";
        };
        if url.is_empty() {
            return ".";
        }
        let trimmed = url.trim_end_matches('/');
        if trimmed.is_empty() {
            return "/";
        }
        trimmed.rsplit('/').next().unwrap_or(trimmed)
    }
}

/// One entry of the remote notification feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteNotification {
    /// Stable identity of the notification thread
    pub id: String,
    /// True while the notification has not been marked read upstream
    pub unread: bool,
    pub reason: NotificationReason,
    pub repository: RepositoryRef,
    pub subject: Subject,
    /// When the thread last changed, if GitHub reported a parseable time
    pub updated_at: Option<DateTime<Utc>>,
}

/// Content of one desktop notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalNotification {
    pub summary: String,
    pub body: String,
    pub app_name: &'static str,
    pub category: &'static str,
}

impl LocalNotification {
    /// Build a notification carrying the fixed app label and category.
    pub fn new(summary: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            body: body.into(),
            app_name: APP_NAME,
            category: CATEGORY,
        }
    }
}

/// Opaque identifier of a notification currently on the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayHandle(pub u32);

impl fmt::Display for DisplayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
