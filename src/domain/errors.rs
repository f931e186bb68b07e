//! Domain errors for the notification reconciler.

use thiserror::Error;

/// Errors raised at the boundaries of the reconciliation core.
///
/// Feed errors abort a single tick; display errors are counted and
/// otherwise ignored by the reconciler.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Notification feed unavailable: {0}")]
    FeedUnavailable(String),

    #[error("Notification feed returned {status}: {body}")]
    FeedResponse { status: u16, body: String },

    #[error("Malformed notification payload: {0}")]
    MalformedPayload(String),

    #[error("Desktop notification failed: {0}")]
    Display(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedPayload(err.to_string())
    }
}
