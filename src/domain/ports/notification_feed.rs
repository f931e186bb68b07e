use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::RemoteNotification;

/// Port for the remote notification feed.
///
/// The feed is the source of truth on every tick: there is no incremental
/// fetch, the whole current set is returned each time.
#[async_trait]
pub trait NotificationFeed: Send + Sync {
    /// Fetch every notification, read and unread, newest first.
    ///
    /// # Errors
    /// Returns error if:
    /// - The remote cannot be reached
    /// - The remote answers with a non-success status
    /// - The payload does not match the expected shape
    async fn fetch_all(&self) -> DomainResult<Vec<RemoteNotification>>;
}
