use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{DisplayHandle, LocalNotification};

/// Port for the local desktop notification service.
#[async_trait]
pub trait NotificationDisplay: Send + Sync {
    /// Put a notification on screen and return the handle that closes it.
    async fn show(&self, notification: &LocalNotification) -> DomainResult<DisplayHandle>;

    /// Take a previously shown notification off the screen.
    async fn close(&self, handle: DisplayHandle) -> DomainResult<()>;
}
