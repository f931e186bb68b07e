//! Desktop notification adapter.
//!
//! Talks to the freedesktop.org notification service on the session bus:
//! `notify-rust` sends `Notify`, and `CloseNotification` is issued directly
//! over `zbus` so closing needs nothing but the numeric id.

use async_trait::async_trait;
use notify_rust::{Hint, Notification};
use zbus::blocking::Connection;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{DisplayHandle, LocalNotification};
use crate::domain::ports::NotificationDisplay;

const NOTIFICATIONS_SERVICE: &str = "org.freedesktop.Notifications";
const NOTIFICATIONS_PATH: &str = "/org/freedesktop/Notifications";

/// Shows and closes notifications through the session D-Bus.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub const fn new() -> Self {
        Self
    }

    /// Translate a local notification into a `notify-rust` request.
    pub fn build(notification: &LocalNotification) -> Notification {
        let mut request = Notification::new();
        request
            .summary(&notification.summary)
            .body(&notification.body)
            .appname(notification.app_name)
            .hint(Hint::Category(notification.category.to_string()));
        request
    }
}

#[async_trait]
impl NotificationDisplay for DesktopNotifier {
    async fn show(&self, notification: &LocalNotification) -> DomainResult<DisplayHandle> {
        let shown = Self::build(notification)
            .show()
            .map_err(|e| DomainError::Display(format!("Notify failed: {e}")))?;
        Ok(DisplayHandle(shown.id()))
    }

    async fn close(&self, handle: DisplayHandle) -> DomainResult<()> {
        let connection = Connection::session()
            .map_err(|e| DomainError::Display(format!("session bus unavailable: {e}")))?;
        connection
            .call_method(
                Some(NOTIFICATIONS_SERVICE),
                NOTIFICATIONS_PATH,
                Some(NOTIFICATIONS_SERVICE),
                "CloseNotification",
                &(handle.0,),
            )
            .map_err(|e| DomainError::Display(format!("CloseNotification({handle}) failed: {e}")))?;
        Ok(())
    }
}
