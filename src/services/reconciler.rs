//! Poll/reconcile loop.
//!
//! Each tick fetches the full notification feed and converges the desktop
//! onto it: unread notifications are shown, notifications that were shown
//! and are now read get closed. The map from notification id to display
//! handle is owned by the [`Reconciler`] and lives only as long as it does.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::{DisplayHandle, RemoteNotification};
use crate::domain::ports::{NotificationDisplay, NotificationFeed, Ticker};
use crate::services::formatter::format_notification;

/// Time between two polls of the feed.
pub const POLL_INTERVAL: Duration = Duration::from_secs(10 * 60);

/// Outcome of one successful tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Records returned by the feed
    pub fetched: usize,
    /// Notifications put on screen
    pub shown: usize,
    /// Notifications taken off screen
    pub closed: usize,
    /// Show calls that failed; no state was recorded for them
    pub show_failures: usize,
    /// Close calls that failed; their state entries were kept
    pub close_failures: usize,
}

/// Keeps the desktop in step with the GitHub notification feed.
pub struct Reconciler<F, D>
where
    F: NotificationFeed,
    D: NotificationDisplay,
{
    feed: F,
    display: D,
    shown: HashMap<String, DisplayHandle>,
    ticks: u64,
}

impl<F, D> Reconciler<F, D>
where
    F: NotificationFeed,
    D: NotificationDisplay,
{
    /// Create a reconciler with nothing on screen.
    pub fn new(feed: F, display: D) -> Self {
        Self {
            feed,
            display,
            shown: HashMap::new(),
            ticks: 0,
        }
    }

    /// Notifications currently on screen, keyed by notification id.
    pub fn shown(&self) -> &HashMap<String, DisplayHandle> {
        &self.shown
    }

    /// Number of ticks processed so far, failed ones included.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Poll on every tick until the ticker runs out.
    ///
    /// Fetch failures are logged and the tick is skipped; nothing ends the
    /// loop except an exhausted ticker.
    pub async fn run<T: Ticker>(&mut self, ticker: &mut T) {
        info!(
            interval_secs = POLL_INTERVAL.as_secs(),
            "notification poller started"
        );

        while ticker.tick().await {
            match self.run_tick().await {
                Ok(report) => info!(
                    tick = self.ticks,
                    fetched = report.fetched,
                    shown = report.shown,
                    closed = report.closed,
                    on_screen = self.shown.len(),
                    "tick complete"
                ),
                Err(e) => warn!(
                    tick = self.ticks,
                    error = %e,
                    "failed to fetch notifications, skipping tick"
                ),
            }
        }

        info!(ticks = self.ticks, "ticker exhausted, poller stopped");
    }

    /// Fetch the feed once and reconcile the desktop against it.
    ///
    /// Records are walked oldest first. On fetch failure the state is left
    /// untouched and no display call is made.
    #[instrument(skip_all)]
    pub async fn run_tick(&mut self) -> DomainResult<TickReport> {
        self.ticks += 1;
        let notifications = self.feed.fetch_all().await?;

        let mut report = TickReport {
            fetched: notifications.len(),
            ..TickReport::default()
        };

        for notification in notifications.iter().rev() {
            if notification.unread {
                self.show(notification, &mut report).await;
            } else if let Some(&handle) = self.shown.get(&notification.id) {
                self.close(&notification.id, handle, &mut report).await;
            }
        }

        Ok(report)
    }

    async fn show(&mut self, notification: &RemoteNotification, report: &mut TickReport) {
        let local = format_notification(notification);
        match self.display.show(&local).await {
            Ok(handle) => {
                debug!(
                    id = %notification.id,
                    %handle,
                    summary = %local.summary,
                    updated_at = ?notification.updated_at,
                    "shown"
                );
                self.shown.insert(notification.id.clone(), handle);
                report.shown += 1;
            }
            Err(e) => {
                debug!(id = %notification.id, error = %e, "show failed, ignoring");
                report.show_failures += 1;
            }
        }
    }

    async fn close(&mut self, id: &str, handle: DisplayHandle, report: &mut TickReport) {
        match self.display.close(handle).await {
            Ok(()) => {
                debug!(id, %handle, "closed");
                self.shown.remove(id);
                report.closed += 1;
            }
            Err(e) => {
                debug!(id, %handle, error = %e, "close failed, ignoring");
                report.close_failures += 1;
            }
        }
    }
}
