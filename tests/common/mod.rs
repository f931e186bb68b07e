//! Common test utilities for integration tests
//!
//! Scripted fakes for the reconciler's ports and a notification builder.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use github_desktop_notifications::domain::models::RepositoryRef;
use github_desktop_notifications::{
    DisplayHandle, DomainError, DomainResult, LocalNotification, NotificationDisplay,
    NotificationFeed, NotificationReason, RemoteNotification, Subject, SubjectKind, Ticker,
};

/// Build a notification about issue `#<id>` in `o/r`.
#[allow(dead_code)]
pub fn notification(id: &str, unread: bool) -> RemoteNotification {
    RemoteNotification {
        id: id.to_string(),
        unread,
        reason: NotificationReason::Comment,
        repository: RepositoryRef {
            full_name: "o/r".to_string(),
        },
        subject: Subject {
            kind: SubjectKind::Issue,
            title: format!("Issue {id}"),
            url: Some(format!("https://api.github.com/repos/o/r/issues/{id}")),
        },
        updated_at: None,
    }
}

/// Feed that replays queued responses, then returns an empty list.
#[derive(Clone, Default)]
pub struct ScriptedFeed {
    responses: Arc<Mutex<VecDeque<DomainResult<Vec<RemoteNotification>>>>>,
    fetches: Arc<AtomicU32>,
}

#[allow(dead_code)]
impl ScriptedFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, notifications: Vec<RemoteNotification>) {
        self.responses.lock().unwrap().push_back(Ok(notifications));
    }

    pub fn push_err(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(DomainError::FeedUnavailable(message.to_string())));
    }

    pub fn fetches(&self) -> u32 {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationFeed for ScriptedFeed {
    async fn fetch_all(&self) -> DomainResult<Vec<RemoteNotification>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// One call made against the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Show {
        summary: String,
        body: String,
        handle: DisplayHandle,
    },
    ShowFailed {
        summary: String,
    },
    Close(DisplayHandle),
    CloseFailed(DisplayHandle),
}

/// Display that records every call and hands out increasing handles.
#[derive(Clone, Default)]
pub struct RecordingDisplay {
    calls: Arc<Mutex<Vec<DisplayCall>>>,
    next_handle: Arc<AtomicU32>,
    fail_shows: Arc<AtomicBool>,
    fail_closes: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<DisplayCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Summaries of successful shows, in call order.
    pub fn shown_summaries(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                DisplayCall::Show { summary, .. } => Some(summary),
                _ => None,
            })
            .collect()
    }

    /// Handles of successful closes, in call order.
    pub fn closed_handles(&self) -> Vec<DisplayHandle> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                DisplayCall::Close(handle) => Some(handle),
                _ => None,
            })
            .collect()
    }

    pub fn fail_shows(&self, fail: bool) {
        self.fail_shows.store(fail, Ordering::SeqCst);
    }

    pub fn fail_closes(&self, fail: bool) {
        self.fail_closes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl NotificationDisplay for RecordingDisplay {
    async fn show(&self, notification: &LocalNotification) -> DomainResult<DisplayHandle> {
        if self.fail_shows.load(Ordering::SeqCst) {
            self.calls.lock().unwrap().push(DisplayCall::ShowFailed {
                summary: notification.summary.clone(),
            });
            return Err(DomainError::Display("no notification daemon".to_string()));
        }

        let handle = DisplayHandle(self.next_handle.fetch_add(1, Ordering::SeqCst) + 1);
        self.calls.lock().unwrap().push(DisplayCall::Show {
            summary: notification.summary.clone(),
            body: notification.body.clone(),
            handle,
        });
        Ok(handle)
    }

    async fn close(&self, handle: DisplayHandle) -> DomainResult<()> {
        if self.fail_closes.load(Ordering::SeqCst) {
            self.calls
                .lock()
                .unwrap()
                .push(DisplayCall::CloseFailed(handle));
            return Err(DomainError::Display("no notification daemon".to_string()));
        }

        self.calls.lock().unwrap().push(DisplayCall::Close(handle));
        Ok(())
    }
}

/// Ticker that fires a fixed number of times without waiting.
#[allow(dead_code)]
pub struct CountedTicker {
    remaining: usize,
}

#[allow(dead_code)]
impl CountedTicker {
    pub fn new(ticks: usize) -> Self {
        Self { remaining: ticks }
    }
}

#[async_trait]
impl Ticker for CountedTicker {
    async fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}
