//! Notification formatter.
//!
//! Turns one GitHub notification into the summary and body shown on the
//! desktop. Pure and deterministic: no state, no I/O.

use crate::domain::models::{
    LocalNotification, NotificationReason, RemoteNotification, Subject, SubjectKind,
};

/// Short reference to the subject: `#42` for issues, `!42` for pull
/// requests, empty for everything else.
pub fn subject_id(subject: &Subject) -> String {
    match subject.kind {
        SubjectKind::Issue => format!("#{}", subject.number()),
        SubjectKind::PullRequest => format!("!{}", subject.number()),
        SubjectKind::Release | SubjectKind::Other(_) => String::new(),
    }
}

/// Map a remote notification to desktop notification content.
///
/// Summary defaults to the repository name and body to `"<reason>: <type>"`.
/// Comments, mentions and watched issues/PRs/releases get friendlier text:
///
/// | reason     | subject     | summary          | body                  |
/// |------------|-------------|------------------|-----------------------|
/// | comment    | any         | `repo subjectID` | `💬 New Comment`      |
/// | mention    | any         | `repo subjectID` | `💬 You were mentioned` |
/// | subscribed | PullRequest | `repo subjectID` | `🎁 title`            |
/// | subscribed | Issue       | `repo subjectID` | `🐞 title`            |
/// | subscribed | Release     | `repo`           | `🚀 Released title`   |
pub fn format_notification(notification: &RemoteNotification) -> LocalNotification {
    let repo = notification.repository.full_name.as_str();
    let subject = &notification.subject;
    let with_id = || format!("{repo} {}", subject_id(subject));

    let (summary, body) = match (&notification.reason, &subject.kind) {
        (NotificationReason::Comment, _) => (with_id(), "💬 New Comment".to_string()),
        (NotificationReason::Mention, _) => (with_id(), "💬 You were mentioned".to_string()),
        (NotificationReason::Subscribed, SubjectKind::PullRequest) => {
            (with_id(), format!("🎁 {}", subject.title))
        }
        (NotificationReason::Subscribed, SubjectKind::Issue) => {
            (with_id(), format!("🐞 {}", subject.title))
        }
        (NotificationReason::Subscribed, SubjectKind::Release) => {
            (repo.to_string(), format!("🚀 Released {}", subject.title))
        }
        (reason, kind) => (repo.to_string(), format!("{reason}: {kind}")),
    };

    LocalNotification::new(summary, body)
}
