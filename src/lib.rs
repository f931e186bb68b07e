//! github-desktop-notifications - GitHub notifications on the desktop
//!
//! Polls the authenticated user's GitHub notification feed every ten
//! minutes and mirrors it onto the freedesktop notification tray: unread
//! notifications are shown, notifications read upstream are closed again.
//!
//! # Architecture
//!
//! The crate follows the same layering as a hexagonal service:
//!
//! - **Domain Layer** (`domain`): notification models, errors and the port
//!   traits the core talks through (feed, display, ticker)
//! - **Service Layer** (`services`): the formatter and the reconciler
//! - **Adapter Layer** (`adapters`): GitHub REST client, desktop notifier,
//!   wall-clock ticker
//! - **Infrastructure Layer** (`infrastructure`): configuration, logging and
//!   credential loading
//!
//! # Example
//!
//! ```ignore
//! use github_desktop_notifications::adapters::clock::IntervalTicker;
//! use github_desktop_notifications::services::{Reconciler, POLL_INTERVAL};
//!
//! let mut reconciler = Reconciler::new(feed, display);
//! reconciler.run(&mut IntervalTicker::new(POLL_INTERVAL)).await;
//! ```

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    Config, DisplayHandle, LocalNotification, NotificationReason, RemoteNotification, Subject,
    SubjectKind,
};
pub use domain::ports::{NotificationDisplay, NotificationFeed, Ticker};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{format_notification, Reconciler, TickReport, POLL_INTERVAL};
