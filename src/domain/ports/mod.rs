//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the async trait interfaces the reconciler talks through:
//! - NotificationFeed: the remote notification listing
//! - NotificationDisplay: the desktop notification service
//! - Ticker: the wait between two polls
//!
//! These traits keep the reconciliation core independent of GitHub, D-Bus and
//! the wall clock, so tests can drive it with scripted fakes.

pub mod notification_display;
pub mod notification_feed;
pub mod ticker;

pub use notification_display::NotificationDisplay;
pub use notification_feed::NotificationFeed;
pub use ticker::Ticker;
