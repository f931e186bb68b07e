//! GitHub notifications adapter.
//!
//! Reads the authenticated user's notification threads through the REST
//! API and exposes them as the [`NotificationFeed`](crate::domain::ports::NotificationFeed)
//! the reconciler polls.

pub mod client;
pub mod models;

pub use client::GitHubClient;
