//! Domain layer for the notification reconciler
//!
//! This module contains the notification models, the domain error type and
//! the port traits that adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{DomainError, DomainResult};
