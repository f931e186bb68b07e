//! Infrastructure layer module
//!
//! Process-level plumbing that sits around the reconciler:
//! - Configuration management
//! - Logging infrastructure
//! - Credentials management

pub mod config;
pub mod credentials;
pub mod logging;
