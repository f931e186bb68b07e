//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - Optional YAML file under the user's config directory
//! - Environment variable overrides
//! - Configuration validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
