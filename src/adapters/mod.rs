//! Adapters for external systems.

pub mod clock;
pub mod desktop;
pub mod github;
