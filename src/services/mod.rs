pub mod formatter;
pub mod reconciler;

pub use formatter::format_notification;
pub use reconciler::{Reconciler, TickReport, POLL_INTERVAL};
