pub mod config;
pub mod notification;

pub use config::{Config, GitHubConfig, LogFormat, LoggingConfig, RotationPolicy};
pub use notification::{
    DisplayHandle, LocalNotification, NotificationReason, RemoteNotification, RepositoryRef,
    Subject, SubjectKind, APP_NAME, CATEGORY,
};
