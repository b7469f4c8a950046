//! Notifications CLI Library
//!
//! This library exposes the session core and the shell flows so the binary
//! and the end-to-end tests share them.

pub mod cli_style;
pub mod config;
pub mod notifications;
pub mod session;
pub mod shell;

// Re-export commonly used types for convenience
pub use notifications::{
    ConsoleCourier, Courier, InMemoryNotificationStore, Notification, NotificationError,
    NotificationId, NotificationKind, NotificationStore, RecordingCourier,
};
pub use session::Session;
pub use shell::{execute_command, CommandExecutionResult, Prompter};
