//! Errors raised by notification operations.

use thiserror::Error;

use super::models::NotificationId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("Invalid notification kind '{0}'. Valid kinds are: user, alert, system")]
    InvalidVariant(String),

    #[error("Notification {0} not found")]
    NotFound(NotificationId),

    #[error("Invalid notification id: '{0}'")]
    InvalidId(String),

    #[error("Input cannot be empty")]
    EmptyInput,
}

impl NotificationError {
    /// Lookup misses, either a well formed id that is absent or input that
    /// could never name a notification.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NotificationError::NotFound(_) | NotificationError::InvalidId(_)
        )
    }
}
