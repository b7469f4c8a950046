//! Notification storage trait

use super::error::NotificationError;
use super::models::{Notification, NotificationId, NotificationKind};

pub type Result<T> = std::result::Result<T, NotificationError>;

/// Trait for notification storage operations.
///
/// A store owns the notifications of one session and is the only place
/// where they get created, marked as read and deleted.
pub trait NotificationStore: Send {
    /// Creates a notification with the next unused id and appends it.
    /// Returns the created notification.
    fn create_notification(
        &mut self,
        message: String,
        kind: NotificationKind,
    ) -> Result<Notification>;

    /// Same as [`create_notification`](Self::create_notification), for a kind
    /// given as text. Fails with `InvalidVariant` on an unknown tag.
    fn create_notification_from_tag(&mut self, message: String, tag: &str) -> Result<Notification> {
        let kind = tag.parse::<NotificationKind>()?;
        self.create_notification(message, kind)
    }

    /// Get all notifications, in creation order.
    fn list_notifications(&self) -> Vec<Notification>;

    /// Get a single notification by ID.
    /// Returns `NotFound` if it doesn't exist.
    fn find_notification(&self, id: NotificationId) -> Result<Notification>;

    /// Mark a notification as read. Returns the updated notification.
    /// Marking an already read notification succeeds without changes.
    fn mark_notification_read(&mut self, id: NotificationId) -> Result<Notification>;

    /// Delete a notification. Returns whether something was removed.
    fn delete_notification(&mut self, id: NotificationId) -> bool;

    /// Get count of unread notifications.
    fn unread_count(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
