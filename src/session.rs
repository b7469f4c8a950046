//! A single user's notification session.
//!
//! The session owns the store and the courier, and turns raw shell input
//! (usernames, ids typed at a prompt) into store operations.

use tracing::{info, warn};

use crate::notifications::{
    ConsoleCourier, Courier, Notification, NotificationError, NotificationId, NotificationKind,
    NotificationStore, Result,
};

/// Validates a username, rejecting empty or whitespace-only input.
/// Returns the trimmed username.
pub fn validate_username(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(NotificationError::EmptyInput);
    }
    Ok(trimmed.to_string())
}

/// Parses an id typed by the user from its leading digits, so `1abc` and
/// `2.0` read as 1 and 2. Fails with `InvalidId`, which callers treat as a
/// lookup miss, when there are no leading digits or they overflow.
pub fn parse_id(input: &str) -> Result<NotificationId> {
    let trimmed = input.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end]
        .parse::<u64>()
        .map(NotificationId)
        .map_err(|_| NotificationError::InvalidId(trimmed.to_string()))
}

pub struct Session<C: Courier = ConsoleCourier> {
    username: String,
    store: Box<dyn NotificationStore>,
    courier: C,
}

impl<C: Courier> Session<C> {
    pub fn new(username: &str, store: Box<dyn NotificationStore>, courier: C) -> Result<Self> {
        let username = validate_username(username)?;
        info!("Starting session for {}", username);
        Ok(Self {
            username,
            store,
            courier,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn courier(&self) -> &C {
        &self.courier
    }

    /// All notifications in creation order.
    pub fn view(&self) -> Vec<Notification> {
        self.store.list_notifications()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.store.unread_count()
    }

    pub fn create(&mut self, message: String, kind: NotificationKind) -> Result<Notification> {
        self.store.create_notification(message, kind)
    }

    /// Like [`create`](Self::create) with the kind given as a tag.
    /// Nothing is created when the tag is unknown.
    pub fn create_from_tag(&mut self, message: String, tag: &str) -> Result<Notification> {
        self.store
            .create_notification_from_tag(message, tag)
            .map_err(|err| {
                warn!("Rejected notification kind {:?}", tag);
                err
            })
    }

    /// Sends a notification through the session courier.
    pub fn deliver(&mut self, notification: &Notification) {
        notification.deliver(&mut self.courier);
    }

    pub fn find(&self, raw_id: &str) -> Result<Notification> {
        let id = parse_id(raw_id)?;
        self.store.find_notification(id)
    }

    pub fn mark_read(&mut self, raw_id: &str) -> Result<Notification> {
        let id = parse_id(raw_id)?;
        self.store.mark_notification_read(id)
    }

    /// Deletes by raw id. Returns whether something was removed; a missing
    /// id leaves the store untouched. Only unparsable input is an error.
    pub fn delete(&mut self, raw_id: &str) -> Result<bool> {
        let id = parse_id(raw_id)?;
        Ok(self.store.delete_notification(id))
    }
}
