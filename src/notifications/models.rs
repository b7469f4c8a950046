//! Notification data models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::courier::Courier;
use super::error::NotificationError;

/// Identifier assigned by a store, unique and increasing within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The delivery variant of a notification, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    User,
    Alert,
    System,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 3] = [
        NotificationKind::User,
        NotificationKind::Alert,
        NotificationKind::System,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::User => "user",
            NotificationKind::Alert => "alert",
            NotificationKind::System => "system",
        }
    }

    /// Marker prefixed to the message when the notification is delivered.
    pub fn marker(self) -> &'static str {
        match self {
            NotificationKind::User => "👤 Notification for user",
            NotificationKind::Alert => "⚠️ Alert notification",
            NotificationKind::System => "🖥️ System notification",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = NotificationError;

    /// Accepts the english tags and the spanish ones used by older menus,
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" | "usuario" => Ok(NotificationKind::User),
            "alert" | "alerta" => Ok(NotificationKind::Alert),
            "system" | "sistema" => Ok(NotificationKind::System),
            _ => Err(NotificationError::InvalidVariant(s.to_string())),
        }
    }
}

/// A session notification.
///
/// Only a store builds these; afterwards the read state is the only thing
/// that ever changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    id: NotificationId,
    kind: NotificationKind,
    message: String,
    created_at: i64,
    read_at: Option<i64>,
}

impl Notification {
    pub(crate) fn new(id: NotificationId, kind: NotificationKind, message: String) -> Self {
        Self {
            id,
            kind,
            message,
            created_at: chrono::Utc::now().timestamp(),
            read_at: None,
        }
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn read_at(&self) -> Option<i64> {
        self.read_at
    }

    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }

    /// Marks the notification as read. The first call records the read
    /// timestamp, later calls keep it. Returns whether the state changed.
    pub fn mark_read(&mut self) -> bool {
        let changed = self.read_at.is_none();
        if changed {
            self.read_at = Some(chrono::Utc::now().timestamp());
        }
        info!("Notification {} marked as read", self.id);
        changed
    }

    /// The line emitted on delivery: the kind marker followed by the message.
    pub fn delivery_line(&self) -> String {
        format!("{}: {}", self.kind.marker(), self.message)
    }

    pub fn deliver(&self, courier: &mut dyn Courier) {
        courier.deliver(self.kind, &self.delivery_line());
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} - Read: {}", self.id, self.message, self.is_read())
    }
}
