//! In-memory notification store, lives as long as the session does.

use tracing::{debug, info};

use super::error::NotificationError;
use super::models::{Notification, NotificationId, NotificationKind};
use super::store::{NotificationStore, Result};

const FIRST_ID: u64 = 1;

pub struct InMemoryNotificationStore {
    next_id: u64,
    items: Vec<Notification>,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self {
            next_id: FIRST_ID,
            items: Vec::new(),
        }
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.items.iter().position(|n| n.id() == id)
    }
}

impl Default for InMemoryNotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationStore for InMemoryNotificationStore {
    fn create_notification(
        &mut self,
        message: String,
        kind: NotificationKind,
    ) -> Result<Notification> {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let notification = Notification::new(id, kind, message);
        self.items.push(notification.clone());
        info!("Created {} notification {}", kind, id);
        Ok(notification)
    }

    fn list_notifications(&self) -> Vec<Notification> {
        self.items.clone()
    }

    fn find_notification(&self, id: NotificationId) -> Result<Notification> {
        self.items
            .iter()
            .find(|n| n.id() == id)
            .cloned()
            .ok_or(NotificationError::NotFound(id))
    }

    fn mark_notification_read(&mut self, id: NotificationId) -> Result<Notification> {
        let notification = self
            .items
            .iter_mut()
            .find(|n| n.id() == id)
            .ok_or(NotificationError::NotFound(id))?;

        if !notification.mark_read() {
            debug!("Notification {} was already read", id);
        }
        Ok(notification.clone())
    }

    fn delete_notification(&mut self, id: NotificationId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                info!("Deleted notification {}", id);
                true
            }
            None => {
                debug!("Nothing to delete for notification {}", id);
                false
            }
        }
    }

    fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read()).count()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &InMemoryNotificationStore) -> Vec<u64> {
        store.list_notifications().iter().map(|n| n.id().0).collect()
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut store = InMemoryNotificationStore::new();
        for i in 1..=5 {
            let created = store
                .create_notification(format!("message {}", i), NotificationKind::User)
                .unwrap();
            assert_eq!(created.id(), NotificationId(i));
            assert!(!created.is_read());
        }
    }

    #[test]
    fn test_ids_are_never_reused_after_delete() {
        let mut store = InMemoryNotificationStore::new();
        store.create_notification("a".into(), NotificationKind::User).unwrap();
        store.create_notification("b".into(), NotificationKind::Alert).unwrap();
        store.create_notification("c".into(), NotificationKind::System).unwrap();

        assert!(store.delete_notification(NotificationId(3)));
        assert!(store.delete_notification(NotificationId(2)));

        let created = store.create_notification("d".into(), NotificationKind::User).unwrap();
        assert_eq!(created.id(), NotificationId(4));
        assert_eq!(ids(&store), vec![1, 4]);
    }

    #[test]
    fn test_list_keeps_creation_order() {
        let mut store = InMemoryNotificationStore::new();
        store.create_notification("A".into(), NotificationKind::User).unwrap();
        store.create_notification("X".into(), NotificationKind::Alert).unwrap();
        store.create_notification("B".into(), NotificationKind::System).unwrap();
        store.create_notification("C".into(), NotificationKind::User).unwrap();

        store.mark_notification_read(NotificationId(4)).unwrap();
        store.delete_notification(NotificationId(2));
        store.mark_notification_read(NotificationId(1)).unwrap();

        let messages: Vec<String> = store
            .list_notifications()
            .iter()
            .map(|n| n.message().to_string())
            .collect();
        assert_eq!(messages, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_mark_read_twice() {
        let mut store = InMemoryNotificationStore::new();
        store.create_notification("a".into(), NotificationKind::Alert).unwrap();

        let first = store.mark_notification_read(NotificationId(1)).unwrap();
        let second = store.mark_notification_read(NotificationId(1)).unwrap();

        assert!(first.is_read());
        assert!(second.is_read());
        assert!(store.find_notification(NotificationId(1)).unwrap().is_read());
    }

    #[test]
    fn test_delete_missing_id_leaves_store_unchanged() {
        let mut store = InMemoryNotificationStore::new();
        store.create_notification("a".into(), NotificationKind::User).unwrap();
        store.create_notification("b".into(), NotificationKind::User).unwrap();

        let before = store.list_notifications();
        assert!(!store.delete_notification(NotificationId(42)));
        assert_eq!(store.list_notifications(), before);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_empty_store_lookups() {
        let mut store = InMemoryNotificationStore::new();

        assert!(store.is_empty());
        assert!(store.list_notifications().is_empty());
        assert_eq!(
            store.find_notification(NotificationId(1)),
            Err(NotificationError::NotFound(NotificationId(1)))
        );
        assert_eq!(
            store.mark_notification_read(NotificationId(1)),
            Err(NotificationError::NotFound(NotificationId(1)))
        );
        assert!(!store.delete_notification(NotificationId(1)));
    }

    #[test]
    fn test_unread_count() {
        let mut store = InMemoryNotificationStore::new();
        store.create_notification("a".into(), NotificationKind::User).unwrap();
        store.create_notification("b".into(), NotificationKind::Alert).unwrap();
        assert_eq!(store.unread_count(), 2);

        store.mark_notification_read(NotificationId(2)).unwrap();
        store.mark_notification_read(NotificationId(2)).unwrap();
        assert_eq!(store.unread_count(), 1);

        store.delete_notification(NotificationId(1));
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn test_create_from_tag() {
        let mut store = InMemoryNotificationStore::new();

        let created = store
            .create_notification_from_tag("Disco lleno".into(), "alerta")
            .unwrap();
        assert_eq!(created.kind(), NotificationKind::Alert);

        let result = store.create_notification_from_tag("x".into(), "promo");
        assert_eq!(
            result,
            Err(NotificationError::InvalidVariant("promo".to_string()))
        );
        // A rejected tag must not consume an id.
        assert_eq!(store.len(), 1);
        let next = store.create_notification("y".into(), NotificationKind::User).unwrap();
        assert_eq!(next.id(), NotificationId(2));
    }
}
