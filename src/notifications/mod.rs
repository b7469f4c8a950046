//! Session notifications module

mod courier;
mod error;
mod memory_store;
mod models;
mod store;

pub use courier::{ConsoleCourier, Courier, RecordingCourier};
#[cfg(any(test, feature = "mock"))]
pub use courier::MockCourier;
pub use error::NotificationError;
pub use memory_store::InMemoryNotificationStore;
pub use models::{Notification, NotificationId, NotificationKind};
pub use store::{NotificationStore, Result};
