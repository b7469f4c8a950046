//! Channels a delivered notification is emitted through.

use tracing::info;

use super::models::NotificationKind;

/// Output channel for notification deliveries.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Courier {
    /// Emits an already rendered delivery line for a notification of `kind`.
    fn deliver(&mut self, kind: NotificationKind, line: &str);
}

/// Prints deliveries to the terminal, colored by kind.
#[derive(Debug, Default)]
pub struct ConsoleCourier;

impl Courier for ConsoleCourier {
    fn deliver(&mut self, kind: NotificationKind, line: &str) {
        info!(kind = %kind, "Delivering notification");
        crate::cli_style::print_delivery(kind, line);
    }
}

/// Keeps every delivery in memory instead of printing it.
#[derive(Debug, Default)]
pub struct RecordingCourier {
    pub deliveries: Vec<(NotificationKind, String)>,
}

impl Courier for RecordingCourier {
    fn deliver(&mut self, kind: NotificationKind, line: &str) {
        self.deliveries.push((kind, line.to_string()));
    }
}
