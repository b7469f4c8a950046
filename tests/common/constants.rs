//! Shared constants for end-to-end tests

/// Username every test session is opened with
pub const TEST_USER: &str = "tester";

/// Messages from the reference walkthrough
pub const PAYMENT_MESSAGE: &str = "Pago recibido";
pub const DISK_MESSAGE: &str = "Disco lleno";
pub const MAINTENANCE_MESSAGE: &str = "Scheduled maintenance tonight";
