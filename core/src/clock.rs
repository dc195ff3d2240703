//! Clock trait - abstracts time operations for testability.

use chrono::{DateTime, Utc};

/// Injected time source.
///
/// Production uses [`SystemClock`]; tests can pin a fixed instant to make
/// created-at assertions deterministic.
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
