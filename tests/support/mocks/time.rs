// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};
use newsdesk_core::application::ports::time::Clock;
use once_cell::sync::Lazy;

/// Fixed timestamp for deterministic tests: 2024-01-15 noon UTC.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-15T12:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone, Default)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}
