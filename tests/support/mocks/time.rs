// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use newsroom_core::application::ports::time::Clock;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Advances one second per reading so creation order is reflected in
/// timestamps without sleeping.
#[derive(Debug, Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::seconds(tick)
    }
}
