// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of timestamps for created/updated/approved stamps and token
/// lifetimes.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
