// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

/// Fixed reference instant for deterministic fixtures.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// `minutes` before [`fixed_now`].
pub fn minutes_ago(minutes: i64) -> DateTime<Utc> {
    fixed_now() - Duration::minutes(minutes)
}
