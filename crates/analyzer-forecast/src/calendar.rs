//! Business-day calendar arithmetic.
//!
//! Weekends are skipped; no exchange holiday set is applied.

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

/// Whether the date falls on a weekday.
pub fn is_business_day(date: DateTime<Utc>) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The next business day strictly after `date`.
pub fn next_business_day(date: DateTime<Utc>) -> DateTime<Utc> {
    let mut next = date + Duration::days(1);
    while !is_business_day(next) {
        next += Duration::days(1);
    }
    next
}

/// `count` consecutive business days strictly after `start_ms`,
/// as millisecond timestamps.
pub fn business_days_after(start_ms: i64, count: usize) -> Vec<i64> {
    let mut current = DateTime::from_timestamp_millis(start_ms)
        .unwrap_or_else(|| DateTime::from_timestamp(0, 0).unwrap());

    let mut result = Vec::with_capacity(count);
    for _ in 0..count {
        current = next_business_day(current);
        result.push(current.timestamp_millis());
    }
    result
}
