//! Human-readable rendering of timestamps and byte counts

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 12 * MONTH;
const LONG_TIME: i64 = 37 * YEAR;

/// Upper bound (exclusive, seconds), unit label and divisor for each step.
/// A divisor of 0 marks a fixed label.
const MAGNITUDES: &[(i64, &str, i64)] = &[
    (2, "1 second", 0),
    (MINUTE, "seconds", 1),
    (2 * MINUTE, "1 minute", 0),
    (HOUR, "minutes", MINUTE),
    (2 * HOUR, "1 hour", 0),
    (DAY, "hours", HOUR),
    (2 * DAY, "1 day", 0),
    (WEEK, "days", DAY),
    (2 * WEEK, "1 week", 0),
    (MONTH, "weeks", WEEK),
    (2 * MONTH, "1 month", 0),
    (YEAR, "months", MONTH),
    (18 * MONTH, "1 year", 0),
    (2 * YEAR, "2 years", 0),
    (LONG_TIME, "years", YEAR),
];

/// Format an epoch-seconds timestamp relative to `now` ("3 minutes ago")
pub fn relative_time(created: i64, now: DateTime<Utc>) -> String {
    let diff = now.timestamp().saturating_sub(created);
    let suffix = if diff >= 0 { "ago" } else { "from now" };
    let secs = diff.unsigned_abs();

    if secs < 1 {
        return "now".to_string();
    }

    for &(limit, label, divisor) in MAGNITUDES {
        let (limit, divisor) = (limit as u64, divisor as u64);
        if secs < limit {
            return if divisor == 0 {
                format!("{} {}", label, suffix)
            } else {
                format!("{} {} {}", secs / divisor, label, suffix)
            };
        }
    }

    format!("a long while {}", suffix)
}

/// Format a byte count with decimal (SI) units ("12 MB")
pub fn bytes(size: i64) -> String {
    const UNITS: &[&str] = &["B", "kB", "MB", "GB", "TB", "PB", "EB"];
    const BASE: f64 = 1000.0;

    let size = u64::try_from(size).unwrap_or(0);
    if size < 10 {
        return format!("{} B", size);
    }

    let exp = ((size as f64).ln() / BASE.ln()).floor() as usize;
    let exp = exp.min(UNITS.len() - 1);
    let value = (size as f64 / BASE.powi(exp as i32) * 10.0 + 0.5).floor() / 10.0;

    if value < 10.0 {
        format!("{:.1} {}", value, UNITS[exp])
    } else {
        format!("{:.0} {}", value, UNITS[exp])
    }
}
