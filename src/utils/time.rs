use chrono::{DateTime, Local, TimeZone};
use std::time::{SystemTime, UNIX_EPOCH};

/// Layout of the `lastActivity` column: `10/19/2026, 3:04:05 PM`
pub const ACTIVITY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

/// Human-readable local time of "now", stamped on every roster mutation
pub fn activity_timestamp() -> String {
    format_activity(&Local::now())
}

pub fn format_activity<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(ACTIVITY_FORMAT).to_string()
}
