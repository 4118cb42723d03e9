//! Relative time labels ("Just now", "2 hours ago", "Yesterday").

use chrono::{DateTime, Utc};

/// Renders `timestamp` relative to `now` the way list views display it.
///
/// Timestamps in the future are treated as "Just now".
pub fn relative_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 2 {
        "Yesterday".to_string()
    } else if days < 7 {
        plural(days, "day")
    } else {
        plural(days / 7, "week")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
