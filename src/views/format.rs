//! Time formatting for reading timestamps

use chrono::{DateTime, Local, TimeZone, Utc};

/// Shown wherever a timestamp is missing
pub const UNKNOWN_TIME: &str = "Unknown";

const ABSOLUTE_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";

/// Format a timestamp relative to `now`, e.g. "5 min ago" or "2 days ago".
///
/// Minutes, hours and days are each rounded from the previous unit.
pub fn format_relative(ts: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(ts) = ts else {
        return UNKNOWN_TIME.to_string();
    };

    let diff_ms = (now - ts).num_milliseconds() as f64;
    let minutes = (diff_ms / 60_000.0).round();
    if minutes < 1.0 {
        return "Just now".to_string();
    }
    if minutes < 60.0 {
        return format!("{} min ago", minutes as i64);
    }

    let hours = (minutes / 60.0).round() as i64;
    if hours < 24 {
        return format!("{} hour{} ago", hours, plural(hours));
    }

    let days = (hours as f64 / 24.0).round() as i64;
    format!("{} day{} ago", days, plural(days))
}

fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

/// Format a timestamp in the viewer's local time zone
pub fn format_absolute(ts: Option<DateTime<Utc>>) -> String {
    format_absolute_in(ts, &Local)
}

/// Format a timestamp in a given time zone
pub fn format_absolute_in<Tz>(ts: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match ts {
        Some(ts) => ts.with_timezone(tz).format(ABSOLUTE_FORMAT).to_string(),
        None => UNKNOWN_TIME.to_string(),
    }
}

/// Format a moisture percentage without a trailing ".0"
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}%", value)
    } else {
        format!("{}%", value)
    }
}
