//! Pure date helpers shared by the lifecycle logic and the models
//!
//! Everything here is total: bad input degrades to a sentinel or `None`,
//! never a panic. The backend transmits ISO-8601 timestamps but form inputs
//! produce bare `YYYY-MM-DD` strings, so both shapes parse.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// Default loan duration when no due date is chosen
pub const BORROW_DURATION_DAYS: i64 = 14;

/// Parse a timestamp leniently: RFC 3339 first, then a bare calendar date
/// (interpreted as midnight UTC). Returns `None` for anything else.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Render a date for display.
///
/// Absent input and unparseable input stay distinguishable: `None` (or an
/// empty string) renders as `"N/A"`, garbage renders as `"Invalid Date"`.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return "N/A".to_string();
    };
    if raw.trim().is_empty() {
        return "N/A".to_string();
    }
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%b %d, %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Due date `days` from now
pub fn calculate_due_date(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}

/// Whole days elapsed since `past`, clamped at zero
pub fn whole_days_since(past: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - past).num_days().max(0)
}

/// Serde helper: decode an optional timestamp field leniently.
///
/// The backend contract is unstable enough that a single malformed date must
/// not fail deserialization of a whole list; it decodes to `None` instead.
pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}
