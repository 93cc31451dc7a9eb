//! Timestamp Utilities
//!
//! ISO-8601 parsing and locale-aware rendering of backend timestamps.

use chrono::{DateTime, Duration, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse an ISO-8601 timestamp.
///
/// Accepted forms:
/// - RFC 3339 with an offset (`2024-01-01T00:00:00Z`, `...+02:00`)
/// - offset-less date-times, with or without seconds and fraction
///   (`2024-01-01T12:30:45.123456`, `2024-01-01T12:30`), read in the local
///   time zone
/// - date-only values (`2024-01-01`), read as UTC midnight like JS `Date`
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(from_local(naive));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(from_local(naive));
    }
    let date = raw.parse::<NaiveDate>().ok()?;
    date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive))
}

/// Resolve a wall-clock time in the local zone.
///
/// Ambiguous times take the earlier instant; times inside a DST gap move
/// forward past it.
fn from_local(naive: NaiveDateTime) -> DateTime<Utc> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(at) | LocalResult::Ambiguous(at, _) => at.with_timezone(&Utc),
        LocalResult::None => {
            let before_gap = Local.offset_from_utc_datetime(&(naive - Duration::days(1)));
            skip_gap(naive, before_gap)
        }
    }
}

/// Read a skipped wall-clock time with the offset in force before the gap
fn skip_gap(naive: NaiveDateTime, before_gap: FixedOffset) -> DateTime<Utc> {
    let utc = naive - Duration::seconds(i64::from(before_gap.local_minus_utc()));
    Utc.from_utc_datetime(&utc)
}

/// Render a timestamp as a local date/time string.
///
/// In the browser this defers to `Date.prototype.toLocaleString()` so the
/// user's locale decides the layout.
#[cfg(target_arch = "wasm32")]
pub fn format_local(at: &DateTime<Utc>) -> String {
    use wasm_bindgen::JsValue;

    let date = js_sys::Date::new(&JsValue::from_f64(at.timestamp_millis() as f64));
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_local(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}
