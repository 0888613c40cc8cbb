//! Calendar-day boundary math.
//!
//! Converts user-supplied calendar dates into inclusive epoch-second
//! bounds covering a full local day, and renders stored timestamps back
//! into `YYYY-MM-DD` strings for API responses.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

/// Resolves a naive local datetime to a concrete instant. DST gaps fall
/// back to interpreting the value as UTC, ambiguous times take the
/// earlier offset.
fn resolve_local<Tz: TimeZone>(tz: &Tz, dt: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&dt) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz.from_utc_datetime(&dt),
    }
}

/// Epoch seconds of `date` at 00:00:00 in `tz`.
pub fn day_start_in<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> i64 {
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    resolve_local(tz, midnight).timestamp()
}

/// Epoch seconds of `date` at 23:59:59 in `tz` (floor of the last
/// millisecond of the day).
pub fn day_end_in<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> i64 {
    // 23:59:59 is always a representable time of day.
    let last_second = date
        .and_hms_opt(23, 59, 59)
        .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN));
    resolve_local(tz, last_second).timestamp()
}

/// Converts an optional start/end calendar date pair into inclusive
/// epoch-second bounds. Each bound is computed independently; absent
/// dates propagate as `None` (no filtering on that side).
pub fn day_range_in<Tz: TimeZone>(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    tz: &Tz,
) -> (Option<i64>, Option<i64>) {
    (
        start.map(|d| day_start_in(d, tz)),
        end.map(|d| day_end_in(d, tz)),
    )
}

/// Local-time variant used by the service layer.
pub fn day_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> (Option<i64>, Option<i64>) {
    day_range_in(start, end, &Local)
}

/// Renders an epoch-second timestamp as a local `YYYY-MM-DD` string.
pub fn date_string(timestamp: i64) -> String {
    match Local.timestamp_opt(timestamp, 0) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.format("%Y-%m-%d").to_string(),
        LocalResult::None => DateTime::from_timestamp(timestamp, 0)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    }
}
