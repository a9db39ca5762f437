//! Time helpers - reporting-timezone conversions
//!
//! All timestamp/date conversions happen at the API handler layer;
//! repositories only see `i64` Unix millis and `NaiveDate`.

use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use shared::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Calendar date a timestamp falls on in the reporting timezone.
///
/// Attendance sessions are attributed to the date of their check-in,
/// not the wall-clock date at query time.
pub fn work_date_of(millis: i64, tz: Tz) -> NaiveDate {
    match Utc.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.with_timezone(&tz).date_naive(),
        None => Utc::now().with_timezone(&tz).date_naive(),
    }
}

/// Year-month pay period key (`YYYY-MM`) of a timestamp in the
/// reporting timezone
pub fn period_of(millis: i64, tz: Tz) -> String {
    work_date_of(millis, tz).format("%Y-%m").to_string()
}
