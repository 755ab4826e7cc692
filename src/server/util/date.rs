//! Date helpers shared by the reminder scheduler and the command replies.
//!
//! All comparisons are done on UTC calendar dates. Birthdays are year-agnostic and are
//! compared in their `DD/MM` form.

use chrono::{DateTime, NaiveDate, Utc};

use crate::server::error::internal::InternalError;

/// Leap year used to render year-agnostic dates, so `29/02` stays valid.
const REFERENCE_YEAR: i32 = 2000;

/// Converts an upstream Unix timestamp (seconds) to a UTC datetime.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Converted timestamp
/// - `Err(InternalError::InvalidTimestamp)` - Timestamp outside chrono's supported range
pub fn timestamp_to_utc(timestamp: i64) -> Result<DateTime<Utc>, InternalError> {
    DateTime::from_timestamp(timestamp, 0).ok_or(InternalError::InvalidTimestamp { timestamp })
}

/// Whole calendar days from `now` until `then`.
///
/// Time of day is ignored: 23:59 today and 00:01 tomorrow are one day apart. Negative
/// when `then` is in the past.
pub fn calendar_days_until(now: DateTime<Utc>, then: DateTime<Utc>) -> i64 {
    then.date_naive()
        .signed_duration_since(now.date_naive())
        .num_days()
}

/// `DD/MM` form of a date, e.g. `01/08`.
pub fn day_month(date: DateTime<Utc>) -> String {
    date.format("%d/%m").to_string()
}

/// Long form of a year-agnostic date, e.g. `August 01`.
///
/// Returns `None` when the day does not exist in that month.
pub fn long_day_month(day: u32, month: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day).map(|date| date.format("%B %d").to_string())
}

/// Date and time as shown in event listings, e.g. `2021-07-09 06:59 UTC`.
pub fn event_time(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M UTC").to_string()
}
