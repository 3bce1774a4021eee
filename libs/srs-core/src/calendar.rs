//! Study-day boundaries with daily reset hour handling.
//!
//! A study day starts at `daily_reset_hour` o'clock UTC and runs until the same
//! hour on the following calendar day. With the default reset hour of 0 this
//! is simply the UTC calendar day.

use chrono::{DateTime, Duration, NaiveTime, Utc};

/// Start of the study day containing `t`.
///
/// If `t` falls before the reset hour, it still belongs to the previous
/// study day, so the boundary returned is yesterday's reset time.
///
/// # Arguments
/// * `t` - Any instant
/// * `daily_reset_hour` - Hour of day (0-23) when a new study day begins;
///   larger values are clamped to 23
pub fn start_of_day(t: DateTime<Utc>, daily_reset_hour: u32) -> DateTime<Utc> {
    let offset = Duration::hours(i64::from(daily_reset_hour.min(23)));
    let date = (t - offset).date_naive();
    date.and_time(NaiveTime::MIN).and_utc() + offset
}

/// Last representable millisecond of the study day containing `t`.
pub fn end_of_day(t: DateTime<Utc>, daily_reset_hour: u32) -> DateTime<Utc> {
    start_of_day(t, daily_reset_hour) + Duration::days(1) - Duration::milliseconds(1)
}
