//! Night-hour computation.
//!
//! Night hours are the overlap between the worked interval and a nightly
//! window anchored to the reference date: from the configured start hour on
//! the reference date through the configured end hour on the following date.
//! They are informational and never subtract from the regular or overtime
//! buckets.

use chrono::{Duration, NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::config::NightWindow;

use super::interval::WorkInterval;

/// A whole-hour time of day, with out-of-range config values clamped to 23:00.
pub(crate) fn on_the_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour.min(23), 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Calculates the night hours for a day.
///
/// Computes the interval-intersection of the worked interval with the
/// nightly window anchored to `reference_date`. When no usable punch pair
/// exists, falls back to the pre-categorized night bucket supplied by the
/// upstream payload.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::{WorkInterval, calculate_night_hours};
/// use hours_engine::config::NightWindow;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let interval = WorkInterval {
///     start: "2025-03-10T20:00:00".parse::<NaiveDateTime>().unwrap(),
///     end: "2025-03-10T23:00:00".parse::<NaiveDateTime>().unwrap(),
/// };
/// let night = calculate_night_hours(
///     Some(&interval),
///     NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
///     NightWindow { start_hour: 21, end_hour: 6 },
///     Decimal::ZERO,
/// );
/// assert_eq!(night, Decimal::new(20, 1)); // 2.0 hours
/// ```
pub fn calculate_night_hours(
    interval: Option<&WorkInterval>,
    reference_date: NaiveDate,
    window: NightWindow,
    reported_night_hours: Decimal,
) -> Decimal {
    let Some(interval) = interval else {
        return reported_night_hours;
    };

    let window_start = reference_date.and_time(on_the_hour(window.start_hour));
    let window_end = (reference_date + Duration::days(1)).and_time(on_the_hour(window.end_hour));

    interval.overlap_hours(window_start, window_end)
}
