//! Saturday cutoff splitting.
//!
//! Saturday hours worked on or after the configured cutoff (and any portion
//! of the shift spilling into Sunday) are paid at 100%; the portion before
//! the cutoff is distributed as an ordinary weekday. The split is computed by
//! interval intersection, the same method as the night-hour computation.

use chrono::{Duration, NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::config::CategorizationRules;

use super::interval::WorkInterval;
use super::night_hours::on_the_hour;

/// The outcome of splitting a Saturday's worked hours at the cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaturdaySplit {
    /// Hours on or after the cutoff (including any Sunday spill), paid at 100%.
    pub weekend_100_hours: Decimal,
    /// Hours before the cutoff, distributed as an ordinary weekday.
    pub weekday_portion_hours: Decimal,
}

/// Splits a Saturday's worked hours at the configured cutoff.
///
/// The 100% window runs from the cutoff hour on the reference Saturday
/// through the following Monday 00:00, so a shift crossing into Sunday is
/// fully captured. The carve-out is clamped to the day's worked hours.
///
/// When no usable punch pair exists, the whole day conservatively goes to
/// the weekday portion with a zero weekend carve-out.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::{WorkInterval, split_saturday};
/// use hours_engine::config::CategorizationRules;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// // Saturday 10:00-18:00 with a 13:00 cutoff: 5 hours at 100%
/// let interval = WorkInterval {
///     start: "2025-03-15T10:00:00".parse::<NaiveDateTime>().unwrap(),
///     end: "2025-03-15T18:00:00".parse::<NaiveDateTime>().unwrap(),
/// };
/// let split = split_saturday(
///     Some(&interval),
///     NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
///     Decimal::from(8),
///     &CategorizationRules::default(),
/// );
/// assert_eq!(split.weekend_100_hours, Decimal::from(5));
/// assert_eq!(split.weekday_portion_hours, Decimal::from(3));
/// ```
pub fn split_saturday(
    interval: Option<&WorkInterval>,
    reference_date: NaiveDate,
    hours_worked: Decimal,
    rules: &CategorizationRules,
) -> SaturdaySplit {
    let Some(interval) = interval else {
        return SaturdaySplit {
            weekend_100_hours: Decimal::ZERO,
            weekday_portion_hours: hours_worked,
        };
    };

    let cutoff = reference_date.and_time(on_the_hour(rules.saturday_cutoff_hour));
    // Through the end of the following Sunday
    let window_end = (reference_date + Duration::days(2)).and_time(NaiveTime::MIN);

    let weekend_100_hours = interval.overlap_hours(cutoff, window_end).min(hours_worked);

    SaturdaySplit {
        weekend_100_hours,
        weekday_portion_hours: hours_worked - weekend_100_hours,
    }
}
