//! Punch-interval extraction and overlap math.
//!
//! This module turns a day record's first clock-in/clock-out pair into a
//! local, zone-fixed [`WorkInterval`] and provides the interval-intersection
//! primitive used by the night-hour and weekend-split computations.

use chrono::{Duration, NaiveDateTime};
use chrono_tz::Tz;
use rust_decimal::Decimal;

use crate::models::DailyAttendanceRecord;

/// A worked interval in local naive time.
///
/// The end is always strictly after the start: when the raw clock-out is not
/// after the clock-in, the shift is assumed to cross midnight and the end is
/// advanced by one day during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkInterval {
    /// The local shift start.
    pub start: NaiveDateTime,
    /// The local shift end.
    pub end: NaiveDateTime,
}

impl WorkInterval {
    /// Returns the interval length in hours.
    pub fn hours(&self) -> Decimal {
        minutes_to_hours((self.end - self.start).num_minutes())
    }

    /// Returns the overlap, in hours, between this interval and a window.
    ///
    /// Computed as `max(0, min(end_a, end_b) - max(start_a, start_b))`.
    pub fn overlap_hours(&self, window_start: NaiveDateTime, window_end: NaiveDateTime) -> Decimal {
        let start = self.start.max(window_start);
        let end = self.end.min(window_end);
        if end > start {
            minutes_to_hours((end - start).num_minutes())
        } else {
            Decimal::ZERO
        }
    }
}

/// Converts a minute count to hours as a [`Decimal`].
fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Extracts the worked interval from a day record's punches.
///
/// Takes the first clock-in and the first clock-out event, converts each to
/// a local naive timestamp in `tz`, and assumes a midnight crossing when the
/// clock-out is not strictly after the clock-in. Returns `None` unless both
/// punches exist; multiple punch pairs per day are not aggregated.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::extract_interval;
/// use hours_engine::models::{ClockEvent, ClockEventKind, DailyAttendanceRecord, PunchTime};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use chrono_tz::America::Argentina::Buenos_Aires;
///
/// let record = DailyAttendanceRecord {
///     reference_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
///     events: vec![
///         ClockEvent {
///             kind: ClockEventKind::Start,
///             time: PunchTime::Local("2025-03-14T22:00:00".parse::<NaiveDateTime>().unwrap()),
///         },
///         ClockEvent {
///             kind: ClockEventKind::End,
///             time: PunchTime::Local("2025-03-14T02:00:00".parse::<NaiveDateTime>().unwrap()),
///         },
///     ],
///     ..serde_json::from_str(r#"{"reference_date": "2025-03-14"}"#).unwrap()
/// };
///
/// let interval = extract_interval(&record, Buenos_Aires).unwrap();
/// // Clock-out not after clock-in: end advanced to the next day
/// assert_eq!(interval.end.to_string(), "2025-03-15 02:00:00");
/// ```
pub fn extract_interval(record: &DailyAttendanceRecord, tz: Tz) -> Option<WorkInterval> {
    let start = record.first_start()?.local_in(tz);
    let mut end = record.first_end()?.local_in(tz);

    if end <= start {
        end += Duration::days(1);
    }

    Some(WorkInterval { start, end })
}
