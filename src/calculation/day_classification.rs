//! Day classification and date attribution.
//!
//! This module determines, for each day record, which hour-distribution rule
//! applies and which date the output row is attributed to. The tie-break
//! precedence is: holiday, then worked rest day, then Sunday, then Saturday,
//! then ordinary weekday.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{DailyAttendanceRecord, HolidayCalendar};
use rust_decimal::Decimal;

use super::interval::WorkInterval;

/// The hour-distribution rule selected for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A recognized holiday (explicit, by calendar, or by midnight crossing).
    /// All worked hours are paid at 100%.
    Holiday,
    /// A scheduled rest day with worked hours. All hours at 100%.
    WorkedRestDay,
    /// Sunday. All hours at 100%.
    Sunday,
    /// Saturday. Hours from the cutoff onward at 100%, the rest distributed
    /// as an ordinary weekday.
    Saturday,
    /// Monday through Friday. Ordinary distribution with overtime tiers and
    /// deficit tracking.
    Weekday,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Holiday => write!(f, "Holiday"),
            DayKind::WorkedRestDay => write!(f, "WorkedRestDay"),
            DayKind::Sunday => write!(f, "Sunday"),
            DayKind::Saturday => write!(f, "Saturday"),
            DayKind::Weekday => write!(f, "Weekday"),
        }
    }
}

/// The outcome of classifying one day record.
#[derive(Debug, Clone, PartialEq)]
pub struct DayClassification {
    /// The distribution rule that applies.
    pub kind: DayKind,
    /// The date the output row is attributed to. Differs from the reference
    /// date only when the shift crosses midnight into a holiday.
    pub attributed_date: NaiveDate,
    /// True if the day is treated as a holiday.
    pub is_holiday: bool,
    /// The resolved holiday display name, if any.
    pub holiday_name: Option<String>,
    /// True if the schedule marks the day as a rest day.
    pub is_rest_day: bool,
    /// True if holiday status came from the shift ending inside a holiday.
    pub crossed_into_holiday: bool,
}

/// Classifies a day record against the holiday calendar.
///
/// Holiday determination (any one condition suffices): the upstream payload
/// explicitly marks the day as a holiday; the reference date is in the
/// holiday set; or the extracted interval ends on a different date that is in
/// the holiday set. In the crossing case the output row is attributed to the
/// clock-out date rather than the reference date.
///
/// The holiday display name is resolved from the upstream payload first,
/// then from the calendar, trying the attributed date and then the reference
/// date.
pub fn classify_day(
    record: &DailyAttendanceRecord,
    interval: Option<&WorkInterval>,
    calendar: &HolidayCalendar,
) -> DayClassification {
    let reference_date = record.reference_date;

    let crossing_date = interval.and_then(|iv| {
        let end_date = iv.end.date();
        if end_date != reference_date && calendar.contains(end_date) {
            Some(end_date)
        } else {
            None
        }
    });

    let attributed_date = crossing_date.unwrap_or(reference_date);
    let is_holiday =
        record.marked_holiday || calendar.contains(reference_date) || crossing_date.is_some();

    let holiday_name = if is_holiday {
        record
            .holiday_name
            .clone()
            .or_else(|| calendar.name_of(attributed_date).map(str::to_string))
            .or_else(|| calendar.name_of(reference_date).map(str::to_string))
    } else {
        None
    };

    let is_rest_day = record.is_rest_day();

    let kind = if is_holiday {
        DayKind::Holiday
    } else if is_rest_day && record.hours_worked > Decimal::ZERO {
        DayKind::WorkedRestDay
    } else {
        // Distribution follows the reference (start) day of the shift
        match reference_date.weekday() {
            Weekday::Sun => DayKind::Sunday,
            Weekday::Sat => DayKind::Saturday,
            _ => DayKind::Weekday,
        }
    };

    DayClassification {
        kind,
        attributed_date,
        is_holiday,
        holiday_name,
        is_rest_day,
        crossed_into_holiday: crossing_date.is_some(),
    }
}

/// Returns the Spanish weekday name for a date, as used in the report.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::spanish_weekday;
/// use chrono::NaiveDate;
///
/// // 2025-03-10 is a Monday
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// assert_eq!(spanish_weekday(date), "Lunes");
/// ```
pub fn spanish_weekday(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}
