//! Daily attendance record model.
//!
//! This module defines the fully-typed shape the categorization core operates
//! on. Loosely-shaped upstream payloads are mapped into this shape at the API
//! boundary, isolating the core from upstream schema drift.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A punch timestamp, either carrying an explicit UTC offset or already local.
///
/// Upstream timestamps sometimes arrive with an offset (`2025-03-10T22:00:00-03:00`)
/// and sometimes as bare local time (`2025-03-10T22:00:00`). Absence of an
/// offset means "already in the report's local timezone".
///
/// # Example
///
/// ```
/// use hours_engine::models::PunchTime;
/// use chrono_tz::America::Argentina::Buenos_Aires;
///
/// let zoned: PunchTime = serde_json::from_str("\"2025-03-11T01:00:00+00:00\"").unwrap();
/// let local = zoned.local_in(Buenos_Aires);
/// assert_eq!(local.to_string(), "2025-03-10 22:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PunchTime {
    /// A timestamp with an explicit UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// A timestamp without an offset, taken as already local.
    Local(NaiveDateTime),
}

impl PunchTime {
    /// Converts the punch to a naive local timestamp in the given timezone.
    ///
    /// Zoned punches are converted into `tz`; local punches are returned
    /// unchanged.
    pub fn local_in(&self, tz: Tz) -> NaiveDateTime {
        match self {
            PunchTime::Zoned(dt) => dt.with_timezone(&tz).naive_local(),
            PunchTime::Local(dt) => *dt,
        }
    }
}

/// The direction of a clock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockEventKind {
    /// A clock-in event.
    Start,
    /// A clock-out event.
    End,
}

/// A single clock-in or clock-out event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockEvent {
    /// Whether this is a clock-in or a clock-out.
    pub kind: ClockEventKind,
    /// The punch timestamp.
    pub time: PunchTime,
}

/// An approved time-off marker on a day record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOffMark {
    /// The time-off type name (e.g. "Vacaciones"), if the upstream supplied one.
    #[serde(default)]
    pub name: Option<String>,
}

fn default_true() -> bool {
    true
}

/// One employee-day of attendance data, fully typed.
///
/// One record per calendar day per employee. All numeric fields default to
/// zero and all markers to absent; the core never fails on missing upstream
/// data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAttendanceRecord {
    /// The record's nominal calendar date.
    pub reference_date: NaiveDate,
    /// Total hours worked in the day, per the upstream summary.
    #[serde(default)]
    pub hours_worked: Decimal,
    /// Ordered clock-in/clock-out events.
    #[serde(default)]
    pub events: Vec<ClockEvent>,
    /// False means the schedule marks this day as a rest day for the employee.
    #[serde(default = "default_true")]
    pub is_workday: bool,
    /// True if the upstream payload explicitly marks the day as a holiday.
    #[serde(default)]
    pub marked_holiday: bool,
    /// The holiday display name supplied by the upstream payload, if any.
    #[serde(default)]
    pub holiday_name: Option<String>,
    /// Approved time-off marker, if any.
    #[serde(default)]
    pub time_off: Option<TimeOffMark>,
    /// True if the upstream payload marks the day as an absence.
    #[serde(default)]
    pub has_absence: bool,
    /// Pre-categorized night hours from the upstream payload, used as a
    /// fallback when no usable punch pair exists.
    #[serde(default)]
    pub reported_night_hours: Decimal,
}

impl DailyAttendanceRecord {
    /// Returns true if the schedule marks this day as a rest day.
    pub fn is_rest_day(&self) -> bool {
        !self.is_workday
    }

    /// Returns true if the day carries an approved time-off marker.
    pub fn has_time_off(&self) -> bool {
        self.time_off.is_some()
    }

    /// Returns the time-off type name, if present.
    pub fn time_off_name(&self) -> Option<&str> {
        self.time_off
            .as_ref()
            .and_then(|mark| mark.name.as_deref())
    }

    /// Returns the first clock-in event's timestamp, if any.
    pub fn first_start(&self) -> Option<&PunchTime> {
        self.first_event(ClockEventKind::Start)
    }

    /// Returns the first clock-out event's timestamp, if any.
    pub fn first_end(&self) -> Option<&PunchTime> {
        self.first_event(ClockEventKind::End)
    }

    fn first_event(&self, kind: ClockEventKind) -> Option<&PunchTime> {
        self.events
            .iter()
            .find(|event| event.kind == kind)
            .map(|event| &event.time)
    }
}
