//! Request types for the Hours Categorization Engine API.
//!
//! This module defines the JSON request structures for the `/categorize`
//! endpoint. The upstream attendance system sends camelCase payloads with
//! loosely-typed fields; the mapping into the fully-typed domain records is
//! deliberately forgiving, so a malformed timestamp or date degrades to a
//! skipped punch or record instead of failing the whole request.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{
    ClockEvent, ClockEventKind, DailyAttendanceRecord, EmployeeInfo, HolidayCalendar, PunchTime,
    TimeOffMark,
};

/// Request body for the `/categorize` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizationRequest {
    /// The employee the day summaries belong to.
    pub employee: EmployeeRequest,
    /// One summary per calendar day.
    #[serde(default)]
    pub day_summaries: Vec<DaySummaryRequest>,
    /// Deficit hours carried in from the previous period.
    #[serde(default)]
    pub previous_pending_hours: Decimal,
    /// Per-run holiday overlay on the configured calendar.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
}

impl CategorizationRequest {
    /// Builds the per-run holiday calendar from the request overlay.
    ///
    /// Entries with unparseable dates are skipped.
    pub fn run_calendar(&self) -> HolidayCalendar {
        let mut calendar = HolidayCalendar::new();
        for entry in &self.holidays {
            match NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d") {
                Ok(date) => calendar.insert(date, entry.name.clone()),
                Err(_) => warn!(date = %entry.date, "skipping holiday with unparseable date"),
            }
        }
        calendar
    }

    /// Maps the day summaries into typed domain records.
    ///
    /// Summaries without a parseable reference date are skipped.
    pub fn records(&self) -> Vec<DailyAttendanceRecord> {
        self.day_summaries
            .iter()
            .filter_map(DaySummaryRequest::to_record)
            .collect()
    }
}

/// Employee information in a categorization request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's first name.
    #[serde(default)]
    pub first_name: String,
    /// The employee's last name.
    #[serde(default)]
    pub last_name: String,
    /// The department the employee belongs to, if known.
    #[serde(default)]
    pub department: Option<String>,
    /// The employee's job title, if known.
    #[serde(default)]
    pub job_title: Option<String>,
}

impl From<EmployeeRequest> for EmployeeInfo {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeInfo {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            department: req.department,
            job_title: req.job_title,
        }
    }
}

/// A per-run holiday entry in a categorization request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRequest {
    /// The holiday date (`YYYY-MM-DD`).
    pub date: String,
    /// The holiday display name, if supplied.
    #[serde(default)]
    pub name: Option<String>,
}

/// One day of attendance data as the upstream system ships it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummaryRequest {
    /// The record's calendar date (`YYYY-MM-DD`).
    #[serde(default, alias = "date")]
    pub reference_date: Option<String>,
    /// The hours block of the summary.
    #[serde(default)]
    pub hours: Option<HoursBlockRequest>,
    /// Flat total-hours field some payload versions use instead.
    #[serde(default)]
    pub total_hours: Option<Decimal>,
    /// Raw clock entries.
    #[serde(default)]
    pub entries: Vec<ClockEntryRequest>,
    /// Pre-categorized hour buckets from the upstream system.
    #[serde(default)]
    pub categorized_hours: Vec<CategorizedHoursRequest>,
    /// False marks a scheduled rest day.
    #[serde(default = "default_true")]
    pub is_workday: bool,
    /// Holiday markers attached to the day.
    #[serde(default)]
    pub holidays: Vec<NamedMarkerRequest>,
    /// Approved time-off requests attached to the day.
    #[serde(default)]
    pub time_off_requests: Vec<NamedMarkerRequest>,
    /// Incidence codes attached to the day (e.g. `ABSENT`).
    #[serde(default)]
    pub incidences: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// The hours block of a day summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursBlockRequest {
    /// Total hours worked in the day.
    #[serde(default)]
    pub worked: Decimal,
}

/// A raw clock entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockEntryRequest {
    /// The entry direction (`START` or `END`).
    #[serde(rename = "type")]
    pub kind: String,
    /// The punch timestamp, with or without a UTC offset.
    #[serde(default)]
    pub time: Option<String>,
    /// Older payload versions ship the timestamp under `date` instead.
    #[serde(default)]
    pub date: Option<String>,
}

/// A bucket category, either a bare string or a `{name: ...}` object.
///
/// The upstream system ships `categorizedHours` entries with the category
/// wrapped in an object; some payload versions flatten it to a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    /// The flat-string form.
    Name(String),
    /// The object form.
    Object {
        /// The category name inside the object.
        #[serde(default)]
        name: Option<String>,
    },
}

impl CategoryRef {
    /// Returns the category name, if present.
    pub fn name(&self) -> Option<&str> {
        match self {
            CategoryRef::Name(name) => Some(name),
            CategoryRef::Object { name } => name.as_deref(),
        }
    }
}

/// A pre-categorized hour bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedHoursRequest {
    /// The bucket category (e.g. `NIGHT`).
    pub category: CategoryRef,
    /// The hours in the bucket.
    #[serde(default)]
    pub hours: Decimal,
}

/// A marker object carrying only an optional display name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedMarkerRequest {
    /// The marker display name.
    #[serde(default)]
    pub name: Option<String>,
}

impl DaySummaryRequest {
    /// Maps the summary into a typed domain record.
    ///
    /// Returns `None` when the reference date is missing or unparseable;
    /// individually broken entries degrade to skipped punches.
    fn to_record(&self) -> Option<DailyAttendanceRecord> {
        let raw_date = self.reference_date.as_deref()?;
        let reference_date = match NaiveDate::parse_from_str(raw_date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                warn!(date = %raw_date, "skipping day summary with unparseable date");
                return None;
            }
        };

        let hours_worked = self
            .hours
            .as_ref()
            .map(|block| block.worked)
            .or(self.total_hours)
            .unwrap_or(Decimal::ZERO);

        let events = self
            .entries
            .iter()
            .filter_map(ClockEntryRequest::to_event)
            .collect();

        let reported_night_hours = self
            .categorized_hours
            .iter()
            .filter(|bucket| {
                bucket.category.name().is_some_and(|name| {
                    let category = name.to_uppercase();
                    category == "NIGHT" || category == "NOCTURNA"
                })
            })
            .map(|bucket| bucket.hours)
            .sum();

        let has_absence = self
            .incidences
            .iter()
            .any(|code| code.to_uppercase().contains("ABSENT"));

        Some(DailyAttendanceRecord {
            reference_date,
            hours_worked,
            events,
            is_workday: self.is_workday,
            marked_holiday: !self.holidays.is_empty(),
            holiday_name: self
                .holidays
                .iter()
                .find_map(|marker| marker.name.clone()),
            time_off: self.time_off_requests.first().map(|marker| TimeOffMark {
                name: marker.name.clone(),
            }),
            has_absence,
            reported_night_hours,
        })
    }
}

impl ClockEntryRequest {
    /// Maps the entry into a typed clock event, if its fields parse.
    fn to_event(&self) -> Option<ClockEvent> {
        let kind = match self.kind.to_uppercase().as_str() {
            "START" => ClockEventKind::Start,
            "END" => ClockEventKind::End,
            other => {
                warn!(kind = %other, "skipping clock entry with unknown type");
                return None;
            }
        };

        let raw_time = self.time.as_deref().or(self.date.as_deref())?;
        let time = parse_punch(raw_time)?;

        Some(ClockEvent { kind, time })
    }
}

/// Parses a punch timestamp, offset-bearing first, then bare local.
fn parse_punch(raw: &str) -> Option<PunchTime> {
    if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
        return Some(PunchTime::Zoned(zoned));
    }
    if let Ok(local) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(PunchTime::Local(local));
    }
    if let Ok(local) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(PunchTime::Local(local));
    }
    warn!(time = %raw, "skipping punch with unparseable timestamp");
    None
}
