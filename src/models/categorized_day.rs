//! Categorization result models.
//!
//! This module contains the per-day output row, the running totals, the
//! end-of-period compensation figures, and the [`EmployeeReport`] aggregate
//! consumed read-only by the spreadsheet-rendering layer.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeInfo;

/// One categorized day in the report.
///
/// Invariant: `hours_worked == regular_hours + extra_hours_50 + extra_hours_100`.
/// Night and holiday hours are informational overlays, not partitions of the
/// same hours. The attributed `date` may differ from the input reference date
/// when a shift crosses midnight into a holiday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedDay {
    /// The date the row is attributed to.
    pub date: NaiveDate,
    /// The Spanish weekday name of the attributed date.
    pub day_of_week: String,
    /// Total hours worked.
    pub hours_worked: Decimal,
    /// Hours paid at the standard rate.
    pub regular_hours: Decimal,
    /// Overtime hours paid at 150%.
    pub extra_hours_50: Decimal,
    /// Overtime hours paid at 200%.
    pub extra_hours_100: Decimal,
    /// Hours worked inside the nightly window (informational).
    pub night_hours: Decimal,
    /// Shortfall versus a full ordinary shift. Always zero when the day
    /// carries a time-off or absence marker.
    pub pending_hours: Decimal,
    /// True if the day was treated as a holiday.
    pub is_holiday: bool,
    /// The holiday display name, when one could be resolved.
    pub holiday_name: Option<String>,
    /// True if the schedule marked the day as a rest day.
    pub is_rest_day: bool,
    /// True if the day carries an approved time-off marker.
    pub has_time_off: bool,
    /// The time-off type name, if present.
    pub time_off_name: Option<String>,
    /// True if the day carries an absence marker.
    pub has_absence: bool,
    /// True if the worked hours reach the full-shift threshold.
    pub is_full_shift: bool,
    /// Human-readable explanation of the categorization (Spanish).
    pub calc_note: String,
    /// Detected local shift start, when a punch pair was usable.
    pub shift_start: Option<NaiveDateTime>,
    /// Detected local shift end, when a punch pair was usable.
    pub shift_end: Option<NaiveDateTime>,
}

/// Running sums of each category across all processed days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeTotals {
    /// Deficit hours carried in from the previous period.
    pub previous_pending_hours: Decimal,
    /// Number of days with worked hours.
    pub total_days_worked: u32,
    /// Sum of hours worked.
    pub total_hours_worked: Decimal,
    /// Sum of regular hours.
    pub total_regular_hours: Decimal,
    /// Sum of overtime-50 hours.
    pub total_extra_hours_50: Decimal,
    /// Sum of overtime-100 hours.
    pub total_extra_hours_100: Decimal,
    /// Sum of night hours.
    pub total_night_hours: Decimal,
    /// Accumulated deficit, including the carried-over balance.
    pub total_pending_hours: Decimal,
}

impl EmployeeTotals {
    /// Creates totals seeded with a carried-over deficit balance.
    pub fn with_carryover(previous_pending_hours: Decimal) -> Self {
        Self {
            previous_pending_hours,
            total_days_worked: 0,
            total_hours_worked: Decimal::ZERO,
            total_regular_hours: Decimal::ZERO,
            total_extra_hours_50: Decimal::ZERO,
            total_extra_hours_100: Decimal::ZERO,
            total_night_hours: Decimal::ZERO,
            total_pending_hours: previous_pending_hours,
        }
    }

    /// Accumulates one categorized day into the totals.
    ///
    /// Days without worked hours (time-off-only rows) do not contribute.
    /// Pending hours are accumulated only when the day carries neither a
    /// time-off nor an absence marker.
    pub fn accumulate(&mut self, day: &CategorizedDay) {
        if day.hours_worked <= Decimal::ZERO {
            return;
        }
        self.total_days_worked += 1;
        self.total_hours_worked += day.hours_worked;
        self.total_regular_hours += day.regular_hours;
        self.total_extra_hours_50 += day.extra_hours_50;
        self.total_extra_hours_100 += day.extra_hours_100;
        self.total_night_hours += day.night_hours;
        if !day.has_time_off && !day.has_absence {
            self.total_pending_hours += day.pending_hours;
        }
    }
}

/// End-of-period deficit compensation figures.
///
/// Derived once per employee from the final totals. One hour of overtime-100
/// offsets 1.5 hours of deficit; overtime-50 offsets 1:1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationResult {
    /// Deficit hours offset against overtime-50 (1:1).
    pub compensated_with_50: Decimal,
    /// Deficit hours offset against overtime-100 (1:1.5).
    pub compensated_with_100: Decimal,
    /// Overtime-50 hours remaining after compensation.
    pub net_extra_hours_50: Decimal,
    /// Overtime-100 hours remaining after compensation.
    pub net_extra_hours_100: Decimal,
    /// Unresolved deficit, carried to the next period.
    pub remaining_pending_hours: Decimal,
}

/// The complete categorization output for one employee.
///
/// The spreadsheet renderer consumes this structure read-only and performs
/// no recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeReport {
    /// Employee identity passthrough.
    pub employee: EmployeeInfo,
    /// The ordered categorized days.
    pub days: Vec<CategorizedDay>,
    /// Running totals across the period.
    pub totals: EmployeeTotals,
    /// End-of-period compensation figures.
    pub compensation: CompensationResult,
}
