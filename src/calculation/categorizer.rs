//! Hours categorization orchestration.
//!
//! [`HoursCategorizer`] runs the full per-employee pipeline: punch-interval
//! extraction, day classification, night-hour computation, the per-kind hour
//! distribution, running totals, and the end-of-period deficit compensation.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{
    CategorizedDay, DailyAttendanceRecord, EmployeeInfo, EmployeeReport, EmployeeTotals,
    HolidayCalendar,
};

use super::compensation::calculate_compensation;
use super::day_classification::{DayKind, classify_day, spanish_weekday};
use super::explanation::build_calc_note;
use super::interval::extract_interval;
use super::night_hours::calculate_night_hours;
use super::saturday_split::split_saturday;
use super::weekday_distribution::{WeekdayDistribution, distribute_weekday_hours};

/// The hours categorization engine.
///
/// Constructed once per configuration and shared across requests; all methods
/// take `&self` and the engine holds no per-request state.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::HoursCategorizer;
/// use hours_engine::config::EngineConfig;
/// use hours_engine::models::{DailyAttendanceRecord, EmployeeInfo, HolidayCalendar};
/// use rust_decimal::Decimal;
///
/// let categorizer = HoursCategorizer::new(EngineConfig::argentina());
/// let employee = EmployeeInfo {
///     id: "emp_001".to_string(),
///     first_name: "Juan".to_string(),
///     last_name: "Pérez".to_string(),
///     department: None,
///     job_title: None,
/// };
/// let record: DailyAttendanceRecord =
///     serde_json::from_str(r#"{"reference_date": "2025-03-10", "hours_worked": "8"}"#).unwrap();
///
/// let report = categorizer.process_employee(
///     employee,
///     &[record],
///     Decimal::ZERO,
///     &HolidayCalendar::new(),
/// );
/// assert_eq!(report.totals.total_regular_hours, Decimal::from(8));
/// ```
#[derive(Debug, Clone)]
pub struct HoursCategorizer {
    config: EngineConfig,
}

impl HoursCategorizer {
    /// Creates a categorizer from an engine configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Processes one employee's day records into a complete report.
    ///
    /// `run_holidays` is overlaid on the configured holiday table for this
    /// run only; on a name collision the per-run entry wins.
    /// `previous_pending_hours` seeds the deficit balance carried in from the
    /// prior period.
    ///
    /// Days with no worked hours and no time-off marker are dropped. The
    /// output rows keep the input order.
    pub fn process_employee(
        &self,
        employee: EmployeeInfo,
        day_summaries: &[DailyAttendanceRecord],
        previous_pending_hours: Decimal,
        run_holidays: &HolidayCalendar,
    ) -> EmployeeReport {
        let calendar = self.config.calendar().merged_with(run_holidays);

        let mut days = Vec::with_capacity(day_summaries.len());
        let mut totals = EmployeeTotals::with_carryover(previous_pending_hours);

        for record in day_summaries {
            match self.categorize_day(record, &calendar) {
                Some(day) => {
                    totals.accumulate(&day);
                    days.push(day);
                }
                None => debug!(
                    reference_date = %record.reference_date,
                    "skipping day without hours or time off"
                ),
            }
        }

        let compensation = calculate_compensation(
            totals.total_extra_hours_50,
            totals.total_extra_hours_100,
            totals.total_pending_hours,
        );

        EmployeeReport {
            employee,
            days,
            totals,
            compensation,
        }
    }

    /// Categorizes a single day record, or returns `None` for records with
    /// neither worked hours nor a time-off marker.
    fn categorize_day(
        &self,
        record: &DailyAttendanceRecord,
        calendar: &HolidayCalendar,
    ) -> Option<CategorizedDay> {
        if record.hours_worked <= Decimal::ZERO && !record.has_time_off() {
            return None;
        }

        let rules = self.config.rules();
        let hours_worked = record.hours_worked.max(Decimal::ZERO);

        let interval = extract_interval(record, self.config.timezone());
        let classification = classify_day(record, interval.as_ref(), calendar);
        let night_hours = calculate_night_hours(
            interval.as_ref(),
            record.reference_date,
            rules.night_window,
            record.reported_night_hours,
        );

        let mut saturday_split = None;
        let distribution = match classification.kind {
            DayKind::Holiday | DayKind::WorkedRestDay | DayKind::Sunday => WeekdayDistribution {
                regular: Decimal::ZERO,
                extra_50: Decimal::ZERO,
                extra_100: hours_worked,
                pending: Decimal::ZERO,
            },
            DayKind::Saturday => {
                let split = split_saturday(
                    interval.as_ref(),
                    record.reference_date,
                    hours_worked,
                    rules,
                );
                let weekday = distribute_weekday_hours(
                    split.weekday_portion_hours,
                    record.has_time_off(),
                    rules,
                );
                saturday_split = Some(split);
                WeekdayDistribution {
                    extra_100: weekday.extra_100 + split.weekend_100_hours,
                    ..weekday
                }
            }
            DayKind::Weekday => {
                distribute_weekday_hours(hours_worked, record.has_time_off(), rules)
            }
        };

        let pending_hours = if record.has_time_off() || record.has_absence {
            Decimal::ZERO
        } else {
            distribution.pending
        };

        // The split belongs in the note only when punches backed it
        let note_split = if interval.is_some() {
            saturday_split.as_ref()
        } else {
            None
        };
        let calc_note = build_calc_note(
            interval.as_ref(),
            &classification,
            hours_worked,
            &distribution,
            note_split,
            rules,
        );

        Some(CategorizedDay {
            date: classification.attributed_date,
            day_of_week: spanish_weekday(classification.attributed_date).to_string(),
            hours_worked,
            regular_hours: distribution.regular,
            extra_hours_50: distribution.extra_50,
            extra_hours_100: distribution.extra_100,
            night_hours,
            pending_hours,
            is_holiday: classification.is_holiday,
            holiday_name: classification.holiday_name,
            is_rest_day: classification.is_rest_day,
            has_time_off: record.has_time_off(),
            time_off_name: record.time_off_name().map(str::to_string),
            has_absence: record.has_absence,
            is_full_shift: hours_worked >= rules.full_shift_hours,
            calc_note,
            shift_start: interval.map(|iv| iv.start),
            shift_end: interval.map(|iv| iv.end),
        })
    }
}
