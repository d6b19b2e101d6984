//! Configuration types for hours categorization.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the aggregated
//! [`EngineConfig`] passed into the categorizer at construction.

use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayCalendar;

/// The nightly window used for night-hour computation.
///
/// The window runs from `start_hour` on the reference date through
/// `end_hour` on the following date (e.g. 21:00 through 06:00).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NightWindow {
    /// The hour (0-23) at which the nightly window opens on the reference date.
    pub start_hour: u32,
    /// The hour (0-23) at which the nightly window closes on the following date.
    pub end_hour: u32,
}

impl Default for NightWindow {
    fn default() -> Self {
        Self {
            start_hour: 21,
            end_hour: 6,
        }
    }
}

/// Rules configuration file structure (`rules.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    /// IANA timezone identifier for all local-time conversions.
    pub timezone: String,
    /// Hours in a full ordinary weekday shift.
    pub full_shift_hours: Decimal,
    /// Hours of daily overtime paid at 50% before the 100% rate applies.
    pub overtime_50_threshold_hours: Decimal,
    /// The nightly window.
    #[serde(default)]
    pub night_window: NightWindow,
    /// The hour (0-23) on Saturday from which worked time counts at 100%.
    pub saturday_cutoff_hour: u32,
}

/// A holiday entry in the calendar configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The display name of the holiday.
    pub name: String,
}

/// Calendar configuration file structure (`calendar.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// The static national holiday table.
    #[serde(default)]
    pub holidays: Vec<HolidayEntry>,
}

/// The categorization rule parameters.
///
/// These are the jurisdiction-specific knobs of the hour distribution:
/// the full-shift threshold, the overtime-50 split, the nightly window,
/// and the Saturday cutoff.
#[derive(Debug, Clone, Copy)]
pub struct CategorizationRules {
    /// Hours in a full ordinary weekday shift (`F` in the distribution).
    pub full_shift_hours: Decimal,
    /// Hours of daily overtime paid at 50% before the 100% rate applies (`K`).
    pub overtime_50_threshold: Decimal,
    /// The nightly window.
    pub night_window: NightWindow,
    /// The hour on Saturday from which worked time counts at 100%.
    pub saturday_cutoff_hour: u32,
}

impl Default for CategorizationRules {
    fn default() -> Self {
        Self {
            full_shift_hours: Decimal::from(8),
            overtime_50_threshold: Decimal::from(2),
            night_window: NightWindow::default(),
            saturday_cutoff_hour: 13,
        }
    }
}

/// The complete engine configuration.
///
/// Aggregates the categorization rules, the local timezone, and the static
/// holiday calendar. Constructed from YAML files via
/// [`ConfigLoader`](super::ConfigLoader) or programmatically via
/// [`EngineConfig::argentina`] for the compiled-in Argentine defaults.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// The categorization rule parameters.
    rules: CategorizationRules,
    /// The local timezone used for all punch-timestamp conversions.
    timezone: Tz,
    /// The static holiday calendar (dates plus display names).
    calendar: HolidayCalendar,
}

impl EngineConfig {
    /// Creates an EngineConfig from its deserialized file parts.
    ///
    /// Returns [`EngineError::UnknownTimezone`] if the timezone identifier
    /// does not resolve to a known IANA zone.
    pub fn from_parts(rules: RulesConfig, calendar: CalendarConfig) -> EngineResult<Self> {
        let timezone: Tz = rules
            .timezone
            .parse()
            .map_err(|_| EngineError::UnknownTimezone {
                name: rules.timezone.clone(),
            })?;

        let mut holiday_calendar = HolidayCalendar::new();
        for entry in calendar.holidays {
            holiday_calendar.insert(entry.date, Some(entry.name));
        }

        Ok(Self {
            rules: CategorizationRules {
                full_shift_hours: rules.full_shift_hours,
                overtime_50_threshold: rules.overtime_50_threshold_hours,
                night_window: rules.night_window,
                saturday_cutoff_hour: rules.saturday_cutoff_hour,
            },
            timezone,
            calendar: holiday_calendar,
        })
    }

    /// Returns the compiled-in Argentine configuration.
    ///
    /// Full shift of 8 hours, 2 hours of overtime at 50%, nightly window
    /// 21:00-06:00, Saturday cutoff at 13:00, Buenos Aires timezone, and an
    /// empty holiday table (callers supply holidays per run).
    pub fn argentina() -> Self {
        Self {
            rules: CategorizationRules::default(),
            timezone: chrono_tz::America::Argentina::Buenos_Aires,
            calendar: HolidayCalendar::new(),
        }
    }

    /// Returns the categorization rule parameters.
    pub fn rules(&self) -> &CategorizationRules {
        &self.rules
    }

    /// Returns the local timezone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Returns the static holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}
