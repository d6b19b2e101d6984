//! Holiday calendar model.
//!
//! This module defines the [`HolidayCalendar`] used for holiday determination
//! and display-name lookup during day classification.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A set of holiday dates with optional display names.
///
/// The engine consults the calendar for three purposes: deciding whether a
/// reference date is a holiday, deciding whether a shift crossing midnight
/// ends inside a holiday, and resolving a display name for the report row.
///
/// # Example
///
/// ```
/// use hours_engine::models::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let mut calendar = HolidayCalendar::new();
/// let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// calendar.insert(date, Some("Día del Trabajador".to_string()));
///
/// assert!(calendar.contains(date));
/// assert_eq!(calendar.name_of(date), Some("Día del Trabajador"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    /// The holiday dates, ordered.
    dates: BTreeSet<NaiveDate>,
    /// Display names for dates that have one.
    names: HashMap<NaiveDate, String>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday date with an optional display name.
    pub fn insert(&mut self, date: NaiveDate, name: Option<String>) {
        self.dates.insert(date);
        if let Some(name) = name {
            self.names.insert(date, name);
        }
    }

    /// Returns true if the date is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns the display name for a holiday date, if one is known.
    pub fn name_of(&self, date: NaiveDate) -> Option<&str> {
        self.names.get(&date).map(String::as_str)
    }

    /// Returns true if the calendar has no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns a calendar combining this one with `other`.
    ///
    /// Dates from both are kept; where both carry a name for the same date,
    /// `other` wins. Used to overlay a per-run holiday set on the static
    /// configured table.
    pub fn merged_with(&self, other: &HolidayCalendar) -> HolidayCalendar {
        let mut merged = self.clone();
        for date in &other.dates {
            merged.dates.insert(*date);
        }
        for (date, name) in &other.names {
            merged.names.insert(*date, name.clone());
        }
        merged
    }
}
