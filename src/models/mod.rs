//! Core data models for the Hours Categorization Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calendar;
mod categorized_day;
mod employee;

pub use attendance::{ClockEvent, ClockEventKind, DailyAttendanceRecord, PunchTime, TimeOffMark};
pub use calendar::HolidayCalendar;
pub use categorized_day::{CategorizedDay, CompensationResult, EmployeeReport, EmployeeTotals};
pub use employee::EmployeeInfo;
