//! Hours Categorization Engine for Argentine labor-law reporting.
//!
//! This crate transforms per-day attendance summaries into categorized hour
//! buckets (regular, overtime at 50%/100%, night, holiday, pending) following
//! the simplified Argentine rule set, and nets accumulated deficit hours
//! against overtime at the end of the reporting period.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
