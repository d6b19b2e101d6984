//! Calculation logic for the Hours Categorization Engine.
//!
//! This module contains the categorization core: punch-interval extraction,
//! day classification with holiday-crossing date attribution, night-hour
//! overlap computation, the Saturday cutoff split, the ordinary weekday
//! distribution, the explanation builder, the deficit compensation
//! algorithm, and the [`HoursCategorizer`] that drives the single pass over
//! an employee's day records.

mod categorizer;
mod compensation;
mod day_classification;
mod explanation;
mod interval;
mod night_hours;
mod saturday_split;
mod weekday_distribution;

pub use categorizer::HoursCategorizer;
pub use compensation::calculate_compensation;
pub use day_classification::{DayClassification, DayKind, classify_day, spanish_weekday};
pub use explanation::build_calc_note;
pub use interval::{WorkInterval, extract_interval};
pub use night_hours::calculate_night_hours;
pub use saturday_split::{SaturdaySplit, split_saturday};
pub use weekday_distribution::{WeekdayDistribution, distribute_weekday_hours};
