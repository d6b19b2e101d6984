//! Configuration for the Hours Categorization Engine.
//!
//! This module provides the strongly-typed configuration structures that are
//! deserialized from YAML configuration files, plus the [`ConfigLoader`] that
//! reads them from a configuration directory.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalendarConfig, CategorizationRules, EngineConfig, HolidayEntry, NightWindow, RulesConfig,
};
