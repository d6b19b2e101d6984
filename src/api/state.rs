//! Application state for the Hours Categorization Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::HoursCategorizer;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently the configured categorization engine.
#[derive(Clone)]
pub struct AppState {
    /// The configured categorization engine.
    categorizer: Arc<HoursCategorizer>,
}

impl AppState {
    /// Creates a new application state with the given categorizer.
    pub fn new(categorizer: HoursCategorizer) -> Self {
        Self {
            categorizer: Arc::new(categorizer),
        }
    }

    /// Returns a reference to the categorization engine.
    pub fn categorizer(&self) -> &HoursCategorizer {
        &self.categorizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
