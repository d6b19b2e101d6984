//! HTTP API module for the Hours Categorization Engine.
//!
//! This module provides the REST API endpoints for categorizing an
//! employee's attendance records under the Argentine labor-law rules.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CategorizationRequest;
pub use response::{ApiError, CategorizationResponse};
pub use state::AppState;
