//! HTTP request handlers for the Hours Categorization Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use super::request::CategorizationRequest;
use super::response::{ApiError, CategorizationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/categorize", post(categorize_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health endpoint.
async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handler for POST /categorize endpoint.
///
/// Accepts one employee's day summaries and returns the categorized report.
async fn categorize_handler(
    State(state): State<AppState>,
    payload: Result<Json<CategorizationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing categorization request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Map the loose payload into typed domain records
    let records = request.records();
    let run_calendar = request.run_calendar();
    let employee = request.employee.into();
    let previous_pending_hours = request.previous_pending_hours;

    let start_time = Instant::now();
    let report = state.categorizer().process_employee(
        employee,
        &records,
        previous_pending_hours,
        &run_calendar,
    );
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        employee_id = %report.employee.id,
        days_in = records.len(),
        days_out = report.days.len(),
        total_hours = %report.totals.total_hours_worked,
        duration_us = duration.as_micros(),
        "Categorization completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(CategorizationResponse::new(report)),
    )
        .into_response()
}
