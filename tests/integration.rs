//! Comprehensive integration tests for the Hours Categorization Engine.
//!
//! This test suite covers all categorization scenarios including:
//! - Ordinary weekday distribution and overtime tiers
//! - Deficit (pending) hours and their suppression
//! - Sunday, Saturday-split and worked-rest-day rules
//! - Holiday determination and midnight-crossing attribution
//! - Night-hour overlap and the reported-bucket fallback
//! - End-of-period deficit compensation
//! - Degradation on malformed input
//!
//! The test week 2025-03-10 through 2025-03-16 runs Monday through Sunday.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use hours_engine::api::{AppState, create_router};
use hours_engine::calculation::HoursCategorizer;
use hours_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/argentina").expect("Failed to load config");
    AppState::new(HoursCategorizer::new(config.into_config()))
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal field that the engine serializes as a JSON string.
fn read_decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("expected decimal string")).unwrap()
}

fn assert_decimal_eq(value: &Value, expected: &str) {
    assert_eq!(
        read_decimal(value),
        decimal(expected),
        "expected {}, got {}",
        expected,
        value
    );
}

fn assert_decimal_close(value: &Value, expected: &str) {
    let diff = (read_decimal(value) - decimal(expected)).abs();
    assert!(
        diff < decimal("0.001"),
        "expected about {}, got {}",
        expected,
        value
    );
}

async fn post_categorize(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/categorize")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(day_summaries: Vec<Value>) -> Value {
    json!({
        "employee": {
            "id": "emp_001",
            "firstName": "Juan",
            "lastName": "Pérez",
            "department": "Depósito"
        },
        "daySummaries": day_summaries
    })
}

fn create_request_with(
    day_summaries: Vec<Value>,
    previous_pending_hours: &str,
    holidays: Vec<Value>,
) -> Value {
    json!({
        "employee": {
            "id": "emp_001",
            "firstName": "Juan",
            "lastName": "Pérez"
        },
        "daySummaries": day_summaries,
        "previousPendingHours": previous_pending_hours,
        "holidays": holidays
    })
}

fn day(date: &str, hours: &str) -> Value {
    json!({
        "referenceDate": date,
        "hours": {"worked": hours}
    })
}

fn day_with_punches(date: &str, hours: &str, start: &str, end: &str) -> Value {
    json!({
        "referenceDate": date,
        "hours": {"worked": hours},
        "entries": [
            {"type": "START", "time": start},
            {"type": "END", "time": end}
        ]
    })
}

fn assert_bucket_invariant(day: &Value) {
    let hours = read_decimal(&day["hours_worked"]);
    let sum = read_decimal(&day["regular_hours"])
        + read_decimal(&day["extra_hours_50"])
        + read_decimal(&day["extra_hours_100"]);
    assert_eq!(
        hours, sum,
        "buckets must partition hours_worked on {}",
        day["date"]
    );
}

// =============================================================================
// SECTION 1: Ordinary Weekday Distribution
// =============================================================================

#[tokio::test]
async fn test_ordinary_weekday_8h_full_shift() {
    let router = create_router_for_test();
    let request = create_request(vec![day("2025-03-10", "8")]); // Monday

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let days = result["days"].as_array().unwrap();
    assert_eq!(days.len(), 1);

    let row = &days[0];
    assert_eq!(row["day_of_week"], "Lunes");
    assert_decimal_eq(&row["regular_hours"], "8");
    assert_decimal_eq(&row["extra_hours_50"], "0");
    assert_decimal_eq(&row["extra_hours_100"], "0");
    assert_decimal_eq(&row["pending_hours"], "0");
    assert_eq!(row["is_full_shift"], true);
    assert_bucket_invariant(row);
}

#[tokio::test]
async fn test_weekday_11h_overtime_split() {
    let router = create_router_for_test();
    let request = create_request(vec![day("2025-03-10", "11")]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_decimal_eq(&row["regular_hours"], "8");
    assert_decimal_eq(&row["extra_hours_50"], "2");
    assert_decimal_eq(&row["extra_hours_100"], "1");
    assert_decimal_eq(&row["pending_hours"], "0");
    assert!(
        row["calc_note"]
            .as_str()
            .unwrap()
            .contains("8.00h regulares + 2.00h 50% + 1.00h 100%")
    );
}

#[tokio::test]
async fn test_weekday_9h_overtime_within_first_tier() {
    let router = create_router_for_test();
    let request = create_request(vec![day("2025-03-11", "9.5")]); // Tuesday

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_decimal_eq(&row["regular_hours"], "8");
    assert_decimal_eq(&row["extra_hours_50"], "1.5");
    assert_decimal_eq(&row["extra_hours_100"], "0");
}

#[tokio::test]
async fn test_weekday_deficit_accrues_pending() {
    let router = create_router_for_test();
    let request = create_request(vec![day("2025-03-12", "6")]); // Wednesday

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_decimal_eq(&row["regular_hours"], "6");
    assert_decimal_eq(&row["pending_hours"], "2");
    assert_eq!(row["is_full_shift"], false);
    assert_decimal_eq(&result["totals"]["total_pending_hours"], "2");
}

// =============================================================================
// SECTION 2: Weekend and Rest-Day Rules
// =============================================================================

#[tokio::test]
async fn test_sunday_all_hours_at_100() {
    let router = create_router_for_test();
    let request = create_request(vec![day("2025-03-16", "6")]); // Sunday

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_eq!(row["day_of_week"], "Domingo");
    assert_decimal_eq(&row["regular_hours"], "0");
    assert_decimal_eq(&row["extra_hours_100"], "6");
    assert!(row["calc_note"].as_str().unwrap().contains("Domingo"));
    assert_bucket_invariant(row);
}

#[tokio::test]
async fn test_saturday_split_at_cutoff() {
    // Saturday 10:00-18:00: 5 hours after the 13:00 cutoff at 100%
    let router = create_router_for_test();
    let request = create_request(vec![day_with_punches(
        "2025-03-15",
        "8",
        "2025-03-15T10:00:00",
        "2025-03-15T18:00:00",
    )]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_eq!(row["day_of_week"], "Sábado");
    assert_decimal_eq(&row["regular_hours"], "3");
    assert_decimal_eq(&row["extra_hours_50"], "0");
    assert_decimal_eq(&row["extra_hours_100"], "5");
    assert_bucket_invariant(row);
}

#[tokio::test]
async fn test_saturday_morning_shift_has_no_100_carve_out() {
    let router = create_router_for_test();
    let request = create_request(vec![day_with_punches(
        "2025-03-15",
        "4",
        "2025-03-15T08:00:00",
        "2025-03-15T12:00:00",
    )]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_decimal_eq(&row["regular_hours"], "4");
    assert_decimal_eq(&row["extra_hours_100"], "0");
}

#[tokio::test]
async fn test_saturday_without_punches_falls_back_to_weekday_rule() {
    let router = create_router_for_test();
    let request = create_request(vec![day("2025-03-15", "6")]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_decimal_eq(&row["regular_hours"], "6");
    assert_decimal_eq(&row["extra_hours_100"], "0");
    assert_decimal_eq(&row["pending_hours"], "2");
    assert!(
        row["calc_note"]
            .as_str()
            .unwrap()
            .contains("Sábado sin marcajes")
    );
}

#[tokio::test]
async fn test_worked_rest_day_all_hours_at_100() {
    let router = create_router_for_test();
    let request = create_request(vec![json!({
        "referenceDate": "2025-03-12",
        "hours": {"worked": "5"},
        "isWorkday": false
    })]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_eq!(row["is_rest_day"], true);
    assert_decimal_eq(&row["extra_hours_100"], "5");
    assert!(
        row["calc_note"]
            .as_str()
            .unwrap()
            .contains("Franco trabajado")
    );
}

// =============================================================================
// SECTION 3: Holidays
// =============================================================================

#[tokio::test]
async fn test_per_run_holiday_overrides_weekday_rule() {
    // Tuesday declared a holiday for this run only
    let router = create_router_for_test();
    let request = create_request_with(
        vec![day("2025-03-11", "8")],
        "0",
        vec![json!({"date": "2025-03-11", "name": "Feriado Provincial"})],
    );

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_eq!(row["is_holiday"], true);
    assert_eq!(row["holiday_name"], "Feriado Provincial");
    assert_decimal_eq(&row["regular_hours"], "0");
    assert_decimal_eq(&row["extra_hours_100"], "8");
    assert_decimal_eq(&row["pending_hours"], "0");
}

#[tokio::test]
async fn test_configured_calendar_holiday_applies() {
    // Independence Day comes from the shipped calendar, not the request
    let router = create_router_for_test();
    let request = create_request(vec![day("2025-07-09", "8")]); // Wednesday

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_eq!(row["is_holiday"], true);
    assert_eq!(row["holiday_name"], "Día de la Independencia");
    assert_decimal_eq(&row["extra_hours_100"], "8");
}

#[tokio::test]
async fn test_midnight_crossing_into_holiday_moves_attributed_date() {
    // Friday 22:00 through Saturday 02:00, with Saturday a per-run holiday
    let router = create_router_for_test();
    let request = create_request_with(
        vec![day_with_punches(
            "2025-03-14",
            "4",
            "2025-03-14T22:00:00",
            "2025-03-15T02:00:00",
        )],
        "0",
        vec![json!({"date": "2025-03-15", "name": "Feriado Puente"})],
    );

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_eq!(row["date"], "2025-03-15");
    assert_eq!(row["day_of_week"], "Sábado");
    assert_eq!(row["is_holiday"], true);
    assert_eq!(row["holiday_name"], "Feriado Puente");
    assert_decimal_eq(&row["extra_hours_100"], "4");
    assert!(
        row["calc_note"]
            .as_str()
            .unwrap()
            .contains("fecha asignada 2025-03-15")
    );
}

#[tokio::test]
async fn test_upstream_holiday_marker_wins_without_calendar_entry() {
    let router = create_router_for_test();
    let request = create_request(vec![json!({
        "referenceDate": "2025-03-13",
        "hours": {"worked": "6"},
        "holidays": [{"name": "Feriado Local"}]
    })]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_eq!(row["is_holiday"], true);
    assert_eq!(row["holiday_name"], "Feriado Local");
    assert_decimal_eq(&row["extra_hours_100"], "6");
}

// =============================================================================
// SECTION 4: Night Hours
// =============================================================================

#[tokio::test]
async fn test_night_hours_from_interval_overlap() {
    // 20:00-23:00 overlaps the 21:00-06:00 window by 2 hours
    let router = create_router_for_test();
    let request = create_request(vec![day_with_punches(
        "2025-03-10",
        "3",
        "2025-03-10T20:00:00",
        "2025-03-10T23:00:00",
    )]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_eq(&result["days"][0]["night_hours"], "2.00");
    assert_decimal_eq(&result["totals"]["total_night_hours"], "2.00");
}

#[tokio::test]
async fn test_night_hours_fallback_to_reported_bucket() {
    let router = create_router_for_test();
    let request = create_request(vec![json!({
        "referenceDate": "2025-03-10",
        "hours": {"worked": "8"},
        "categorizedHours": [{"category": "NIGHT", "hours": "3"}]
    })]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_eq(&result["days"][0]["night_hours"], "3");
}

#[tokio::test]
async fn test_night_bucket_with_nested_category_object() {
    // The upstream system wraps the bucket category in a {name: ...} object
    let router = create_router_for_test();
    let request = create_request(vec![json!({
        "referenceDate": "2025-03-10",
        "hours": {"worked": "8"},
        "categorizedHours": [{"category": {"name": "NIGHT"}, "hours": "2"}]
    })]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_eq(&result["days"][0]["night_hours"], "2");
}

#[tokio::test]
async fn test_overnight_punch_pair_advances_end_across_midnight() {
    // Clock-out "before" clock-in: overnight shift, 7 night hours
    let router = create_router_for_test();
    let request = create_request(vec![day_with_punches(
        "2025-03-10",
        "8",
        "2025-03-10T20:00:00",
        "2025-03-10T04:00:00",
    )]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_decimal_eq(&row["night_hours"], "7.00");
    assert_eq!(row["shift_end"], "2025-03-11T04:00:00");
}

// =============================================================================
// SECTION 5: Time Off, Absence and Dropped Days
// =============================================================================

#[tokio::test]
async fn test_time_off_suppresses_pending() {
    let router = create_router_for_test();
    let request = create_request(vec![json!({
        "referenceDate": "2025-03-10",
        "hours": {"worked": "4"},
        "timeOffRequests": [{"name": "Vacaciones"}]
    })]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_eq!(row["has_time_off"], true);
    assert_eq!(row["time_off_name"], "Vacaciones");
    assert_decimal_eq(&row["pending_hours"], "0");
    assert_decimal_eq(&result["totals"]["total_pending_hours"], "0");
}

#[tokio::test]
async fn test_absence_suppresses_pending() {
    let router = create_router_for_test();
    let request = create_request(vec![json!({
        "referenceDate": "2025-03-10",
        "hours": {"worked": "3"},
        "incidences": ["ABSENT_UNJUSTIFIED"]
    })]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_eq!(row["has_absence"], true);
    assert_decimal_eq(&row["pending_hours"], "0");
    assert_decimal_eq(&result["totals"]["total_pending_hours"], "0");
}

#[tokio::test]
async fn test_zero_hour_day_without_markers_is_dropped() {
    let router = create_router_for_test();
    let request = create_request(vec![day("2025-03-10", "0"), day("2025-03-11", "8")]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let days = result["days"].as_array().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["date"], "2025-03-11");
    assert_eq!(result["totals"]["total_days_worked"], 1);
}

#[tokio::test]
async fn test_zero_hour_day_with_time_off_is_kept() {
    let router = create_router_for_test();
    let request = create_request(vec![json!({
        "referenceDate": "2025-03-10",
        "timeOffRequests": [{"name": "Licencia médica"}]
    })]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let days = result["days"].as_array().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["has_time_off"], true);
    // A time-off-only row is not a worked day
    assert_eq!(result["totals"]["total_days_worked"], 0);
}

// =============================================================================
// SECTION 6: Totals and Compensation
// =============================================================================

#[tokio::test]
async fn test_week_totals_and_compensation() {
    // Mon 10h (2h at 50%), Tue 9h (1h at 50%), Wed 6h (2h pending),
    // Thu 6h (2h pending), Sun 2h (2h at 100%)
    let router = create_router_for_test();
    let request = create_request(vec![
        day("2025-03-10", "10"),
        day("2025-03-11", "9"),
        day("2025-03-12", "6"),
        day("2025-03-13", "6"),
        day("2025-03-16", "2"),
    ]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let totals = &result["totals"];
    assert_eq!(totals["total_days_worked"], 5);
    assert_decimal_eq(&totals["total_hours_worked"], "33");
    assert_decimal_eq(&totals["total_extra_hours_50"], "3");
    assert_decimal_eq(&totals["total_extra_hours_100"], "2");
    assert_decimal_eq(&totals["total_pending_hours"], "4");

    // 3h of pending absorbed at 50% one-for-one, 1h absorbed at 100% (1:1.5)
    let compensation = &result["compensation"];
    assert_decimal_eq(&compensation["compensated_with_50"], "3");
    assert_decimal_eq(&compensation["compensated_with_100"], "1");
    assert_decimal_eq(&compensation["net_extra_hours_50"], "0");
    assert_decimal_close(&compensation["net_extra_hours_100"], "1.3333");
    assert_decimal_eq(&compensation["remaining_pending_hours"], "0");
}

#[tokio::test]
async fn test_previous_pending_carries_into_compensation() {
    let router = create_router_for_test();
    let request = create_request_with(vec![day("2025-03-10", "8")], "2.5", vec![]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_eq(&result["totals"]["previous_pending_hours"], "2.5");
    assert_decimal_eq(&result["totals"]["total_pending_hours"], "2.5");
    assert_decimal_eq(&result["compensation"]["remaining_pending_hours"], "2.5");
}

#[tokio::test]
async fn test_bucket_invariant_across_mixed_week() {
    let router = create_router_for_test();
    let request = create_request(vec![
        day("2025-03-10", "11"),
        day("2025-03-11", "6"),
        day_with_punches("2025-03-15", "8", "2025-03-15T10:00:00", "2025-03-15T18:00:00"),
        day("2025-03-16", "4"),
    ]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let days = result["days"].as_array().unwrap();
    assert_eq!(days.len(), 4);
    for row in days {
        assert_bucket_invariant(row);
    }
}

#[tokio::test]
async fn test_categorization_is_idempotent() {
    let request = create_request(vec![
        day("2025-03-10", "9"),
        day_with_punches("2025-03-15", "8", "2025-03-15T10:00:00", "2025-03-15T18:00:00"),
    ]);

    let (status_a, first) = post_categorize(create_router_for_test(), request.clone()).await;
    let (status_b, second) = post_categorize(create_router_for_test(), request).await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    // Everything but the per-run metadata is identical
    assert_eq!(first["days"], second["days"]);
    assert_eq!(first["totals"], second["totals"]);
    assert_eq!(first["compensation"], second["compensation"]);
    assert_ne!(first["calculation_id"], second["calculation_id"]);
}

// =============================================================================
// SECTION 7: Degradation and Error Cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/categorize")
                .header("Content-Type", "application/json")
                .body(Body::from("{not valid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_unparseable_reference_date_skips_record() {
    let router = create_router_for_test();
    let request = create_request(vec![
        json!({"referenceDate": "10/03/2025", "hours": {"worked": "8"}}),
        day("2025-03-11", "8"),
    ]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let days = result["days"].as_array().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["date"], "2025-03-11");
}

#[tokio::test]
async fn test_unparseable_punches_degrade_to_summary_hours() {
    // Garbage punches on a Saturday: the engine falls back to treating the
    // whole day through the weekday distribution
    let router = create_router_for_test();
    let request = create_request(vec![json!({
        "referenceDate": "2025-03-15",
        "hours": {"worked": "6"},
        "entries": [
            {"type": "START", "time": "yesterday-ish"},
            {"type": "END"}
        ]
    })]);

    let (status, result) = post_categorize(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let row = &result["days"][0];
    assert_decimal_eq(&row["regular_hours"], "6");
    assert_decimal_eq(&row["extra_hours_100"], "0");
    assert!(row["shift_start"].is_null());
}

#[tokio::test]
async fn test_health_endpoint_reports_ok() {
    let router = create_router_for_test();
    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], "ok");
}
