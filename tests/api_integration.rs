//! Integration tests for the REST API surface.

#![cfg(feature = "api")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt;

use eaf_sim::api::{AppState, router};
use eaf_sim::config::ScenarioConfig;
use eaf_sim::runner::run_scenario;

fn make_state() -> Arc<AppState> {
    let config = ScenarioConfig::demo();
    let result = run_scenario(&config);
    Arc::new(AppState { config, result })
}

#[tokio::test]
async fn state_exposes_config_and_summaries() {
    let app = router(make_state());
    let req = Request::builder()
        .uri("/state")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["config"]["simulation"]["duration_min"], 30);
    assert_eq!(json["savings"]["samples"], 140);
    assert!(json["financial"]["roi_months"].is_number());
    assert!(json["savings_zones"].is_array());
    assert!(json["anomaly_zones"].is_array());
}

#[tokio::test]
async fn rows_round_trip_matches_run_length() {
    let state = make_state();
    let expected = state.result.rows.len();
    let app = router(state);

    let req = Request::builder().uri("/rows").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Vec<Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(json.len(), expected);

    // schema spot-check on the first row
    let first = &json[0];
    assert!(first["time_min"].is_number());
    assert_eq!(first["phase"], "live");
    assert!(first["baseline_mw"].is_number());
}

#[tokio::test]
async fn rows_inverted_range_is_rejected() {
    let app = router(make_state());
    let req = Request::builder()
        .uri("/rows?from=20&to=3")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
