//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{ErrorResponse, RowsQuery, SavingsSummary, StateResponse};
use crate::io::export::ReportRow;

/// Returns scenario config, summaries, and detected zones.
///
/// `GET /state` → 200 + `StateResponse` JSON
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<StateResponse> {
    let r = &state.result;
    Json(StateResponse {
        config: state.config.clone(),
        savings: SavingsSummary::from(&r.savings),
        financial: r.financial.clone(),
        heat: r.heat.clone(),
        savings_zones: r.savings_zones.clone(),
        anomaly_zones: r.anomaly_zones.clone(),
    })
}

/// Returns report rows, optionally filtered by sample index range.
///
/// `GET /rows` → 200 + `Vec<ReportRow>` JSON
/// `GET /rows?from=N&to=M` → filtered range (inclusive)
/// `GET /rows?from=10&to=5` → 400 + `ErrorResponse`
pub async fn get_rows(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RowsQuery>,
) -> impl IntoResponse {
    let from = query.from.unwrap_or(0);
    let to = query.to.unwrap_or(usize::MAX);

    if from > to {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("`from` ({from}) must be <= `to` ({to})"),
            }),
        ));
    }

    let rows: Vec<ReportRow> = state
        .result
        .rows
        .iter()
        .enumerate()
        .filter(|(i, _)| *i >= from && *i <= to)
        .map(|(_, r)| r.clone())
        .collect();

    Ok(Json(rows))
}
