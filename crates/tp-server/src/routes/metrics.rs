//! Session metrics endpoints.

use axum::Json;
use axum::extract::State;

use crate::metrics::MetricsSnapshot;
use crate::state::AppState;

/// GET /api/v1/metrics — counters since the last reset.
pub async fn get_metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.read().await.snapshot())
}

/// POST /api/v1/metrics/reset — clear counters, returning the old values.
pub async fn reset_metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    let before = state.metrics.write().await.reset();
    tracing::info!(tool_calls = before.total_tool_calls, "session metrics reset");
    Json(before)
}
