use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use super::AppState;

/// GET /health - liveness probe, 200 while the process is up.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - readiness probe: verifies the store is reachable (its lock is
/// not poisoned by a panicked writer).
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.store_read() {
        Ok(store) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "parcels": store.parcels().len(),
            })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "reason": "store_unavailable",
            })),
        ),
    }
}
