use axum::extract::State;
use axum::{routing::get, Router};
use serde::Serialize;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the store answered within its timeout.
    pub store_healthy: bool,
}

/// GET /health -- returns service and store health.
async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthResponse> {
    let store_healthy = taskdesk_db::health_check(&state.store).await.is_ok();

    let status = if store_healthy { "ok" } else { "degraded" };

    ApiResponse::success(Some(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
    }))
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
