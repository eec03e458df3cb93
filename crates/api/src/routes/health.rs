use axum::extract::State;
use axum::{routing::get, Json, Router};

use reelforge_core::health::HealthStatus;

use crate::state::AppState;

/// GET /health -- liveness probe; touches no provider.
async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::for_service(
        &state.config.service_name,
        &state.config.service_version,
    ))
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
