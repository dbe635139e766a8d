//! # Health Probes

use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

const READINESS_LOCK_TIMEOUT: Duration = Duration::from_millis(250);

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
}

/// 200 while the process is up
async fn liveness() -> &'static str {
    "ok"
}

/// 200 once the store can be read; 503 if its lock stays contended
async fn readiness(State(state): State<AppState>) -> (StatusCode, &'static str) {
    if state.is_ready(READINESS_LOCK_TIMEOUT) {
        (StatusCode::OK, "ready")
    } else {
        tracing::warn!("readiness probe could not acquire the store lock");
        (StatusCode::SERVICE_UNAVAILABLE, "not ready")
    }
}
