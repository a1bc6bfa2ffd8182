use crate::AppState;

use axum::{Json, extract::State};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    /// Seconds since the server started
    pub uptime: f64,
}

/// GET /api/v1/health
///
/// Liveness check. Not wrapped in the response envelope.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: crate::api::envelope::timestamp(),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}
