//! Liveness endpoint.

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::state::SharedState;

/// GET /api/health - Liveness probe reporting process uptime.
pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "uptime": state.started_at.elapsed().as_secs_f64(),
        "message": "Elionyx API is running",
    }))
}
