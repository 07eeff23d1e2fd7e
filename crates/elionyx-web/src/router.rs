//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{chat::chat, explain::explain, health::health, predict::predict};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/api/predict", post(predict))
        .route("/api/explain", post(explain))
        .route("/api/chat",    post(chat))
        .route("/api/health",  get(health))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
