//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Instant;

use elionyx_predict::PredictionPipeline;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub pipeline: PredictionPipeline,
    /// Process start, reported as uptime by the health endpoint.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(pipeline: PredictionPipeline) -> Self {
        Self { pipeline, started_at: Instant::now() }
    }
}

pub type SharedState = Arc<AppState>;
