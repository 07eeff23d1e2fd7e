//! Conversational-assistant endpoint.

use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use serde::Deserialize;

use elionyx_common::{ChatTurn, PredictionResult};

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Option<Vec<ChatTurn>>,
    pub current_smiles: Option<String>,
    pub current_predictions: Option<Vec<PredictionResult>>,
}

/// POST /api/chat - One conversational turn with optional molecule context.
pub async fn chat(
    State(state): State<SharedState>,
    Json(req): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let messages = req.messages.unwrap_or_default();
    if messages.is_empty() {
        return Err(ApiError::bad_request("Missing required field: messages"));
    }

    let reply = state
        .pipeline
        .chat(
            &messages,
            req.current_smiles.as_deref(),
            req.current_predictions.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(Json(reply))
}
