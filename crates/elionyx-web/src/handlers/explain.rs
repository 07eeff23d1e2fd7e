//! Prediction-explanation endpoint.

use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    pub smiles: Option<String>,
    pub property_id: Option<String>,
    pub prediction: Option<String>,
}

/// POST /api/explain - Structural rationale for an already-computed prediction.
pub async fn explain(
    State(state): State<SharedState>,
    Json(req): Json<ExplainRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let smiles = req.smiles.as_deref().unwrap_or("");
    let property_id = req.property_id.as_deref().unwrap_or("");
    let prediction = req.prediction.as_deref().unwrap_or("");
    if smiles.is_empty() || property_id.is_empty() || prediction.is_empty() {
        return Err(ApiError::bad_request(
            "Missing required fields: smiles, propertyId, prediction",
        ));
    }

    let result = state
        .pipeline
        .explain(smiles, property_id, prediction)
        .await?;
    Ok(Json(json!({ "explanation": result.explanation })))
}
