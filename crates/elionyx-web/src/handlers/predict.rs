//! Batch property-prediction endpoint.

use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use elionyx_molecules::validate_smiles;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub smiles: Option<String>,
    pub properties: Option<Vec<String>>,
    pub target: Option<String>,
}

/// POST /api/predict - Evaluate a batch of properties for one molecule.
/// Per-property failures come back inline; the batch itself never fails.
pub async fn predict(
    State(state): State<SharedState>,
    Json(req): Json<PredictRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let smiles = req.smiles.as_deref().unwrap_or("").trim();
    let properties = req.properties.unwrap_or_default();
    if smiles.is_empty() || properties.is_empty() {
        return Err(ApiError::bad_request(
            "Missing required fields: smiles, properties",
        ));
    }
    validate_smiles(smiles)
        .map_err(|e| ApiError::bad_request(format!("Invalid SMILES: {e}")))?;

    let predictions = state
        .pipeline
        .evaluate(smiles, &properties, req.target.as_deref())
        .await?;
    Ok(Json(json!({ "predictions": predictions })))
}
