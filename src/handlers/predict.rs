//! Prediction handler

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::{AppState, AppResult, AppError};
use crate::model;
use crate::schema::FeatureSchema;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub efficiency: String,
    pub schema_version: FeatureSchema,
}

/// Run the validation + inference pipeline for one reading
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<Json<PredictResponse>> {
    let payload = payload
        .as_object()
        .ok_or_else(|| AppError::BadRequest("Request body must be a JSON object".to_string()))?;

    // Fail fast: no inference call until the payload is fully validated
    let features = state.schema.validate(payload)?;

    let prediction = model::predict(&features, state.classifier.as_ref(), state.decoder.as_ref())?;

    Ok(Json(PredictResponse {
        efficiency: prediction.label,
        schema_version: prediction.schema_version,
    }))
}
