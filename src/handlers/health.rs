//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;
use crate::schema::FeatureSchema;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    schema_version: FeatureSchema,
    feature_count: usize,
    timestamp: i64,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        schema_version: state.schema,
        feature_count: state.schema.field_count(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
