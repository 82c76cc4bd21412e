//! Schema introspection handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;
use crate::schema::FeatureSchema;

#[derive(Serialize)]
pub struct SchemaInfo {
    version: FeatureSchema,
    field_count: usize,
    fields: Vec<String>,
}

/// Report the active schema: version, field count, and field names in
/// classifier order
pub async fn get(State(state): State<AppState>) -> Json<SchemaInfo> {
    Json(SchemaInfo {
        version: state.schema,
        field_count: state.schema.field_count(),
        fields: state.schema.fields().iter().map(|s| s.to_string()).collect(),
    })
}
