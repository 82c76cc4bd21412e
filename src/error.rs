//! Error handling
//!
//! Validation failures are client errors and name the offending field;
//! execution failures are generic server errors with the detail kept in
//! the server log. A response is either a complete prediction or an
//! error, never both.

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::model::InferenceError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Validation errors (detected before any inference call)
    MissingField(String),
    InvalidFieldType { field: String, got: &'static str },
    BadRequest(String),

    // Inference errors (only possible after validation succeeded)
    Execution(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required field '{}'", field),
            ),
            AppError::InvalidFieldType { field, got } => (
                StatusCode::BAD_REQUEST,
                format!("Field '{}' must be a number, got {}", field, got),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Execution(msg) => {
                tracing::error!("Inference execution failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Prediction failed".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        AppError::Execution(err.to_string())
    }
}
