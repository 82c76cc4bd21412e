//! Efficiency Monitor inference server.
//!
//! Serves one capability: given a set of sensor readings, return the
//! predicted efficiency class from a pre-trained classifier.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    EFFMON SERVER                           │
//! ├────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌─────────────┐   ┌────────────────────┐  │
//! │  │  API      │   │  Schema     │   │  Inference         │  │
//! │  │  (Axum)   │──▶│  Validator  │──▶│  (ONNX classifier  │  │
//! │  │           │   │  (v1 / v2)  │   │   + label table)   │  │
//! │  └───────────┘   └─────────────┘   └────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The model and label table are loaded once at startup and shared
//! read-only across all requests through [`AppState`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod schema;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn model::Classifier>,
    pub decoder: Arc<dyn model::LabelDecoder>,
    pub schema: schema::FeatureSchema,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/schema", get(handlers::schema_info::get))
        .route("/predict", post(handlers::predict::predict))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
