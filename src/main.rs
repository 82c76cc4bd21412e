//! Efficiency Monitor - Inference API Server
//!
//! Loads the trained classifier and label table once, then serves
//! predictions over HTTP until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use effmon_server::config::Config;
use effmon_server::model::labels::LabelTable;
use effmon_server::model::onnx::OnnxClassifier;
use effmon_server::{create_router, AppState};

#[tokio::main]
async fn main() {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging (structured JSON in production)
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "effmon_server=debug,tower_http=debug".into()));
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Efficiency inference server starting...");
    tracing::info!("Schema: {} ({} features)", config.schema, config.schema.field_count());

    // Load model artifacts (once, shared read-only across requests)
    let classifier = OnnxClassifier::load(&config.model_path, config.schema.field_count())
        .expect("Failed to load classifier model");
    let decoder = LabelTable::load(&config.labels_path)
        .expect("Failed to load label table");

    // Build application state
    let state = AppState {
        classifier: Arc::new(classifier),
        decoder: Arc::new(decoder),
        schema: config.schema,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
