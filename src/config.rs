//! Configuration module

use std::env;

use crate::schema::FeatureSchema;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the exported ONNX classifier
    pub model_path: String,

    /// Path to the label table (JSON array of class names, in encoder order)
    pub labels_path: String,

    /// Feature schema version this deployment serves
    pub schema: FeatureSchema,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "efficiency_model.onnx".to_string()),

            labels_path: env::var("LABELS_PATH")
                .unwrap_or_else(|_| "label_classes.json".to_string()),

            schema: env::var("SCHEMA_VERSION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(FeatureSchema::V1),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(environment: &str) -> Config {
        Config {
            model_path: "efficiency_model.onnx".to_string(),
            labels_path: "label_classes.json".to_string(),
            schema: FeatureSchema::V1,
            port: 8080,
            environment: environment.to_string(),
        }
    }

    #[test]
    fn test_is_production() {
        assert!(config("production").is_production());
        assert!(!config("development").is_production());
        assert!(!config("staging").is_production());
    }
}
