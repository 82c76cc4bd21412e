//! Inference pipeline
//!
//! The classifier and label decoder are injected behind traits so the
//! pipeline can run against the real ONNX session in production and
//! against stubs in tests. Both are loaded once at startup and shared
//! read-only across requests.

pub mod labels;
pub mod onnx;

use serde::Serialize;
use thiserror::Error;

use crate::schema::{FeatureSchema, FeatureVector};

/// Classifier or decoder invocation failed.
///
/// There is no transient-failure mode in a synchronous local computation,
/// so this is never retried.
#[derive(Debug, Error)]
#[error("inference error: {0}")]
pub struct InferenceError(pub String);

/// Maps a feature vector to a raw prediction code.
pub trait Classifier: Send + Sync {
    /// Single-row prediction. The vector's length and order must match
    /// what the model was trained on; shape is guaranteed by schema
    /// validation upstream and is not re-checked here.
    fn predict(&self, features: &[f32]) -> Result<i64, InferenceError>;
}

/// Maps a raw prediction code back to its human-readable class label.
pub trait LabelDecoder: Send + Sync {
    fn decode(&self, code: i64) -> Result<String, InferenceError>;
}

/// Decoded prediction returned to the caller
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub label: String,
    pub schema_version: FeatureSchema,
}

/// Run the classifier and decode its output.
///
/// Deterministic given fixed classifier/decoder state and input; any
/// failure in either step surfaces as [`InferenceError`].
pub fn predict(
    features: &FeatureVector,
    classifier: &dyn Classifier,
    decoder: &dyn LabelDecoder,
) -> Result<Prediction, InferenceError> {
    let code = classifier.predict(features.as_slice())?;
    let label = decoder.decode(code)?;

    Ok(Prediction {
        label,
        schema_version: features.version,
    })
}
