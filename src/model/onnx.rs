//! ONNX Runtime classifier
//!
//! Wraps an exported sklearn-style classifier whose first output is the
//! int64 label tensor. Session runs take `&mut`, so the session sits
//! behind a mutex; single-row inference is fast enough that contention
//! is not a concern.

use ndarray::Array2;
use parking_lot::Mutex;
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Value;

use super::{Classifier, InferenceError};

pub struct OnnxClassifier {
    session: Mutex<Session>,
    output_name: String,
    feature_count: usize,
}

impl OnnxClassifier {
    /// Load the model from an ONNX file
    pub fn load(model_path: &str, feature_count: usize) -> Result<Self, InferenceError> {
        tracing::info!("Loading ONNX model from: {}", model_path);

        if !std::path::Path::new(model_path).exists() {
            return Err(InferenceError(format!("Model not found: {}", model_path)));
        }

        let session = Session::builder()
            .map_err(|e| InferenceError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError(format!("Failed to load model: {}", e)))?;

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError("Model defines no outputs".to_string()))?;

        tracing::info!("ONNX model loaded successfully");

        Ok(Self {
            session: Mutex::new(session),
            output_name,
            feature_count,
        })
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &[f32]) -> Result<i64, InferenceError> {
        // Single-row input tensor (1 x feature_count)
        let input_array = Array2::<f32>::from_shape_vec((1, self.feature_count), features.to_vec())
            .map_err(|e| InferenceError(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| InferenceError("No output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<i64>()
            .map_err(|e| InferenceError(format!("Extract error: {}", e)))?;

        let data = output_tensor.1;
        data.first()
            .copied()
            .ok_or_else(|| InferenceError("Empty prediction output".to_string()))
    }
}
