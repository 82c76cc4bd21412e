//! Label table - decodes raw prediction codes
//!
//! The table is the encoder's class list in training order, exported to a
//! JSON array of strings. A prediction code is simply an index into it.

use std::fs;

use super::{InferenceError, LabelDecoder};

pub struct LabelTable {
    classes: Vec<String>,
}

impl LabelTable {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Load the class list from a JSON file
    pub fn load(path: &str) -> Result<Self, InferenceError> {
        tracing::info!("Loading label table from: {}", path);

        let raw = fs::read_to_string(path)
            .map_err(|e| InferenceError(format!("Failed to read label table {}: {}", path, e)))?;

        let classes: Vec<String> = serde_json::from_str(&raw)
            .map_err(|e| InferenceError(format!("Invalid label table {}: {}", path, e)))?;

        if classes.is_empty() {
            return Err(InferenceError(format!("Label table {} is empty", path)));
        }

        let table = Self::new(classes);
        tracing::info!("Label table loaded ({} classes)", table.len());
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl LabelDecoder for LabelTable {
    fn decode(&self, code: i64) -> Result<String, InferenceError> {
        usize::try_from(code)
            .ok()
            .and_then(|index| self.classes.get(index))
            .cloned()
            .ok_or_else(|| InferenceError(format!("Unknown prediction code: {}", code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LabelTable {
        LabelTable::new(vec![
            "High".to_string(),
            "Low".to_string(),
            "Medium".to_string(),
        ])
    }

    #[test]
    fn test_len() {
        assert_eq!(table().len(), 3);
        assert!(!table().is_empty());
    }

    #[test]
    fn test_decode_known_codes() {
        let table = table();
        assert_eq!(table.decode(0).unwrap(), "High");
        assert_eq!(table.decode(2).unwrap(), "Medium");
    }

    #[test]
    fn test_decode_out_of_range() {
        let err = table().decode(3).unwrap_err();
        assert!(err.to_string().contains("Unknown prediction code: 3"));
    }

    #[test]
    fn test_decode_negative_code() {
        assert!(table().decode(-1).is_err());
    }
}
