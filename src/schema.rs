//! Feature schema - the authoritative layout of classifier input
//!
//! ## Rules (NEVER break these):
//! 1. Field order is fixed per version and determines the position of each
//!    value in the vector passed to the classifier.
//! 2. The model was trained against exactly this order; adding, removing or
//!    reordering a field means a new schema version and a retrained model.
//! 3. Never rebuild the vector by iterating an unordered map.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;

/// v1 field names, in training order
pub const SCHEMA_V1_FIELDS: &[&str] = &[
    "temperature",
    "humidity",
    "voltage",
    "current",
    "hour",
];

/// v2 field names, in training order
pub const SCHEMA_V2_FIELDS: &[&str] = &[
    "temperature",
    "humidity",
    "voltage",
    "current",
    "charging_encoded",
    "day",
    "hour",
];

/// Versioned feature schema.
///
/// Selects the required fields and their order for one deployment. Both
/// versions share the same validation pipeline; only the field list
/// differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureSchema {
    V1,
    V2,
}

impl FeatureSchema {
    /// Required field names, in the exact order the classifier expects
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            FeatureSchema::V1 => SCHEMA_V1_FIELDS,
            FeatureSchema::V2 => SCHEMA_V2_FIELDS,
        }
    }

    /// Number of features in this schema
    pub fn field_count(self) -> usize {
        self.fields().len()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureSchema::V1 => "v1",
            FeatureSchema::V2 => "v2",
        }
    }

    /// Validate a request payload against this schema.
    ///
    /// Walks the declared fields in order, resolving each against the
    /// payload, and fails on the first absent field. Coercion is strict:
    /// a value must be a JSON number; numeric strings, booleans, nulls
    /// and containers are rejected. Unknown extra keys are ignored.
    ///
    /// Pure function of its inputs; the classifier is never touched here.
    pub fn validate(self, payload: &Map<String, Value>) -> Result<FeatureVector, AppError> {
        let mut values = Vec::with_capacity(self.field_count());

        for &field in self.fields() {
            let value = payload
                .get(field)
                .ok_or_else(|| AppError::MissingField(field.to_string()))?;

            let number = value.as_f64().ok_or_else(|| AppError::InvalidFieldType {
                field: field.to_string(),
                got: json_type_name(value),
            })?;

            values.push(number as f32);
        }

        Ok(FeatureVector { version: self, values })
    }
}

impl FromStr for FeatureSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(FeatureSchema::V1),
            "v2" | "2" => Ok(FeatureSchema::V2),
            other => Err(format!("Unknown schema version: {}", other)),
        }
    }
}

impl fmt::Display for FeatureSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Ordered numeric feature vector produced by schema validation.
///
/// Length always equals the schema's field count; element order matches
/// the schema's declared field order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    pub version: FeatureSchema,
    pub values: Vec<f32>,
}

impl FeatureVector {
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().expect("test payload must be an object").clone()
    }

    fn v1_payload() -> Map<String, Value> {
        payload(json!({
            "temperature": 25.0,
            "humidity": 40.0,
            "voltage": 12.1,
            "current": 1.8,
            "hour": 14
        }))
    }

    #[test]
    fn test_field_counts() {
        assert_eq!(FeatureSchema::V1.field_count(), 5);
        assert_eq!(FeatureSchema::V2.field_count(), 7);
        assert_eq!(SCHEMA_V1_FIELDS.len(), 5);
        assert_eq!(SCHEMA_V2_FIELDS.len(), 7);
    }

    #[test]
    fn test_validate_v1_preserves_declared_order() {
        let vector = FeatureSchema::V1.validate(&v1_payload()).unwrap();
        assert_eq!(vector.version, FeatureSchema::V1);
        assert_eq!(vector.as_slice(), &[25.0, 40.0, 12.1, 1.8, 14.0]);
    }

    #[test]
    fn test_validate_missing_field_names_exactly_that_field() {
        for &field in FeatureSchema::V1.fields() {
            let mut p = v1_payload();
            p.remove(field);

            match FeatureSchema::V1.validate(&p) {
                Err(AppError::MissingField(name)) => assert_eq!(name, field),
                other => panic!("expected MissingField for '{}', got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_validate_v2_missing_charging_encoded() {
        // v1-shaped payload plus day, but no charging_encoded
        let mut p = v1_payload();
        p.insert("day".to_string(), json!(3));

        match FeatureSchema::V2.validate(&p) {
            Err(AppError::MissingField(name)) => assert_eq!(name, "charging_encoded"),
            other => panic!("expected MissingField(charging_encoded), got {:?}", other),
        }
    }

    #[test]
    fn test_validate_v2_full_payload() {
        let p = payload(json!({
            "temperature": 25.0,
            "humidity": 40.0,
            "voltage": 12.1,
            "current": 1.8,
            "charging_encoded": 1,
            "day": 3,
            "hour": 14
        }));

        let vector = FeatureSchema::V2.validate(&p).unwrap();
        assert_eq!(vector.as_slice(), &[25.0, 40.0, 12.1, 1.8, 1.0, 3.0, 14.0]);
    }

    #[test]
    fn test_validate_rejects_numeric_string() {
        let mut p = v1_payload();
        p.insert("temperature".to_string(), json!("25.0"));

        match FeatureSchema::V1.validate(&p) {
            Err(AppError::InvalidFieldType { field, got }) => {
                assert_eq!(field, "temperature");
                assert_eq!(got, "string");
            }
            other => panic!("expected InvalidFieldType, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_bool_and_null() {
        let mut p = v1_payload();
        p.insert("hour".to_string(), json!(true));
        assert!(matches!(
            FeatureSchema::V1.validate(&p),
            Err(AppError::InvalidFieldType { got: "boolean", .. })
        ));

        let mut p = v1_payload();
        p.insert("voltage".to_string(), Value::Null);
        assert!(matches!(
            FeatureSchema::V1.validate(&p),
            Err(AppError::InvalidFieldType { got: "null", .. })
        ));
    }

    #[test]
    fn test_validate_ignores_unknown_fields() {
        let mut p = v1_payload();
        p.insert("site_id".to_string(), json!("plant-7"));
        p.insert("firmware".to_string(), json!([1, 2, 3]));

        let vector = FeatureSchema::V1.validate(&p).unwrap();
        assert_eq!(vector.as_slice(), &[25.0, 40.0, 12.1, 1.8, 14.0]);
    }

    #[test]
    fn test_schema_version_parsing() {
        assert_eq!("v1".parse::<FeatureSchema>().unwrap(), FeatureSchema::V1);
        assert_eq!("V2".parse::<FeatureSchema>().unwrap(), FeatureSchema::V2);
        assert_eq!("2".parse::<FeatureSchema>().unwrap(), FeatureSchema::V2);
        assert!("v3".parse::<FeatureSchema>().is_err());
    }

    #[test]
    fn test_schema_version_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FeatureSchema::V1).unwrap(), "\"v1\"");
        assert_eq!(serde_json::to_string(&FeatureSchema::V2).unwrap(), "\"v2\"");
    }
}
