//! Schema-driven validation of raw JSON records.

use serde_json::{Map, Value};

use premia_core::constants::LOG_TRANSFORMED_INDEX;
use premia_core::errors::ValidationError;
use premia_core::{FeatureVector, FEATURE_COUNT, FEATURE_FIELDS};

use crate::transform;

/// Validate `raw` against the feature schema and build the model input row.
///
/// Fields are checked in schema order and the first failure is returned.
/// Keys outside the schema are ignored. `children` is replaced with
/// `log1p(children)`; a value that makes that non-finite (≤ -1) is rejected.
pub fn encode(raw: &Map<String, Value>) -> Result<FeatureVector, ValidationError> {
    let mut values = [0.0; FEATURE_COUNT];
    for (slot, field) in values.iter_mut().zip(FEATURE_FIELDS) {
        *slot = numeric_field(raw, field)?;
    }

    let children = values[LOG_TRANSFORMED_INDEX];
    let transformed = transform::log1p(children);
    if !transformed.is_finite() {
        return Err(ValidationError::OutOfDomain {
            field: FEATURE_FIELDS[LOG_TRANSFORMED_INDEX],
            value: children,
        });
    }
    values[LOG_TRANSFORMED_INDEX] = transformed;

    Ok(FeatureVector::new(values))
}

/// A JSON number, and nothing else. Booleans are not numbers here.
fn numeric_field(raw: &Map<String, Value>, field: &'static str) -> Result<f64, ValidationError> {
    match raw.get(field) {
        None | Some(Value::Null) => Err(ValidationError::Missing { field }),
        Some(Value::Number(n)) => n.as_f64().ok_or(ValidationError::InvalidType {
            field,
            found: "number",
        }),
        Some(other) => Err(ValidationError::InvalidType {
            field,
            found: json_type(other),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
