//! The model's training schema: eleven numeric columns in a fixed order.

use serde::{Deserialize, Serialize};

/// Number of features the model was trained on.
pub const FEATURE_COUNT: usize = 11;

/// Feature names in training column order.
pub const FEATURE_FIELDS: [&str; FEATURE_COUNT] = [
    "age",
    "bmi",
    "children",
    "sex_male",
    "sex_female",
    "smoker_yes",
    "smoker_no",
    "region_northwest",
    "region_southeast",
    "region_southwest",
    "region_northeast",
];

/// Position of a field within the schema, if it belongs to it.
pub fn field_index(name: &str) -> Option<usize> {
    FEATURE_FIELDS.iter().position(|f| *f == name)
}

/// One encoded input row, in schema order.
///
/// The `children` entry already carries `ln(1 + x)`. The fixed-size array
/// means a vector can never be short or carry a hole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Value for a named field.
    pub fn get(&self, name: &str) -> Option<f64> {
        field_index(name).map(|i| self.0[i])
    }

    /// Iterate `(field, value)` pairs in schema order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_FIELDS.iter().copied().zip(self.0.iter().copied())
    }
}

impl std::ops::Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}
