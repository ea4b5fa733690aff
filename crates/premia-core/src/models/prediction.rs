use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A model prediction on both scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Model-native (log1p) scale. This is what the store keeps.
    pub raw: f64,
    /// Original units, `expm1(raw)`. This is what clients see.
    pub value: f64,
}

/// Stored entry for one identifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Raw model output, exactly as produced.
    pub raw: f64,
    pub recorded_at: DateTime<Utc>,
}

impl PredictionRecord {
    pub fn new(raw: f64) -> Self {
        Self {
            raw,
            recorded_at: Utc::now(),
        }
    }
}

/// A stored prediction read back, with the time it was written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredPrediction {
    pub prediction: Prediction,
    pub recorded_at: DateTime<Utc>,
}
