mod prediction;

pub use prediction::{Prediction, PredictionRecord, StoredPrediction};
