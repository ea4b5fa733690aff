#![allow(dead_code)]

use std::sync::Arc;

use premia_core::errors::ModelError;
use premia_core::{FeatureVector, IPredictionStore, IRegressor};
use premia_prediction::InMemoryPredictionStore;
use premia_server::AppState;
use serde_json::{json, Value};

/// Returns the same raw value for every row.
pub struct StubModel(pub f64);

impl IRegressor for StubModel {
    fn kind(&self) -> &str {
        "stub"
    }

    fn predict_batch(&self, batch: &[FeatureVector]) -> Result<Vec<f64>, ModelError> {
        Ok(vec![self.0; batch.len()])
    }
}

/// Raw output = bmi / 10, so different payloads give different predictions.
pub struct BmiModel;

impl IRegressor for BmiModel {
    fn kind(&self) -> &str {
        "bmi"
    }

    fn predict_batch(&self, batch: &[FeatureVector]) -> Result<Vec<f64>, ModelError> {
        Ok(batch.iter().map(|row| row[1] / 10.0).collect())
    }
}

pub struct PanickingModel;

impl IRegressor for PanickingModel {
    fn kind(&self) -> &str {
        "panicking"
    }

    fn predict_batch(&self, _: &[FeatureVector]) -> Result<Vec<f64>, ModelError> {
        panic!("shapes (1,11) and (12,) not aligned")
    }
}

pub fn state_with(model: Arc<dyn IRegressor>) -> (AppState, InMemoryPredictionStore) {
    let store = InMemoryPredictionStore::new();
    let shared: Arc<dyn IPredictionStore> = Arc::new(store.clone());
    (AppState::new(model, shared), store)
}

pub fn sample_payload() -> Value {
    json!({
        "age": 30,
        "bmi": 25.0,
        "children": 2,
        "sex_male": 1,
        "sex_female": 0,
        "smoker_yes": 0,
        "smoker_no": 1,
        "region_northwest": 1,
        "region_southeast": 0,
        "region_southwest": 0,
        "region_northeast": 0
    })
}
