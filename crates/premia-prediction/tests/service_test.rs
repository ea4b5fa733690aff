use std::sync::Arc;

use chrono::Utc;

use premia_core::errors::ModelError;
use premia_core::{FeatureVector, IPredictionStore, IRegressor};
use premia_prediction::{encode, InMemoryPredictionStore, PredictionService};
use serde_json::json;

/// Returns a fixed raw value per row and remembers the rows it saw.
struct FixedModel {
    raw: f64,
    seen: std::sync::Mutex<Vec<FeatureVector>>,
}

impl FixedModel {
    fn new(raw: f64) -> Self {
        Self {
            raw,
            seen: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl IRegressor for FixedModel {
    fn kind(&self) -> &str {
        "fixed"
    }

    fn predict_batch(&self, batch: &[FeatureVector]) -> Result<Vec<f64>, ModelError> {
        self.seen.lock().unwrap().extend_from_slice(batch);
        Ok(vec![self.raw; batch.len()])
    }
}

struct FailingModel;

impl IRegressor for FailingModel {
    fn kind(&self) -> &str {
        "failing"
    }

    fn predict_batch(&self, _: &[FeatureVector]) -> Result<Vec<f64>, ModelError> {
        Err(ModelError::inference("numeric failure"))
    }
}

struct PanickingModel;

impl IRegressor for PanickingModel {
    fn kind(&self) -> &str {
        "panicking"
    }

    fn predict_batch(&self, _: &[FeatureVector]) -> Result<Vec<f64>, ModelError> {
        panic!("tree index out of range")
    }
}

/// Returns two predictions no matter how many rows it gets.
struct WideModel;

impl IRegressor for WideModel {
    fn kind(&self) -> &str {
        "wide"
    }

    fn predict_batch(&self, _: &[FeatureVector]) -> Result<Vec<f64>, ModelError> {
        Ok(vec![1.0, 2.0])
    }
}

fn sample_vector() -> FeatureVector {
    let raw = json!({
        "age": 30, "bmi": 25.0, "children": 2,
        "sex_male": 1, "sex_female": 0, "smoker_yes": 0, "smoker_no": 1,
        "region_northwest": 1, "region_southeast": 0, "region_southwest": 0, "region_northeast": 0
    });
    encode(raw.as_object().unwrap()).unwrap()
}

fn service_with(model: Arc<dyn IRegressor>) -> (PredictionService, InMemoryPredictionStore) {
    let store = InMemoryPredictionStore::new();
    let service = PredictionService::new(model, Arc::new(store.clone()));
    (service, store)
}

#[test]
fn sample_scenario_returns_expm1_of_raw() {
    let model = Arc::new(FixedModel::new(2.0));
    let (service, _) = service_with(model.clone());

    let prediction = service.predict(&sample_vector()).unwrap();
    assert_eq!(prediction.raw, 2.0);
    assert!((prediction.value - 6.389).abs() < 1e-3);
    assert_eq!(prediction.value, 2f64.exp_m1());

    let seen = model.seen.lock().unwrap();
    assert_eq!(seen.len(), 1, "model must see a batch of one row");
    assert!((seen[0][2] - 1.0986).abs() < 1e-4);
}

#[test]
fn record_stores_raw_scale_value() {
    let (service, store) = service_with(Arc::new(FixedModel::new(2.0)));

    let prediction = service.record("42", &sample_vector()).unwrap();
    assert_eq!(store.read("42").unwrap().raw, 2.0);

    let looked_up = service.lookup("42").unwrap().unwrap();
    assert_eq!(looked_up.prediction, prediction);
}

#[test]
fn lookup_carries_write_time() {
    let (service, store) = service_with(Arc::new(FixedModel::new(2.0)));

    let before = Utc::now();
    service.record("42", &sample_vector()).unwrap();
    let after = Utc::now();

    let looked_up = service.lookup("42").unwrap().unwrap();
    assert!(looked_up.recorded_at >= before && looked_up.recorded_at <= after);
    assert_eq!(looked_up.recorded_at, store.read("42").unwrap().recorded_at);
}

#[test]
fn lookup_of_unknown_id_is_none() {
    let (service, _) = service_with(Arc::new(FixedModel::new(2.0)));
    assert_eq!(service.lookup("never-written").unwrap(), None);
}

#[test]
fn second_record_replaces_first() {
    let store = InMemoryPredictionStore::new();
    let shared: Arc<dyn IPredictionStore> = Arc::new(store.clone());
    let first = PredictionService::new(Arc::new(FixedModel::new(1.0)), shared.clone());
    let second = PredictionService::new(Arc::new(FixedModel::new(3.0)), shared);

    first.record("42", &sample_vector()).unwrap();
    second.record("42", &sample_vector()).unwrap();

    let value = first.lookup("42").unwrap().unwrap().prediction.value;
    assert_eq!(value, 3f64.exp_m1());
}

#[test]
fn model_error_is_propagated_and_nothing_is_stored() {
    let (service, store) = service_with(Arc::new(FailingModel));
    let err = service.record("42", &sample_vector()).unwrap_err();
    assert_eq!(err, ModelError::inference("numeric failure"));
    assert!(store.is_empty());
}

#[test]
fn model_panic_is_caught() {
    let (service, store) = service_with(Arc::new(PanickingModel));
    let err = service.record("42", &sample_vector()).unwrap_err();
    assert_eq!(
        err,
        ModelError::Panicked {
            message: "tree index out of range".into()
        }
    );
    assert!(store.is_empty());
}

#[test]
fn wrong_output_length_is_a_shape_mismatch() {
    let (service, _) = service_with(Arc::new(WideModel));
    let err = service.predict(&sample_vector()).unwrap_err();
    assert_eq!(
        err,
        ModelError::ShapeMismatch {
            expected: 1,
            actual: 2
        }
    );
}

#[test]
fn non_finite_outputs_are_refused() {
    for raw in [f64::NAN, f64::INFINITY, 1_000.0] {
        let (service, store) = service_with(Arc::new(FixedModel::new(raw)));
        let err = service.record("42", &sample_vector()).unwrap_err();
        assert!(matches!(err, ModelError::NonFiniteOutput { .. }), "raw {raw}");
        assert!(store.is_empty());
    }
}

#[test]
fn unrepresentable_stored_value_fails_lookup() {
    let (service, store) = service_with(Arc::new(FixedModel::new(2.0)));
    store.write("overflow", 1_000.0);
    let err = service.lookup("overflow").unwrap_err();
    assert!(matches!(err, ModelError::NonFiniteOutput { .. }));
}
