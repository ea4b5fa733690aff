use std::sync::Arc;

use premia_core::{IPredictionStore, IRegressor};
use premia_prediction::PredictionService;

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub service: PredictionService,
}

impl AppState {
    pub fn new(model: Arc<dyn IRegressor>, store: Arc<dyn IPredictionStore>) -> Self {
        Self {
            service: PredictionService::new(model, store),
        }
    }
}
