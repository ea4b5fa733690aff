pub mod prediction_store;
pub mod regressor;

pub use prediction_store::IPredictionStore;
pub use regressor::IRegressor;
