//! # premia-core
//!
//! Foundation crate for the Premia prediction service.
//! Defines the feature schema, shared types, traits, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod schema;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PremiaConfig;
pub use errors::{ModelError, ModelLoadError, PremiaErrorCode, ValidationError};
pub use models::{Prediction, PredictionRecord, StoredPrediction};
pub use schema::{FeatureVector, FEATURE_COUNT, FEATURE_FIELDS};
pub use traits::{IPredictionStore, IRegressor};
