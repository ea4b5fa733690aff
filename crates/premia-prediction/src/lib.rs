//! # premia-prediction
//!
//! The request-independent core of the service:
//!
//! - [`encoder`] turns an untyped JSON record into a [`FeatureVector`](premia_core::FeatureVector),
//!   applying `log1p` to `children`.
//! - [`PredictionService`] runs the model on a single-row batch, undoes the
//!   target transform with `expm1`, and records the raw output.
//! - [`InMemoryPredictionStore`] keeps the last raw prediction per id.

pub mod encoder;
pub mod service;
pub mod store;
pub mod transform;

pub use encoder::encode;
pub use service::PredictionService;
pub use store::InMemoryPredictionStore;
