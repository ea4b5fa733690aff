mod predict;
mod retrieve;

use serde::{Deserialize, Serialize};

pub use predict::predict;
pub use retrieve::retrieve;

/// Success body shared by both routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub message: String,
    /// Prediction in original units.
    pub prediction: f64,
}

/// Map a path the router matched but could not decode into an id.
fn invalid_id(rejection: axum::extract::rejection::PathRejection) -> crate::error::ApiError {
    let reason = rejection.body_text();
    premia_observability::events::invalid_id(&reason);
    crate::error::ApiError::InvalidId { reason }
}
