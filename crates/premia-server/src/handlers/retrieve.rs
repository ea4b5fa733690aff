use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;

use premia_core::errors::PremiaErrorCode;
use premia_observability::{events, retrieve_span};

use super::PredictionResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /return_value/{id}`: the last stored prediction, in original units.
pub async fn retrieve(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Path(id) = id.map_err(super::invalid_id)?;
    retrieve_span!(id).in_scope(|| lookup(&state, id))
}

fn lookup(state: &AppState, id: String) -> Result<Json<PredictionResponse>, ApiError> {
    match state.service.lookup(&id) {
        Ok(Some(stored)) => {
            let value = stored.prediction.value;
            events::prediction_retrieved(&id, value, &stored.recorded_at.to_rfc3339());
            Ok(Json(PredictionResponse {
                message: format!("Prediction for ID {id} retrieved successfully!"),
                prediction: value,
            }))
        }
        Ok(None) => {
            events::prediction_not_found(&id);
            Err(ApiError::NotFound { id })
        }
        Err(e) => {
            events::retrieval_failed(&id, e.error_code(), &e.diagnostic());
            Err(ApiError::Retrieval(e))
        }
    }
}
