use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;

use premia_core::errors::PremiaErrorCode;
use premia_observability::{events, predict_span};
use premia_prediction::encode;

use super::PredictionResponse;
use crate::error::ApiError;
use crate::payload::{self, NoDataReason};
use crate::state::AppState;

/// `POST /predict/{id}`: validate, predict, store, respond in original units.
pub async fn predict(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Path(id) = id.map_err(super::invalid_id)?;
    predict_span!(id).in_scope(|| {
        let body = body.map_err(|rejection| {
            tracing::warn!(error = %rejection, "request body could not be read");
            events::no_data(&id, NoDataReason::Unreadable.as_str());
            ApiError::NoData {
                reason: NoDataReason::Unreadable,
            }
        })?;
        submit(&state, &id, &body)
    })
}

fn submit(state: &AppState, id: &str, body: &[u8]) -> Result<Json<PredictionResponse>, ApiError> {
    let record = payload::parse_record(body).map_err(|reason| {
        events::no_data(id, reason.as_str());
        ApiError::NoData { reason }
    })?;
    tracing::debug!(input = ?record, "input data");

    let vector = encode(&record).map_err(|e| {
        events::validation_rejected(id, e.field(), e.kind());
        ApiError::Validation(e)
    })?;

    let prediction = state.service.record(id, &vector).map_err(|e| {
        events::prediction_failed(id, e.error_code(), &e.diagnostic());
        ApiError::Prediction(e)
    })?;
    events::prediction_recorded(id, prediction.raw, prediction.value);

    Ok(Json(PredictionResponse {
        message: format!("Prediction for ID {id} saved successfully!"),
        prediction: prediction.value,
    }))
}
