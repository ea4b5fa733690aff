//! Per-request errors and their HTTP rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use premia_core::errors::error_code::{self, PremiaErrorCode};
use premia_core::errors::{ModelError, ValidationError};

use crate::payload::NoDataReason;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No data provided")]
    NoData { reason: NoDataReason },

    #[error("Invalid ID")]
    InvalidId { reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error occurred during prediction")]
    Prediction(#[source] ModelError),

    #[error("No prediction found for ID {id}")]
    NotFound { id: String },

    #[error("Error occurred while retrieving prediction")]
    Retrieval(#[source] ModelError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoData { .. } | Self::InvalidId { .. } | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Prediction(_) | Self::Retrieval(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body: always a `message`, plus an `error` diagnostic for 500s.
    pub fn body(&self) -> Value {
        match self {
            Self::Prediction(e) | Self::Retrieval(e) => json!({
                "message": self.to_string(),
                "error": e.diagnostic(),
            }),
            _ => json!({ "message": self.to_string() }),
        }
    }
}

impl PremiaErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoData { .. } => error_code::NO_DATA,
            Self::InvalidId { .. } => error_code::INVALID_ID,
            Self::Validation(e) => e.error_code(),
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::Prediction(e) | Self::Retrieval(e) => e.error_code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
