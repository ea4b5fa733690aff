//! Model invocation errors.

use super::error_code::{self, PremiaErrorCode};

/// Anything that went wrong while asking the model for a prediction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("model inference failed: {reason}")]
    Inference { reason: String },

    #[error("model panicked during inference: {message}")]
    Panicked { message: String },

    #[error("model returned {actual} predictions for a batch of {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("model output {value} is not a finite number")]
    NonFiniteOutput { value: f64 },
}

impl ModelError {
    pub fn inference(reason: impl Into<String>) -> Self {
        Self::Inference {
            reason: reason.into(),
        }
    }
}

impl PremiaErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Inference { .. } => error_code::MODEL_ERROR,
            Self::Panicked { .. } => error_code::MODEL_PANIC,
            Self::ShapeMismatch { .. } => error_code::SHAPE_MISMATCH,
            Self::NonFiniteOutput { .. } => error_code::NON_FINITE_OUTPUT,
        }
    }
}
