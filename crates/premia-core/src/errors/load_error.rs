//! Model artifact loading errors. All of them are fatal at startup.

use super::error_code::{self, PremiaErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("model artifact not found: {path}")]
    NotFound { path: String },

    #[error("failed to read model artifact {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse model artifact {path}: {message}")]
    Parse { path: String, message: String },

    #[error("model feature schema mismatch: expected {expected:?}, got {actual:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("malformed model: {reason}")]
    Malformed { reason: String },
}

impl ModelLoadError {
    /// True when the artifact file itself was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl PremiaErrorCode for ModelLoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::MODEL_NOT_FOUND,
            _ => error_code::MODEL_LOAD_ERROR,
        }
    }
}
