//! Feature validation errors.

use super::error_code::{self, PremiaErrorCode};

/// A raw payload failed validation against the feature schema.
///
/// The variants stay distinct for logs and tests, but all of them render the
/// same client-facing message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid or missing value for '{field}'")]
    Missing { field: &'static str },

    #[error("Invalid or missing value for '{field}'")]
    InvalidType {
        field: &'static str,
        found: &'static str,
    },

    #[error("Invalid or missing value for '{field}'")]
    OutOfDomain { field: &'static str, value: f64 },
}

impl ValidationError {
    /// The schema field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::InvalidType { field, .. }
            | Self::OutOfDomain { field, .. } => field,
        }
    }

    /// Short internal label for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "missing",
            Self::InvalidType { .. } => "invalid_type",
            Self::OutOfDomain { .. } => "out_of_domain",
        }
    }
}

impl PremiaErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_FIELD
    }
}
