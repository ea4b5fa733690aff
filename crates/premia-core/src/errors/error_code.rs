//! PremiaErrorCode trait for logs and HTTP error bodies.

/// Every error enum implements this to provide a stable code string.
pub trait PremiaErrorCode {
    /// Returns the error code string (e.g., "MODEL_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the diagnostic string: `[ERROR_CODE] message`.
    fn diagnostic(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NO_DATA: &str = "NO_DATA";
pub const INVALID_FIELD: &str = "INVALID_FIELD";
pub const INVALID_ID: &str = "INVALID_ID";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const MODEL_PANIC: &str = "MODEL_PANIC";
pub const SHAPE_MISMATCH: &str = "SHAPE_MISMATCH";
pub const NON_FINITE_OUTPUT: &str = "NON_FINITE_OUTPUT";
pub const MODEL_NOT_FOUND: &str = "MODEL_NOT_FOUND";
pub const MODEL_LOAD_ERROR: &str = "MODEL_LOAD_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const BIND_ERROR: &str = "BIND_ERROR";
