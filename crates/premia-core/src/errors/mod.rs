//! Error handling for Premia.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod load_error;
pub mod model_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::PremiaErrorCode;
pub use load_error::ModelLoadError;
pub use model_error::ModelError;
pub use validation_error::ValidationError;
