/// Premia version string.
pub const PREMIA_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the schema field that is log1p-transformed before reaching the model.
pub const LOG_TRANSFORMED_FIELD: &str = "children";

/// Position of [`LOG_TRANSFORMED_FIELD`] within the feature schema.
pub const LOG_TRANSFORMED_INDEX: usize = 2;

/// Number of rows sent to the model per request.
pub const SINGLE_ROW_BATCH: usize = 1;

/// Default project config filename, looked up in the working directory.
pub const DEFAULT_CONFIG_FILENAME: &str = "premia.toml";

/// Environment variable pointing at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "PREMIA_CONFIG";

/// Environment variable holding a tracing filter directive.
pub const LOG_FILTER_ENV: &str = "PREMIA_LOG";
