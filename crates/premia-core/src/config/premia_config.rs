//! Top-level Premia configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{defaults, ModelConfig, ObservabilityConfig, ServerConfig};
use crate::constants::{CONFIG_PATH_ENV, DEFAULT_CONFIG_FILENAME};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PREMIA_*`)
/// 2. Config file (`$PREMIA_CONFIG`, else `premia.toml` in `root`)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PremiaConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub observability: ObservabilityConfig,
}

impl PremiaConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = match Self::config_file(root)? {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;

        Ok(config)
    }

    /// Pick the config file to read, if any.
    ///
    /// An explicit `PREMIA_CONFIG` must exist; the implicit `premia.toml` is
    /// optional.
    fn config_file(root: &Path) -> Result<Option<PathBuf>, ConfigError> {
        if let Some(explicit) = std::env::var_os(CONFIG_PATH_ENV) {
            let path = PathBuf::from(explicit);
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            return Ok(Some(path));
        }

        let project = root.join(DEFAULT_CONFIG_FILENAME);
        Ok(project.exists().then_some(project))
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PremiaConfig) -> Result<(), ConfigError> {
        if config.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "server.host".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.server.port == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "server.port".to_string(),
                message: "must be between 1 and 65535".to_string(),
            });
        }
        if config.model.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "model.path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        let level = config.observability.log_level.to_ascii_lowercase();
        if !defaults::VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {:?}", defaults::VALID_LOG_LEVELS),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `PREMIA_HOST`, `PREMIA_PORT`, `PREMIA_MODEL_PATH`, etc.
    fn apply_env_overrides(config: &mut PremiaConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("PREMIA_HOST") {
            config.server.host = val;
        }
        if let Ok(val) = std::env::var("PREMIA_PORT") {
            config.server.port = parse_env("PREMIA_PORT", &val)?;
        }
        if let Ok(val) = std::env::var("PREMIA_CORS") {
            config.server.cors = parse_env("PREMIA_CORS", &val)?;
        }
        if let Ok(val) = std::env::var("PREMIA_MODEL_PATH") {
            config.model.path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("PREMIA_LOG_LEVEL") {
            config.observability.log_level = val;
        }
        if let Ok(val) = std::env::var("PREMIA_LOG_JSON") {
            config.observability.json = parse_env("PREMIA_LOG_JSON", &val)?;
        }
        Ok(())
    }
}

fn parse_env<T>(key: &str, val: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    val.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        field: key.to_string(),
        message: format!("{val:?}: {e}"),
    })
}
