use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the trained model artifact lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the JSON model artifact, relative to the working directory.
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(defaults::DEFAULT_MODEL_PATH),
        }
    }
}
