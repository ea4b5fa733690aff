//! Model artifact parsing, validation, and loading.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use premia_core::errors::ModelLoadError;
use premia_core::{IRegressor, FEATURE_FIELDS};

use crate::linear::LinearModel;
use crate::tree::TreeEnsemble;

/// A trained model as exported to JSON, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsemble),
}

impl ModelArtifact {
    pub fn feature_names(&self) -> &[String] {
        match self {
            Self::Linear(m) => &m.feature_names,
            Self::TreeEnsemble(m) => &m.feature_names,
        }
    }

    /// Check the artifact against the feature schema and its own structure.
    pub fn validate(&self) -> Result<(), ModelLoadError> {
        let names = self.feature_names();
        if names.len() != FEATURE_FIELDS.len()
            || names.iter().zip(FEATURE_FIELDS.iter()).any(|(a, b)| a != b)
        {
            return Err(ModelLoadError::SchemaMismatch {
                expected: FEATURE_FIELDS.iter().map(|s| s.to_string()).collect(),
                actual: names.to_vec(),
            });
        }

        match self {
            Self::Linear(m) => m.validate(),
            Self::TreeEnsemble(m) => m.validate(),
        }
    }

    pub fn into_regressor(self) -> Arc<dyn IRegressor> {
        match self {
            Self::Linear(m) => Arc::new(m),
            Self::TreeEnsemble(m) => Arc::new(m),
        }
    }
}

/// Parse and validate an artifact from JSON text. `source` names it in errors.
pub fn parse_model(json: &str, source: &str) -> Result<ModelArtifact, ModelLoadError> {
    let artifact: ModelArtifact =
        serde_json::from_str(json).map_err(|e| ModelLoadError::Parse {
            path: source.to_string(),
            message: e.to_string(),
        })?;
    artifact.validate()?;
    Ok(artifact)
}

/// Read, parse, and validate the model artifact at `path`.
pub fn load_model(path: &Path) -> Result<Arc<dyn IRegressor>, ModelLoadError> {
    let source = path.display().to_string();
    let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ModelLoadError::NotFound {
            path: source.clone(),
        },
        _ => ModelLoadError::Io {
            path: source.clone(),
            message: e.to_string(),
        },
    })?;

    let artifact = parse_model(&json, &source)?;
    tracing::debug!(path = %source, "model artifact validated");
    Ok(artifact.into_regressor())
}
