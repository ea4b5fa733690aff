//! Ordinary linear regression.

use serde::{Deserialize, Serialize};

use premia_core::errors::{ModelError, ModelLoadError};
use premia_core::{FeatureVector, IRegressor, FEATURE_COUNT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    pub(crate) fn validate(&self) -> Result<(), ModelLoadError> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(ModelLoadError::Malformed {
                reason: format!(
                    "linear model has {} coefficients, expected {FEATURE_COUNT}",
                    self.coefficients.len()
                ),
            });
        }
        if let Some(i) = self.coefficients.iter().position(|c| !c.is_finite()) {
            return Err(ModelLoadError::Malformed {
                reason: format!("coefficient {i} is not finite"),
            });
        }
        if !self.intercept.is_finite() {
            return Err(ModelLoadError::Malformed {
                reason: "intercept is not finite".to_string(),
            });
        }
        Ok(())
    }

    fn predict_row(&self, row: &FeatureVector) -> f64 {
        self.coefficients
            .iter()
            .zip(row.values())
            .fold(self.intercept, |acc, (c, x)| acc + c * x)
    }
}

impl IRegressor for LinearModel {
    fn kind(&self) -> &str {
        "linear"
    }

    fn predict_batch(&self, batch: &[FeatureVector]) -> Result<Vec<f64>, ModelError> {
        Ok(batch.iter().map(|row| self.predict_row(row)).collect())
    }
}
