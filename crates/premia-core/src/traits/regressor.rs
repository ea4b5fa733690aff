use crate::errors::ModelError;
use crate::schema::FeatureVector;

/// A trained regression model, opaque to the rest of the service.
///
/// Implementations must return exactly one prediction per input row, in the
/// same order.
pub trait IRegressor: Send + Sync {
    /// Short label for logs ("linear", "tree_ensemble", ...).
    fn kind(&self) -> &str;

    /// Predict a batch of encoded rows.
    fn predict_batch(&self, batch: &[FeatureVector]) -> Result<Vec<f64>, ModelError>;
}
