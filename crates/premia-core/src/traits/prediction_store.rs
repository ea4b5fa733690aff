use crate::models::PredictionRecord;

/// Keyed store of the latest raw prediction per identifier.
///
/// Each call is atomic with respect to the whole store. Concurrent writes to
/// the same id are ordered by completion only.
pub trait IPredictionStore: Send + Sync {
    /// Unconditionally overwrite the entry for `id`.
    fn write(&self, id: &str, raw: f64);

    /// Latest entry for `id`, if one was ever written.
    fn read(&self, id: &str) -> Option<PredictionRecord>;

    /// Number of stored ids.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: &str) -> bool {
        self.read(id).is_some()
    }
}
