//! InMemoryPredictionStore: concurrent per-id access via DashMap.

use std::sync::Arc;

use dashmap::DashMap;

use premia_core::{IPredictionStore, PredictionRecord};

/// Process-lifetime, last-write-wins prediction cache.
///
/// No eviction, expiry, or persistence. Clones share the same map.
#[derive(Clone)]
pub struct InMemoryPredictionStore {
    records: Arc<DashMap<String, PredictionRecord>>,
}

impl InMemoryPredictionStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(DashMap::new()),
        }
    }

    /// All stored ids. Test and debugging aid, not served over HTTP.
    pub fn ids(&self) -> Vec<String> {
        self.records.iter().map(|r| r.key().clone()).collect()
    }
}

impl Default for InMemoryPredictionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IPredictionStore for InMemoryPredictionStore {
    fn write(&self, id: &str, raw: f64) {
        self.records
            .insert(id.to_string(), PredictionRecord::new(raw));
    }

    fn read(&self, id: &str) -> Option<PredictionRecord> {
        self.records.get(id).map(|r| *r)
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }
}
