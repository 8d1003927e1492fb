//! In-memory store, used for tests and `--memory` sessions.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, instrument};

use super::{KeyValueStore, StoreError};

/// Store backed by a `HashMap`. Contents vanish with the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys written so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    #[instrument(skip(self, value))]
    fn save(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        debug!(key, "Saving value in memory");
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_returns_default() {
        let store = MemoryStore::new();
        assert_eq!(store.get("currentMove", 0usize).unwrap(), 0);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryStore::new();
        store.set("currentMove", &3usize).unwrap();
        assert_eq!(store.get("currentMove", 0usize).unwrap(), 3);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_undecodable_value_falls_back_to_default() {
        let mut store = MemoryStore::new();
        store.save("currentMove", Value::String("three".into())).unwrap();
        assert_eq!(store.get("currentMove", 0usize).unwrap(), 0);
    }
}
