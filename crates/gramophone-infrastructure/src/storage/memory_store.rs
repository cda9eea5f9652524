//! In-process key-value store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value as JsonValue;

use super::{KeyValueStore, StorageError};

/// A volatile store, shared between clones.
///
/// Used when no durable location is available and as a test double; cloning the
/// handle and opening a second repository on it models a later session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<HashMap<String, JsonValue>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> MutexGuard<'_, HashMap<String, JsonValue>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<JsonValue>, StorageError> {
        Ok(self.records().get(key).cloned())
    }

    fn set(&self, key: &str, value: JsonValue) -> Result<(), StorageError> {
        self.records().insert(key.to_string(), value);
        Ok(())
    }
}
