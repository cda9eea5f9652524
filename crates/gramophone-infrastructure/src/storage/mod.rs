//! Storage layer: atomic file writes and key-value stores.

mod atomic_file;
mod json_store;
mod memory_store;

pub use atomic_file::AtomicFile;
pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;

use serde_json::Value as JsonValue;

/// Errors that can occur in the storage layer.
#[derive(Debug)]
pub enum StorageError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON parse or serialization error.
    JsonError(serde_json::Error),
    /// File locking error.
    LockError(String),
    /// Backing store is not usable (poisoned lock, missing directory, ...).
    Unavailable(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "I/O error: {}", e),
            StorageError::JsonError(e) => write!(f, "JSON error: {}", e),
            StorageError::LockError(e) => write!(f, "Lock error: {}", e),
            StorageError::Unavailable(e) => write!(f, "Storage unavailable: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::IoError(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::JsonError(e)
    }
}

impl From<StorageError> for gramophone_core::GramophoneError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::IoError(e) => e.into(),
            StorageError::JsonError(e) => e.into(),
            StorageError::LockError(e) | StorageError::Unavailable(e) => {
                gramophone_core::GramophoneError::data_access(e)
            }
        }
    }
}

/// A string-keyed store of JSON records.
///
/// Each `set` replaces the record under its key as a whole; readers never observe a
/// partially written record.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<JsonValue>, StorageError>;

    fn set(&self, key: &str, value: JsonValue) -> Result<(), StorageError>;
}
