//! Key-value store backed by a single JSON document on disk.

use std::path::PathBuf;

use serde_json::{Map, Value as JsonValue};

use super::{AtomicFile, KeyValueStore, StorageError};

/// Stores records as top-level members of one JSON object:
///
/// ```json
/// { "portfolio-profile": { "version": "1.0.0", "selectedProfile": ... } }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    file: AtomicFile,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
        }
    }

    fn parse(content: &str) -> Result<Map<String, JsonValue>, StorageError> {
        match serde_json::from_str::<JsonValue>(content)? {
            JsonValue::Object(map) => Ok(map),
            other => Err(StorageError::Unavailable(format!(
                "expected a JSON object at the document root, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Applies `f` to the document under the file lock.
    ///
    /// A document that cannot be parsed is replaced rather than blocking every later write.
    fn modify<F>(&self, f: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Map<String, JsonValue>),
    {
        self.file.update(|current| {
            let mut map = match current.as_deref().map(Self::parse).transpose() {
                Ok(map) => map.unwrap_or_default(),
                Err(e) => {
                    tracing::warn!(
                        path = %self.file.path().display(),
                        error = %e,
                        "Replacing unreadable state document"
                    );
                    Map::new()
                }
            };
            f(&mut map);
            Ok(serde_json::to_string_pretty(&JsonValue::Object(map))?)
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<JsonValue>, StorageError> {
        let Some(content) = self.file.read()? else {
            return Ok(None);
        };
        let mut map = Self::parse(&content)?;
        Ok(map.remove(key))
    }

    fn set(&self, key: &str, value: JsonValue) -> Result<(), StorageError> {
        self.modify(|map| {
            map.insert(key.to_string(), value);
        })
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
