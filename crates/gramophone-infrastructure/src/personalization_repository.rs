//! Key-value backed PersonalizationRepository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use gramophone_core::error::{GramophoneError, Result};
use gramophone_core::personalization::{PersonalizationRepository, PersonalizationState};

use crate::dto::{PERSONALIZATION_ENTITY, create_personalization_migrator};
use crate::paths::GramophonePaths;
use crate::storage::{JsonFileStore, KeyValueStore};

/// Stores the personalization record under one namespaced key of a [`KeyValueStore`].
///
/// Responsibilities:
/// - Version the record and migrate it through `version-migrate`
/// - Convert between the persisted record and the domain model
/// - Run blocking store I/O off the async executor
///
/// Does NOT:
/// - Cache state (the application store owns the in-memory copy)
/// - Know the storage format (delegated to the store)
pub struct KeyValuePersonalizationRepository<S> {
    store: Arc<S>,
    key: String,
}

/// The default repository: `state.json` in the gramophone config directory.
pub type FilePersonalizationRepository = KeyValuePersonalizationRepository<JsonFileStore>;

impl<S> KeyValuePersonalizationRepository<S>
where
    S: KeyValueStore + 'static,
{
    pub fn new(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Migrates a stored value to the domain model.
    ///
    /// A record the migrator cannot read (wrong shape, unknown version) loads as the
    /// empty state.
    fn decode(&self, value: serde_json::Value) -> PersonalizationState {
        match Self::migrate(value) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "Unreadable personalization record; starting fresh"
                );
                PersonalizationState::empty()
            }
        }
    }

    fn migrate(value: serde_json::Value) -> Result<PersonalizationState> {
        let migrator = create_personalization_migrator()?;
        let state: PersonalizationState = migrator.load_flat_from(PERSONALIZATION_ENTITY, value)?;
        Ok(state)
    }

    fn encode(state: PersonalizationState) -> Result<serde_json::Value> {
        let migrator = create_personalization_migrator()?;
        let json_str = migrator.save_domain_flat(PERSONALIZATION_ENTITY, state)?;
        Ok(serde_json::from_str(&json_str)?)
    }
}

impl FilePersonalizationRepository {
    /// Opens the repository at the resolved state file.
    pub fn open(paths: &GramophonePaths, key: impl Into<String>) -> Result<Self> {
        let state_file = paths.state_file()?;
        Ok(Self::new(Arc::new(JsonFileStore::new(state_file)), key))
    }
}

#[async_trait]
impl<S> PersonalizationRepository for KeyValuePersonalizationRepository<S>
where
    S: KeyValueStore + 'static,
{
    async fn load(&self) -> Result<Option<PersonalizationState>> {
        let store = Arc::clone(&self.store);
        let key = self.key.clone();
        let value = tokio::task::spawn_blocking(move || store.get(&key))
            .await
            .map_err(|e| GramophoneError::internal(format!("Failed to join task: {}", e)))??;

        Ok(value.map(|value| self.decode(value)))
    }

    async fn save(&self, state: PersonalizationState) -> Result<()> {
        let value = Self::encode(state)?;

        let store = Arc::clone(&self.store);
        let key = self.key.clone();
        tokio::task::spawn_blocking(move || store.set(&key, value))
            .await
            .map_err(|e| GramophoneError::internal(format!("Failed to join task: {}", e)))??;

        tracing::debug!(key = %self.key, ?state, "Saved personalization record");
        Ok(())
    }
}
