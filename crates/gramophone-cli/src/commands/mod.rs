pub mod onboard;
pub mod profile;
pub mod sections;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use gramophone_application::PersonalizationStore;
use gramophone_core::config::GramophoneConfig;
use gramophone_infrastructure::{ConfigService, FilePersonalizationRepository, GramophonePaths};

/// Resolved paths and configuration shared by every command.
pub struct CliContext {
    pub paths: GramophonePaths,
    pub config: GramophoneConfig,
}

impl CliContext {
    pub fn load(state_dir: Option<PathBuf>) -> Result<Self> {
        let paths = GramophonePaths::new(state_dir);
        let config = ConfigService::from_paths(&paths)
            .context("Failed to resolve config file")?
            .get_config();
        Ok(Self { paths, config })
    }

    pub fn store(&self) -> Result<PersonalizationStore> {
        let repo = FilePersonalizationRepository::open(&self.paths, self.config.storage.key.clone())
            .context("Failed to open personalization storage")?;
        Ok(PersonalizationStore::new(Arc::new(repo)))
    }
}
