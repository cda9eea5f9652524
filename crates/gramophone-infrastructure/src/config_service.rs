//! Configuration service implementation.
//!
//! Loads `GramophoneConfig` from `config.toml` and caches it.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use gramophone_core::config::GramophoneConfig;
use gramophone_core::error::{GramophoneError, Result};

use crate::paths::GramophonePaths;

/// Configuration service that loads and caches the root configuration.
///
/// A missing file yields the defaults. A file that fails to parse or validate also
/// yields the defaults through [`get_config`](Self::get_config), with a warning;
/// [`load`](Self::load) reports the error instead.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<GramophoneConfig>>>,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn from_paths(paths: &GramophonePaths) -> Result<Self> {
        Ok(Self::new(paths.config_file()?))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> GramophoneConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load().unwrap_or_else(|e| {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Falling back to default configuration"
            );
            GramophoneConfig::default()
        });

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.clone());
        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Reads and validates the configuration file without touching the cache.
    pub fn load(&self) -> Result<GramophoneConfig> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => GramophoneConfig::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(GramophoneConfig::default()),
            Err(e) => Err(GramophoneError::from(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(temp_dir.path().join("config.toml"));
        assert_eq!(service.get_config(), GramophoneConfig::default());
    }

    #[test]
    fn test_reads_overrides_and_caches() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[navigation]\nadvance_flash_ms = 250\n").unwrap();

        let service = ConfigService::new(path.clone());
        assert_eq!(service.get_config().navigation.advance_flash_ms, 250);

        std::fs::write(&path, "[navigation]\nadvance_flash_ms = 400\n").unwrap();
        assert_eq!(service.get_config().navigation.advance_flash_ms, 250);

        service.invalidate_cache();
        assert_eq!(service.get_config().navigation.advance_flash_ms, 400);
    }

    #[test]
    fn test_invalid_file_falls_back_but_load_reports() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[onboarding]\nauto_commit_threshold = 2.0\n").unwrap();

        let service = ConfigService::new(path);
        assert!(service.load().unwrap_err().is_config());
        assert_eq!(service.get_config(), GramophoneConfig::default());
    }
}
