//! Path resolution for gramophone configuration and state files.
//!
//! ```text
//! ~/.config/gramophone/        # Config directory (platform config dir)
//! ├── config.toml              # Tuning and logging configuration
//! └── state.json               # Persisted key-value records
//! ```
//!
//! A base directory override replaces `~/.config/gramophone` entirely, which is what
//! tests and the CLI's `--state-dir` use.

use std::path::PathBuf;

const APP_DIR: &str = "gramophone";
const CONFIG_FILE: &str = "config.toml";
const STATE_FILE: &str = "state.json";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for gramophone_core::GramophoneError {
    fn from(err: PathError) -> Self {
        gramophone_core::GramophoneError::config(err.to_string())
    }
}

/// Resolves where gramophone keeps its files.
#[derive(Debug, Clone, Default)]
pub struct GramophonePaths {
    base_dir: Option<PathBuf>,
}

impl GramophonePaths {
    /// Creates a resolver; `None` uses the platform config directory.
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(CONFIG_FILE))
    }

    pub fn state_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(STATE_FILE))
    }
}
