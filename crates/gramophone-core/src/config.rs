//! Tunable configuration.
//!
//! Every field has a default, so an empty or partial `config.toml` is valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GramophoneError, Result};
use crate::onboarding::SelectionTuning;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GramophoneConfig {
    pub onboarding: OnboardingConfig,
    pub navigation: NavigationConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl GramophoneConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.onboarding.tuning().validate()?;
        if self.onboarding.track_viewports.is_nan() || self.onboarding.track_viewports < 1.0 {
            return Err(GramophoneError::config(format!(
                "track_viewports must be at least 1, got {}",
                self.onboarding.track_viewports
            )));
        }
        if self.storage.key.trim().is_empty() {
            return Err(GramophoneError::config(
                "storage key must not be empty",
            ));
        }
        Ok(())
    }
}

/// `[onboarding]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingConfig {
    pub auto_commit_threshold: f64,
    pub settle_segments: f64,
    pub auto_commit_delay_ms: u64,
    /// Height of the onboarding track in viewport heights
    pub track_viewports: f64,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        let tuning = SelectionTuning::default();
        Self {
            auto_commit_threshold: tuning.auto_commit_threshold,
            settle_segments: tuning.settle_segments,
            auto_commit_delay_ms: tuning.auto_commit_delay.as_millis() as u64,
            track_viewports: 5.0,
        }
    }
}

impl OnboardingConfig {
    pub fn tuning(&self) -> SelectionTuning {
        SelectionTuning {
            auto_commit_threshold: self.auto_commit_threshold,
            settle_segments: self.settle_segments,
            auto_commit_delay: Duration::from_millis(self.auto_commit_delay_ms),
        }
    }
}

/// `[navigation]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// How long the play button's "advancing" flag stays set
    pub advance_flash_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            advance_flash_ms: 1000,
        }
    }
}

impl NavigationConfig {
    pub fn advance_flash(&self) -> Duration {
        Duration::from_millis(self.advance_flash_ms)
    }
}

/// `[storage]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Namespaced key the personalization record is stored under
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: "portfolio-profile".to_string(),
        }
    }
}

/// `[logging]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` env-filter directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = GramophoneConfig::from_toml_str("").unwrap();
        assert_eq!(config, GramophoneConfig::default());
        assert_eq!(config.onboarding.tuning(), SelectionTuning::default());
        assert_eq!(config.navigation.advance_flash(), Duration::from_secs(1));
        assert_eq!(config.storage.key, "portfolio-profile");
    }

    #[test]
    fn test_partial_override() {
        let config = GramophoneConfig::from_toml_str(
            r#"
            [onboarding]
            auto_commit_threshold = 0.8
            auto_commit_delay_ms = 500

            [logging]
            filter = "gramophone_core=debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.onboarding.auto_commit_threshold, 0.8);
        assert_eq!(config.onboarding.settle_segments, 0.5);
        assert_eq!(
            config.onboarding.tuning().auto_commit_delay,
            Duration::from_millis(500)
        );
        assert_eq!(config.logging.filter, "gramophone_core=debug");
    }

    #[test]
    fn test_invalid_threshold_is_config_error() {
        let err = GramophoneConfig::from_toml_str("[onboarding]\nauto_commit_threshold = 0.0")
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_empty_storage_key_is_rejected() {
        assert!(GramophoneConfig::from_toml_str("[storage]\nkey = \"  \"").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GramophoneConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(GramophoneConfig::from_toml_str(&text).unwrap(), config);
    }
}
