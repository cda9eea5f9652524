//! Error types for the Gramophone personalization engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for every Gramophone crate.
///
/// Variants are structured so callers can branch on the failure kind; storage
/// layers convert their local errors into one of these at the repository boundary.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum GramophoneError {
    /// A profile name that is not one of the known visitor intents
    #[error("Unknown profile: '{0}'")]
    UnknownProfile(String),

    /// A color string that is not `#RRGGBB`
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persisted record could not be migrated to the current schema
    #[error("Migration error: {0}")]
    Migration(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GramophoneError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidColor error
    pub fn invalid_color(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_unknown_profile(&self) -> bool {
        matches!(self, Self::UnknownProfile(_))
    }

    pub fn is_migration(&self) -> bool {
        matches!(self, Self::Migration(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for GramophoneError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for GramophoneError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for GramophoneError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for GramophoneError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<version_migrate::MigrationError> for GramophoneError {
    fn from(err: version_migrate::MigrationError) -> Self {
        use version_migrate::MigrationError;

        match err {
            MigrationError::DeserializationError(_) | MigrationError::SerializationError(_) => {
                Self::Serialization {
                    format: "migration".to_string(),
                    message: err.to_string(),
                }
            }
            _ => Self::Migration(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for GramophoneError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, GramophoneError>`.
pub type Result<T> = std::result::Result<T, GramophoneError>;
