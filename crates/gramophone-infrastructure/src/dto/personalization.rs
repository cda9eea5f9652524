//! Personalization record DTOs and migrations.
//!
//! The stored record keeps both fields even though the domain derives one from the
//! other, so a hand-edited or foreign record can disagree with itself. Conversion to
//! the domain model resolves every such case to the empty state.

use gramophone_core::personalization::PersonalizationState;
use gramophone_core::profile::ProfileType;
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, MigrationError, Migrator, Versioned};

/// Entity name the personalization migration path is registered under.
pub const PERSONALIZATION_ENTITY: &str = "personalization";

/// Personalization record V1.0.0 (initial version).
///
/// Stored flat: `{"version": "1.0.0", "selectedProfile": ..., "hasSelectedProfile": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct PersonalizationRecordV1 {
    /// Lowercase profile name; kept as a string so unknown names degrade instead of
    /// failing the whole record.
    #[serde(default)]
    pub selected_profile: Option<String>,
    #[serde(default)]
    pub has_selected_profile: bool,
}

/// Type alias for the latest personalization record version.
pub type PersonalizationRecordDTO = PersonalizationRecordV1;

// ============================================================================
// Domain model conversions
// ============================================================================

impl IntoDomain<PersonalizationState> for PersonalizationRecordV1 {
    fn into_domain(self) -> PersonalizationState {
        match (self.selected_profile.as_deref(), self.has_selected_profile) {
            (None, false) => PersonalizationState::empty(),
            (Some(name), true) => match ProfileType::parse(name) {
                Ok(profile) => PersonalizationState::with_profile(profile),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored profile is not recognised; starting fresh");
                    PersonalizationState::empty()
                }
            },
            (profile, has_selected) => {
                tracing::warn!(
                    ?profile,
                    has_selected,
                    "Stored personalization record is inconsistent; starting fresh"
                );
                PersonalizationState::empty()
            }
        }
    }
}

impl FromDomain<PersonalizationState> for PersonalizationRecordV1 {
    fn from_domain(state: PersonalizationState) -> Self {
        Self {
            selected_profile: state.selected_profile().map(|p| p.to_string()),
            has_selected_profile: state.has_selected_profile(),
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates the migrator for personalization records.
///
/// # Migration Path
///
/// - V1.0.0 → PersonalizationState: Converts DTO to domain model
pub fn create_personalization_migrator() -> Result<Migrator, MigrationError> {
    let mut migrator = Migrator::builder().build();

    let path = Migrator::define(PERSONALIZATION_ENTITY)
        .from::<PersonalizationRecordV1>()
        .into_with_save::<PersonalizationState>();
    migrator.register(path)?;

    Ok(migrator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn load(value: serde_json::Value) -> Result<PersonalizationState, MigrationError> {
        create_personalization_migrator()
            .unwrap()
            .load_flat_from(PERSONALIZATION_ENTITY, value)
    }

    #[test]
    fn test_migrator_creation() {
        assert!(create_personalization_migrator().is_ok());
    }

    #[test]
    fn test_v1_loads_into_domain() {
        let state = load(json!({
            "version": "1.0.0",
            "selectedProfile": "recruiter",
            "hasSelectedProfile": true
        }))
        .unwrap();
        assert_eq!(state, PersonalizationState::with_profile(ProfileType::Recruiter));
    }

    #[test]
    fn test_unknown_profile_degrades_to_empty() {
        let state = load(json!({
            "version": "1.0.0",
            "selectedProfile": "investor",
            "hasSelectedProfile": true
        }))
        .unwrap();
        assert_eq!(state, PersonalizationState::empty());
    }

    #[test]
    fn test_inconsistent_record_degrades_to_empty() {
        let dto = PersonalizationRecordV1 {
            selected_profile: None,
            has_selected_profile: true,
        };
        assert_eq!(dto.into_domain(), PersonalizationState::empty());

        let dto = PersonalizationRecordV1 {
            selected_profile: Some("business".to_string()),
            has_selected_profile: false,
        };
        assert_eq!(dto.into_domain(), PersonalizationState::empty());
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        assert!(load(json!({
            "version": "9.0.0",
            "selectedProfile": "business",
            "hasSelectedProfile": true
        }))
        .is_err());
    }

    #[test]
    fn test_save_writes_flat_versioned_record() {
        let migrator = create_personalization_migrator().unwrap();
        let json_str = migrator
            .save_domain_flat(
                PERSONALIZATION_ENTITY,
                PersonalizationState::with_profile(ProfileType::Explorer),
            )
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json_str).unwrap();
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["selectedProfile"], "explorer");
        assert_eq!(value["hasSelectedProfile"], true);
    }

    #[test]
    fn test_empty_state_saves_null_profile() {
        let migrator = create_personalization_migrator().unwrap();
        let json_str = migrator
            .save_domain_flat(PERSONALIZATION_ENTITY, PersonalizationState::empty())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json_str).unwrap();
        assert_eq!(value["selectedProfile"], serde_json::Value::Null);
        assert_eq!(value["hasSelectedProfile"], false);
        assert_eq!(load(value).unwrap(), PersonalizationState::empty());
    }
}
