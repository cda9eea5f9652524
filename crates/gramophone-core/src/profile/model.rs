//! Profile domain model.
//!
//! A profile is the intent a visitor declares during onboarding. It selects the
//! themed copy, call-to-action pair and accent color used for the rest of the visit.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{GramophoneError, Result};

/// The visitor intent categories.
///
/// The variant order is the onboarding order: index 0 is the first record on the
/// turntable. Names serialize and parse in lowercase (`"recruiter"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProfileType {
    Recruiter,
    Business,
    Collaborator,
    Explorer,
}

impl ProfileType {
    /// Every profile, in onboarding order.
    pub const ALL: [ProfileType; 4] = [
        ProfileType::Recruiter,
        ProfileType::Business,
        ProfileType::Collaborator,
        ProfileType::Explorer,
    ];

    /// The profile whose config is used while nothing is selected.
    pub const DEFAULT: ProfileType = ProfileType::Explorer;

    /// Parses a stored or user-supplied profile name.
    ///
    /// Unlike the derived `FromStr`, this reports failures as a domain error.
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name.trim()).map_err(|_| GramophoneError::UnknownProfile(name.to_string()))
    }
}

/// A labelled link shown as a button on the hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub text: &'static str,
    pub href: &'static str,
}

/// Static presentation preset for one profile.
///
/// Presets are compiled in; there is exactly one per [`ProfileType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileConfig {
    #[serde(rename = "type")]
    pub profile: ProfileType,
    /// Accent color as `#RRGGBB`
    pub color: &'static str,
    /// Onboarding record label
    pub title: &'static str,
    /// Onboarding record sub-label
    pub subtitle: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    #[serde(rename = "primaryCTA")]
    pub primary_cta: CallToAction,
    #[serde(rename = "secondaryCTA")]
    pub secondary_cta: CallToAction,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_and_parse_are_lowercase() {
        assert_eq!(ProfileType::Collaborator.to_string(), "collaborator");
        assert_eq!(ProfileType::parse("business").unwrap(), ProfileType::Business);
        assert_eq!(ProfileType::parse(" explorer ").unwrap(), ProfileType::Explorer);
    }

    #[test]
    fn test_parse_unknown_profile() {
        let err = ProfileType::parse("investor").unwrap_err();
        assert!(err.is_unknown_profile());
        assert!(ProfileType::parse("Recruiter").is_err());
    }

    #[test]
    fn test_all_follows_declaration_order() {
        let declared: Vec<ProfileType> = ProfileType::iter().collect();
        assert_eq!(declared, ProfileType::ALL.to_vec());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ProfileType::Recruiter).unwrap();
        assert_eq!(json, "\"recruiter\"");
        let parsed: ProfileType = serde_json::from_str("\"explorer\"").unwrap();
        assert_eq!(parsed, ProfileType::Explorer);
    }
}
