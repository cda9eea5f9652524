//! Personalization domain model.
//!
//! Contains the visitor's declared profile, the only state that persists across visits.

use serde::{Deserialize, Serialize};

use crate::profile::{ProfileConfig, ProfileType, resolve_config};

/// The persisted personalization choice.
///
/// `has_selected_profile` is derived from `selected_profile`, so the two can never
/// disagree. The state changes only through [`commit`](Self::commit) and
/// [`clear`](Self::clear), each of which replaces it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "StateFields", from = "StateFields")]
pub struct PersonalizationState {
    selected_profile: Option<ProfileType>,
}

/// Serialized form: both fields are written so readers need not derive the flag.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateFields {
    #[serde(default)]
    selected_profile: Option<ProfileType>,
    #[serde(default)]
    has_selected_profile: bool,
}

impl From<PersonalizationState> for StateFields {
    fn from(state: PersonalizationState) -> Self {
        Self {
            selected_profile: state.selected_profile,
            has_selected_profile: state.has_selected_profile(),
        }
    }
}

impl From<StateFields> for PersonalizationState {
    /// Fields that disagree read as the empty state.
    fn from(fields: StateFields) -> Self {
        match (fields.selected_profile, fields.has_selected_profile) {
            (Some(profile), true) => Self::with_profile(profile),
            _ => Self::empty(),
        }
    }
}

impl PersonalizationState {
    /// The state of a first-time visitor.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: ProfileType) -> Self {
        Self {
            selected_profile: Some(profile),
        }
    }

    pub fn commit(&mut self, profile: ProfileType) {
        *self = Self::with_profile(profile);
    }

    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    pub fn selected_profile(&self) -> Option<ProfileType> {
        self.selected_profile
    }

    pub fn has_selected_profile(&self) -> bool {
        self.selected_profile.is_some()
    }

    /// Config for the selected profile, or the explorer preset when none is selected.
    pub fn config(&self) -> &'static ProfileConfig {
        resolve_config(self.selected_profile)
    }

    pub fn screen(&self) -> Screen {
        if self.has_selected_profile() {
            Screen::Portfolio
        } else {
            Screen::Onboarding
        }
    }
}

/// Which top-level view the page renders for a personalization state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Profile selector (the turntable)
    Onboarding,
    /// Themed portfolio with the transport bar
    Portfolio,
}
