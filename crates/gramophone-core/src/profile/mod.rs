//! Visitor profiles: the closed set of intents and their static presentation presets.

pub mod model;
pub mod preset;

pub use model::{CallToAction, ProfileConfig, ProfileType};
pub use preset::{onboarding_profiles, profile_config, resolve_config};
