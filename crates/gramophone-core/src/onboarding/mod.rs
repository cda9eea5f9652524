//! Onboarding: choosing a profile by scrolling a turntable of records.

pub mod selection;
pub mod view;

pub use selection::{
    SelectionEffect, SelectionInput, SelectionMapper, SelectionPhase, SelectionTuning,
};
pub use view::{OnboardingView, TrackIndicator};
