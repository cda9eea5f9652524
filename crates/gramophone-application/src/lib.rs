//! Application services for the Gramophone personalization engine.
//!
//! Wires the pure core state machines to persistence and timers.

pub mod onboarding;
pub mod personalization_store;
pub mod portfolio;

pub use onboarding::OnboardingSession;
pub use personalization_store::{PersonalizationStore, StoreSnapshot};
pub use portfolio::{NowPlaying, PortfolioNavigator, Viewport};
