//! Visitor personalization state and its persistence contract.

pub mod model;
pub mod repository;

pub use model::{PersonalizationState, Screen};
pub use repository::PersonalizationRepository;
