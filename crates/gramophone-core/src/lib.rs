//! Core domain of the Gramophone personalization engine.
//!
//! Everything in this crate is free of I/O: scroll samples, button presses and
//! layout queries go in, render-ready state and side-effect requests come out.

pub mod color;
pub mod config;
pub mod error;
pub mod navigation;
pub mod onboarding;
pub mod personalization;
pub mod profile;
pub mod scroll;
pub mod theme;

// Re-export common error type
pub use error::{GramophoneError, Result};
