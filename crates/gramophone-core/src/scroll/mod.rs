//! Scroll position sampling.

pub mod sampler;

pub use sampler::{ScrollRegion, ScrollSample, progress};
