//! Post-onboarding section tracking for the transport bar.

pub mod section;

pub use section::{
    SectionAnchor, SectionId, SectionLayout, SectionTracker, TransportView, current_section,
};
