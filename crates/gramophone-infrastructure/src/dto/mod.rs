//! Versioned DTOs for persisted records.

pub mod personalization;

// Re-export personalization DTOs and migrator
pub use personalization::{
    PERSONALIZATION_ENTITY, PersonalizationRecordDTO, PersonalizationRecordV1,
    create_personalization_migrator,
};
