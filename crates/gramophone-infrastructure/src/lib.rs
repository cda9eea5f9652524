//! Persistence and configuration for the Gramophone personalization engine.

pub mod config_service;
pub mod dto;
pub mod paths;
pub mod personalization_repository;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::GramophonePaths;
pub use crate::personalization_repository::{
    FilePersonalizationRepository, KeyValuePersonalizationRepository,
};
pub use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};
