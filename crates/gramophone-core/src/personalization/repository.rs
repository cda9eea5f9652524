//! Personalization repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::personalization::model::PersonalizationState;

/// Persistence boundary for the personalization record.
///
/// Implementations store exactly one record under a fixed namespaced key and replace
/// it atomically on every save.
#[async_trait]
pub trait PersonalizationRepository: Send + Sync {
    /// Reads the stored record.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet. A record whose profile is
    /// not a known [`ProfileType`](crate::profile::ProfileType) loads as the empty state.
    async fn load(&self) -> Result<Option<PersonalizationState>>;

    /// Replaces the stored record.
    async fn save(&self, state: PersonalizationState) -> Result<()>;
}
