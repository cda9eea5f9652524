//! Personalization store.
//!
//! Owns the in-memory personalization state for one visit and writes it through to a
//! [`PersonalizationRepository`] on every change.

use std::sync::Arc;

use gramophone_core::error::Result;
use gramophone_core::personalization::{PersonalizationRepository, PersonalizationState, Screen};
use gramophone_core::profile::{ProfileConfig, ProfileType};
use gramophone_core::theme::ProfileTheme;
use serde::Serialize;
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Point-in-time view of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    #[serde(flatten)]
    pub state: PersonalizationState,
    /// Transient; never persisted
    pub show_selector: bool,
}

impl StoreSnapshot {
    fn new(state: PersonalizationState) -> Self {
        Self {
            state,
            show_selector: true,
        }
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self::new(PersonalizationState::empty())
    }
}

/// Handle to the visitor's personalization state.
///
/// Cheap to clone; every clone shares the same state, so a handle can be passed to any
/// screen that needs to read the profile or call [`clear`](Self::clear).
///
/// The persisted record is read lazily on first access. Reads never fail: storage that
/// is missing, unreadable or corrupted yields the empty state. `commit` and `clear` wait
/// for that first read, so a slow load can never overwrite a newer commit.
#[derive(Clone)]
pub struct PersonalizationStore {
    repository: Arc<dyn PersonalizationRepository>,
    inner: Arc<Mutex<Option<StoreSnapshot>>>,
}

impl PersonalizationStore {
    pub fn new(repository: Arc<dyn PersonalizationRepository>) -> Self {
        Self {
            repository,
            inner: Arc::new(Mutex::new(None)),
        }
    }

    /// Loads the persisted state, or returns it if already loaded.
    pub async fn load(&self) -> PersonalizationState {
        self.hydrated().await.state
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        *self.hydrated().await
    }

    /// Selects `profile` and persists it.
    ///
    /// The in-memory state changes even when the write fails; the error is returned so
    /// the caller can report it.
    pub async fn commit(&self, profile: ProfileType) -> Result<()> {
        let mut current = self.hydrated().await;
        current.state.commit(profile);
        current.show_selector = false;
        info!(profile = %profile, "Profile committed");
        self.persist(current.state).await
    }

    /// Resets to the empty state and persists it.
    pub async fn clear(&self) -> Result<()> {
        let mut current = self.hydrated().await;
        current.state.clear();
        current.show_selector = true;
        info!("Profile cleared");
        self.persist(current.state).await
    }

    /// Resolved config; the explorer preset when nothing is selected.
    pub async fn config(&self) -> &'static ProfileConfig {
        self.load().await.config()
    }

    pub async fn theme(&self) -> Result<ProfileTheme> {
        ProfileTheme::for_config(self.config().await)
    }

    pub async fn screen(&self) -> Screen {
        self.load().await.screen()
    }

    pub async fn show_selector(&self) -> bool {
        self.hydrated().await.show_selector
    }

    /// Sets the selector flag, or flips it when `show` is `None`. Returns the new value.
    pub async fn toggle_selector(&self, show: Option<bool>) -> bool {
        let mut current = self.hydrated().await;
        current.show_selector = show.unwrap_or(!current.show_selector);
        current.show_selector
    }

    async fn hydrated(&self) -> MappedMutexGuard<'_, StoreSnapshot> {
        let mut guard = self.inner.lock().await;
        if guard.is_none() {
            *guard = Some(StoreSnapshot::new(self.fetch().await));
        }
        MutexGuard::map(guard, |slot| slot.get_or_insert_with(StoreSnapshot::default))
    }

    async fn fetch(&self) -> PersonalizationState {
        match self.repository.load().await {
            Ok(Some(state)) => {
                info!(profile = ?state.selected_profile(), "Loaded personalization");
                state
            }
            Ok(None) => {
                debug!("No stored personalization; first visit");
                PersonalizationState::empty()
            }
            Err(e) => {
                warn!(error = %e, "Personalization storage unavailable; starting fresh");
                PersonalizationState::empty()
            }
        }
    }

    async fn persist(&self, state: PersonalizationState) -> Result<()> {
        self.repository.save(state).await.map_err(|e| {
            warn!(error = %e, "Failed to persist personalization");
            e
        })
    }
}
