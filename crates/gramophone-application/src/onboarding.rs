//! Onboarding session: the selection mapper wired to the store and a timer.

use std::sync::{Arc, Mutex, MutexGuard};

use gramophone_core::error::Result;
use gramophone_core::onboarding::{
    OnboardingView, SelectionEffect, SelectionMapper, SelectionPhase, SelectionTuning,
};
use gramophone_core::profile::ProfileType;
use gramophone_core::scroll::ScrollSample;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::personalization_store::PersonalizationStore;

/// One mounted onboarding view.
///
/// Input handlers are synchronous and never wait on storage. A scheduled auto-commit
/// runs as a task bound to this session: [`teardown`](Self::teardown), or dropping the
/// session, cancels it before it can reach the store.
///
/// The timer runs on the runtime the session was created in, so handlers may be
/// called from any thread. A session created outside a runtime falls back to the
/// caller's runtime; with none at all the auto-commit is skipped and only
/// [`confirm`](Self::confirm) can commit.
pub struct OnboardingSession {
    mapper: Arc<Mutex<SelectionMapper>>,
    store: PersonalizationStore,
    cancel: CancellationToken,
    pending: Mutex<Option<JoinHandle<Option<ProfileType>>>>,
    runtime: Option<Handle>,
}

impl OnboardingSession {
    pub fn new(store: PersonalizationStore, tuning: SelectionTuning) -> Result<Self> {
        Ok(Self {
            mapper: Arc::new(Mutex::new(SelectionMapper::onboarding(tuning)?)),
            store,
            cancel: CancellationToken::new(),
            pending: Mutex::new(None),
            runtime: Handle::try_current().ok(),
        })
    }

    /// Scroll or resize over the track. Returns the active index.
    pub fn on_scroll(&self, sample: ScrollSample) -> usize {
        let (effect, active) = {
            let mut mapper = self.mapper();
            (mapper.on_scroll(sample), mapper.active_index())
        };
        self.handle(effect);
        active
    }

    pub fn previous(&self) -> usize {
        let mut mapper = self.mapper();
        mapper.previous();
        mapper.active_index()
    }

    pub fn next(&self) -> usize {
        let mut mapper = self.mapper();
        mapper.next();
        mapper.active_index()
    }

    /// Direct pick from the track indicators; clamped.
    pub fn pick(&self, index: usize) -> usize {
        let mut mapper = self.mapper();
        mapper.pick(index);
        mapper.active_index()
    }

    /// Play button: commits the active profile now.
    ///
    /// Returns the committed profile, or `None` when the session is already committed
    /// or torn down. The selection is committed in memory even if persisting it fails.
    pub async fn confirm(&self) -> Result<Option<ProfileType>> {
        if self.cancel.is_cancelled() {
            return Ok(None);
        }
        let effect = self.mapper().confirm();
        match effect {
            SelectionEffect::CommitNow(profile) => {
                self.store.commit(profile).await?;
                Ok(Some(profile))
            }
            _ => Ok(None),
        }
    }

    pub fn view(&self) -> OnboardingView {
        self.mapper().view()
    }

    pub fn phase(&self) -> SelectionPhase {
        self.mapper().phase()
    }

    pub fn active_profile(&self) -> ProfileType {
        self.mapper().active_profile()
    }

    /// Waits for a scheduled auto-commit to finish.
    ///
    /// Returns the profile it committed, or `None` if nothing was scheduled, it was
    /// cancelled, or an explicit confirm got there first.
    pub async fn wait_pending(&self) -> Option<ProfileType> {
        let handle = self
            .pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()?;
        match handle.await {
            Ok(committed) => committed,
            Err(e) => {
                warn!(error = %e, "Auto-commit task failed");
                None
            }
        }
    }

    /// Unmounts the view; a pending auto-commit will not fire.
    pub fn teardown(&self) {
        if !self.cancel.is_cancelled() {
            debug!("Onboarding session torn down");
            self.cancel.cancel();
        }
    }

    fn mapper(&self) -> MutexGuard<'_, SelectionMapper> {
        self.mapper.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn handle(&self, effect: SelectionEffect) {
        match effect {
            SelectionEffect::None => {}
            SelectionEffect::ScheduleCommit { profile, delay } => {
                if self.cancel.is_cancelled() {
                    return;
                }
                let Some(runtime) = self.runtime.clone().or_else(|| Handle::try_current().ok())
                else {
                    warn!(profile = %profile, "No async runtime for auto-commit; waiting for confirm");
                    return;
                };
                let mapper = Arc::clone(&self.mapper);
                let store = self.store.clone();
                let cancel = self.cancel.clone();

                let task = runtime.spawn(async move {
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            debug!(profile = %profile, "Auto-commit cancelled");
                            None
                        }
                        _ = tokio::time::sleep(delay) => {
                            let fired = mapper
                                .lock()
                                .unwrap_or_else(|e| e.into_inner())
                                .fire_scheduled_commit();
                            match fired {
                                Some(profile) => {
                                    if let Err(e) = store.commit(profile).await {
                                        warn!(error = %e, "Auto-committed profile was not persisted");
                                    }
                                    Some(profile)
                                }
                                None => None,
                            }
                        }
                    }
                });
                *self.pending.lock().unwrap_or_else(|e| e.into_inner()) = Some(task);
            }
            // Only produced by confirm, which commits inline.
            SelectionEffect::CommitNow(_) => {}
        }
    }
}

impl Drop for OnboardingSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
