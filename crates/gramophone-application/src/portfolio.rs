//! Portfolio navigation: the section tracker driven by a live viewport.

use std::time::Duration;

use gramophone_core::error::Result;
use gramophone_core::navigation::{SectionId, SectionLayout, SectionTracker, TransportView};
use gramophone_core::scroll::ScrollSample;
use serde::Serialize;
use tokio::time::Instant;

use crate::personalization_store::PersonalizationStore;

/// The page as seen by the navigator.
///
/// Section offsets come from [`SectionLayout`] and are read again on every scroll.
pub trait Viewport: SectionLayout {
    /// Current scroll position and dimensions of the whole document.
    fn scroll_sample(&self) -> ScrollSample;

    /// Starts a smooth scroll to the section's element.
    fn smooth_scroll_to(&mut self, section: SectionId);
}

/// Transport bar contents: section state plus the active profile's accent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    #[serde(flatten)]
    pub transport: TransportView,
    pub tagline: &'static str,
    pub color: &'static str,
}

/// Drives a [`SectionTracker`] from viewport events and transport bar buttons.
pub struct PortfolioNavigator<V> {
    viewport: V,
    tracker: SectionTracker,
    store: PersonalizationStore,
    started: Instant,
}

impl<V: Viewport> PortfolioNavigator<V> {
    pub fn new(viewport: V, store: PersonalizationStore, advance_flash: Duration) -> Self {
        Self {
            viewport,
            tracker: SectionTracker::new(advance_flash),
            store,
            started: Instant::now(),
        }
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn current(&self) -> usize {
        self.tracker.current()
    }

    /// Scroll or resize notification. Returns the current section index.
    pub fn on_scroll(&mut self) -> usize {
        let sample = self.viewport.scroll_sample();
        self.tracker.on_scroll(sample, &self.viewport)
    }

    pub fn navigate_to(&mut self, index: usize) -> SectionId {
        let section = self.tracker.navigate_to(index);
        self.viewport.smooth_scroll_to(section);
        section
    }

    pub fn previous(&mut self) -> SectionId {
        self.navigate_to(self.tracker.current().saturating_sub(1))
    }

    pub fn next(&mut self) -> SectionId {
        self.navigate_to(self.tracker.current().saturating_add(1))
    }

    /// Play button.
    pub fn advance(&mut self) -> SectionId {
        let section = self.tracker.advance(self.now_ms());
        self.viewport.smooth_scroll_to(section);
        section
    }

    pub async fn now_playing(&self) -> NowPlaying {
        let config = self.store.config().await;
        NowPlaying {
            transport: self.tracker.transport(self.now_ms()),
            tagline: config.tagline,
            color: config.color,
        }
    }

    /// "Change profile" on the transport bar: back to onboarding.
    pub async fn change_profile(&self) -> Result<()> {
        self.store.clear().await
    }

    fn now_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gramophone_core::navigation::SectionAnchor;
    use gramophone_core::personalization::{
        PersonalizationRepository, PersonalizationState, Screen,
    };
    use gramophone_core::profile::ProfileType;
    use std::sync::Arc;

    struct NullRepository;

    #[async_trait]
    impl PersonalizationRepository for NullRepository {
        async fn load(&self) -> Result<Option<PersonalizationState>> {
            Ok(Some(PersonalizationState::with_profile(ProfileType::Recruiter)))
        }

        async fn save(&self, _state: PersonalizationState) -> Result<()> {
            Ok(())
        }
    }

    struct FakePage {
        anchors: Vec<SectionAnchor>,
        scroll_top: f64,
        scrolled_to: Vec<SectionId>,
    }

    impl FakePage {
        fn new() -> Self {
            Self {
                anchors: SectionAnchor::from_offsets([0.0, 1200.0, 2400.0, 3600.0]),
                scroll_top: 0.0,
                scrolled_to: Vec::new(),
            }
        }
    }

    impl SectionLayout for FakePage {
        fn section_offset(&self, section: SectionId) -> Option<f64> {
            self.anchors.section_offset(section)
        }
    }

    impl Viewport for FakePage {
        fn scroll_sample(&self) -> ScrollSample {
            ScrollSample::new(self.scroll_top, 800.0, 4800.0)
        }

        fn smooth_scroll_to(&mut self, section: SectionId) {
            self.scrolled_to.push(section);
        }
    }

    fn navigator() -> PortfolioNavigator<FakePage> {
        let store = PersonalizationStore::new(Arc::new(NullRepository));
        PortfolioNavigator::new(FakePage::new(), store, Duration::from_millis(1000))
    }

    #[tokio::test]
    async fn test_scroll_follows_midpoint() {
        let mut nav = navigator();
        nav.viewport_mut().scroll_top = 1000.0;
        assert_eq!(nav.on_scroll(), 1);
        nav.viewport_mut().scroll_top = 4000.0;
        assert_eq!(nav.on_scroll(), 3);
        nav.viewport_mut().scroll_top = 0.0;
        assert_eq!(nav.on_scroll(), 0);
    }

    #[tokio::test]
    async fn test_navigate_is_optimistic_and_scrolls() {
        let mut nav = navigator();
        assert_eq!(nav.navigate_to(2), SectionId::Work);
        assert_eq!(nav.navigate_to(2), SectionId::Work);
        assert_eq!(nav.current(), 2);
        assert_eq!(nav.navigate_to(17), SectionId::Contact);
        assert_eq!(
            nav.viewport().scrolled_to,
            vec![SectionId::Work, SectionId::Work, SectionId::Contact]
        );
    }

    #[tokio::test]
    async fn test_previous_and_next_clamp() {
        let mut nav = navigator();
        assert_eq!(nav.previous(), SectionId::Hero);
        assert_eq!(nav.next(), SectionId::About);
        nav.navigate_to(3);
        assert_eq!(nav.next(), SectionId::Contact);
    }

    #[tokio::test(start_paused = true)]
    async fn test_advance_wraps_and_flashes() {
        let mut nav = navigator();
        nav.navigate_to(3);
        assert_eq!(nav.advance(), SectionId::Hero);

        let playing = nav.now_playing().await;
        assert!(playing.transport.advancing);
        assert_eq!(playing.transport.label, "Intro");
        assert!(!playing.transport.can_go_previous);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(!nav.now_playing().await.transport.advancing);
    }

    #[tokio::test]
    async fn test_now_playing_uses_profile_accent() {
        let mut nav = navigator();
        nav.viewport_mut().scroll_top = 2000.0;
        nav.on_scroll();
        let playing = nav.now_playing().await;
        assert_eq!(playing.color, "#8B5CF6");
        assert_eq!(playing.tagline, "Enterprise-ready. Startup-tested. Impact-driven.");
        assert_eq!(playing.transport.label, "Work");
        assert_eq!(playing.transport.progress_percent, 50.0);
    }

    #[tokio::test]
    async fn test_change_profile_clears_store() {
        let nav = navigator();
        assert_eq!(nav.store.screen().await, Screen::Portfolio);
        nav.change_profile().await.unwrap();
        assert_eq!(nav.store.screen().await, Screen::Onboarding);
        assert_eq!(nav.now_playing().await.color, "#10B981");
    }
}
