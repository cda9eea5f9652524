//! Section tracking.
//!
//! The current section is the last anchor whose top is at or above the middle of the
//! viewport. Anchor offsets come from a [`SectionLayout`] that is queried on every
//! sample, so content that shifts a section down is picked up on the next scroll.

use std::time::Duration;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter};
use tracing::debug;

use crate::scroll::ScrollSample;

/// The real-content sections of the portfolio page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Work,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Work,
        SectionId::Contact,
    ];

    /// Transport bar label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Intro",
            SectionId::About => "About",
            SectionId::Work => "Work",
            SectionId::Contact => "Contact",
        }
    }

    /// DOM element id of the section.
    pub fn element_id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Work => "work",
            SectionId::Contact => "contact",
        }
    }
}

/// A section and its current distance from the document top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectionAnchor {
    pub section: SectionId,
    pub offset_top: f64,
}

impl SectionAnchor {
    pub fn new(section: SectionId, offset_top: f64) -> Self {
        Self {
            section,
            offset_top,
        }
    }

    pub fn label(&self) -> &'static str {
        self.section.label()
    }

    /// Anchors for [`SectionId::ALL`] at the given offsets.
    pub fn from_offsets(offsets: [f64; 4]) -> Vec<SectionAnchor> {
        SectionId::ALL
            .iter()
            .zip(offsets)
            .map(|(section, offset)| SectionAnchor::new(*section, offset))
            .collect()
    }
}

/// Live layout queries for section positions.
pub trait SectionLayout {
    /// Offset of a section's top from the document top, or `None` if it is not rendered.
    fn section_offset(&self, section: SectionId) -> Option<f64>;
}

impl SectionLayout for [SectionAnchor] {
    fn section_offset(&self, section: SectionId) -> Option<f64> {
        self.iter()
            .find(|anchor| anchor.section == section)
            .map(|anchor| anchor.offset_top)
    }
}

impl SectionLayout for Vec<SectionAnchor> {
    fn section_offset(&self, section: SectionId) -> Option<f64> {
        self.as_slice().section_offset(section)
    }
}

/// Index of the last section whose top is at or above `midpoint`, or 0 if none is.
pub fn current_section<L>(sections: &[SectionId], layout: &L, midpoint: f64) -> usize
where
    L: SectionLayout + ?Sized,
{
    sections
        .iter()
        .enumerate()
        .rev()
        .find(|(_, section)| {
            layout
                .section_offset(**section)
                .is_some_and(|offset| offset <= midpoint)
        })
        .map(|(index, _)| index)
        .unwrap_or(0)
}

/// Render-ready state of the transport bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportView {
    pub current: usize,
    pub section: SectionId,
    pub label: &'static str,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    /// Presentation-only flash after the play button
    pub advancing: bool,
    /// Whole-page scroll progress, 0 to 100
    pub progress_percent: f64,
}

/// Tracks the section under the viewport midpoint and handles transport navigation.
///
/// State is UI-local and never persisted.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<SectionId>,
    advance_flash: Duration,
    current: usize,
    progress: f64,
    advancing_until_ms: Option<u64>,
}

impl SectionTracker {
    pub fn new(advance_flash: Duration) -> Self {
        Self {
            sections: SectionId::ALL.to_vec(),
            advance_flash,
            current: 0,
            progress: 0.0,
            advancing_until_ms: None,
        }
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_section(&self) -> SectionId {
        self.sections[self.current]
    }

    pub fn last_index(&self) -> usize {
        self.sections.len() - 1
    }

    pub fn can_go_previous(&self) -> bool {
        self.current != 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current != self.last_index()
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress * 100.0
    }

    /// Recomputes the current section from a scroll sample and the live layout.
    pub fn on_scroll<L>(&mut self, sample: ScrollSample, layout: &L) -> usize
    where
        L: SectionLayout + ?Sized,
    {
        self.progress = sample.progress();
        let index = current_section(&self.sections, layout, sample.viewport_midpoint());
        self.set_current(index);
        index
    }

    /// Jumps to a section, clamped to the section range.
    ///
    /// The current section is updated immediately; the returned section is the
    /// smooth-scroll target for the caller.
    pub fn navigate_to(&mut self, index: usize) -> SectionId {
        let target = index.min(self.last_index());
        self.set_current(target);
        self.sections[target]
    }

    pub fn previous(&mut self) -> SectionId {
        self.navigate_to(self.current.saturating_sub(1))
    }

    pub fn next(&mut self) -> SectionId {
        self.navigate_to(self.current.saturating_add(1))
    }

    /// Play button: next section, wrapping from the last back to the first.
    pub fn advance(&mut self, now_ms: u64) -> SectionId {
        let target = if self.current < self.last_index() {
            self.current + 1
        } else {
            0
        };
        let flash_ms = u64::try_from(self.advance_flash.as_millis()).unwrap_or(u64::MAX);
        self.advancing_until_ms = Some(now_ms.saturating_add(flash_ms));
        self.navigate_to(target)
    }

    pub fn is_advancing(&self, now_ms: u64) -> bool {
        self.advancing_until_ms.is_some_and(|until| now_ms < until)
    }

    pub fn transport(&self, now_ms: u64) -> TransportView {
        let section = self.current_section();
        TransportView {
            current: self.current,
            section,
            label: section.label(),
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
            advancing: self.is_advancing(now_ms),
            progress_percent: self.progress_percent(),
        }
    }

    fn set_current(&mut self, index: usize) {
        if index != self.current {
            debug!(
                from = self.current,
                to = index,
                section = %self.sections[index],
                "Current section changed"
            );
            self.current = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> Vec<SectionAnchor> {
        SectionAnchor::from_offsets([0.0, 1200.0, 2400.0, 3600.0])
    }

    fn tracker() -> SectionTracker {
        SectionTracker::new(Duration::from_millis(1000))
    }

    fn sample(scroll_top: f64) -> ScrollSample {
        ScrollSample::new(scroll_top, 800.0, 4800.0)
    }

    #[test]
    fn test_midpoint_rule() {
        let mut tracker = tracker();
        assert_eq!(tracker.on_scroll(sample(1000.0), &anchors()), 1);
        assert_eq!(tracker.on_scroll(sample(0.0), &anchors()), 0);
        assert_eq!(tracker.on_scroll(sample(3700.0), &anchors()), 3);
    }

    #[test]
    fn test_anchor_exactly_at_midpoint_counts() {
        let mut tracker = tracker();
        // midpoint = 800 + 400 = 1200
        assert_eq!(tracker.on_scroll(sample(800.0), &anchors()), 1);
        assert_eq!(tracker.on_scroll(sample(799.0), &anchors()), 0);
    }

    #[test]
    fn test_above_first_anchor_defaults_to_zero() {
        let layout = SectionAnchor::from_offsets([600.0, 1200.0, 2400.0, 3600.0]);
        let mut tracker = tracker();
        tracker.navigate_to(2);
        assert_eq!(tracker.on_scroll(sample(0.0), &layout), 0);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let layout = vec![
            SectionAnchor::new(SectionId::Hero, 0.0),
            SectionAnchor::new(SectionId::Work, 2400.0),
        ];
        let mut tracker = tracker();
        assert_eq!(tracker.on_scroll(sample(1000.0), &layout), 0);
        assert_eq!(tracker.on_scroll(sample(2500.0), &layout), 2);
    }

    #[test]
    fn test_layout_is_reread_each_sample() {
        let mut tracker = tracker();
        assert_eq!(tracker.on_scroll(sample(1000.0), &anchors()), 1);
        // content above "about" grew by 400px
        let shifted = SectionAnchor::from_offsets([0.0, 1600.0, 2800.0, 4000.0]);
        assert_eq!(tracker.on_scroll(sample(1000.0), &shifted), 0);
    }

    #[test]
    fn test_transport_enabled_flags() {
        let mut tracker = tracker();
        let view = tracker.transport(0);
        assert!(!view.can_go_previous);
        assert!(view.can_go_next);
        assert_eq!(view.label, "Intro");

        tracker.navigate_to(3);
        let view = tracker.transport(0);
        assert!(view.can_go_previous);
        assert!(!view.can_go_next);
        assert_eq!(view.label, "Contact");
    }

    #[test]
    fn test_navigate_to_clamps_and_is_idempotent() {
        let mut tracker = tracker();
        assert_eq!(tracker.navigate_to(2), SectionId::Work);
        assert_eq!(tracker.navigate_to(2), SectionId::Work);
        assert_eq!(tracker.current(), 2);

        assert_eq!(tracker.navigate_to(17), SectionId::Contact);
        assert_eq!(tracker.next(), SectionId::Contact);
        assert_eq!(tracker.current(), 3);

        tracker.navigate_to(0);
        assert_eq!(tracker.previous(), SectionId::Hero);
        assert_eq!(tracker.current(), 0);
    }

    #[test]
    fn test_advance_wraps_and_flashes() {
        let mut tracker = tracker();
        assert_eq!(tracker.advance(10_000), SectionId::About);
        assert!(tracker.is_advancing(10_500));
        assert!(!tracker.is_advancing(11_000));

        tracker.navigate_to(3);
        assert_eq!(tracker.advance(20_000), SectionId::Hero);
        assert_eq!(tracker.current(), 0);
        assert!(tracker.transport(20_001).advancing);
    }

    #[test]
    fn test_advancing_flag_does_not_affect_tracking() {
        let mut tracker = tracker();
        tracker.advance(0);
        assert_eq!(tracker.on_scroll(sample(2500.0), &anchors()), 2);
        assert!(tracker.is_advancing(1));
    }

    #[test]
    fn test_progress_percent_follows_scroll() {
        let mut tracker = tracker();
        tracker.on_scroll(sample(2000.0), &anchors());
        assert_eq!(tracker.progress_percent(), 50.0);
        tracker.on_scroll(ScrollSample::new(0.0, 800.0, 700.0), &anchors());
        assert_eq!(tracker.progress_percent(), 0.0);
    }
}
