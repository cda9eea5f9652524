//! Render-ready snapshot of the onboarding selector.

use serde::Serialize;

use super::selection::{SelectionMapper, SelectionPhase};
use crate::profile::{ProfileConfig, profile_config};

/// One dot in the track indicator row under the turntable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackIndicator {
    pub index: usize,
    pub title: &'static str,
    pub color: &'static str,
    pub active: bool,
}

/// Everything the selector needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingView {
    pub active_index: usize,
    /// Preset of the active record; its color drives the ambient glow.
    pub active: &'static ProfileConfig,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub phase: SelectionPhase,
    pub tracks: Vec<TrackIndicator>,
}

impl SelectionMapper {
    pub fn view(&self) -> OnboardingView {
        let active_index = self.active_index();
        OnboardingView {
            active_index,
            active: profile_config(self.active_profile()),
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
            phase: self.phase(),
            tracks: self
                .profiles()
                .iter()
                .enumerate()
                .map(|(index, profile)| {
                    let config = profile_config(*profile);
                    TrackIndicator {
                        index,
                        title: config.title,
                        color: config.color,
                        active: index == active_index,
                    }
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::onboarding::{SelectionMapper, SelectionPhase, SelectionTuning};
    use crate::profile::ProfileType;

    #[test]
    fn test_view_follows_active_record() {
        let mut mapper = SelectionMapper::onboarding(SelectionTuning::default()).unwrap();
        mapper.pick(1);
        let view = mapper.view();

        assert_eq!(view.active_index, 1);
        assert_eq!(view.active.profile, ProfileType::Business);
        assert_eq!(view.active.title, "Building");
        assert!(view.can_go_previous && view.can_go_next);
        assert_eq!(view.phase, SelectionPhase::Browsing);

        let active: Vec<usize> = view
            .tracks
            .iter()
            .filter(|t| t.active)
            .map(|t| t.index)
            .collect();
        assert_eq!(active, vec![1]);
        assert_eq!(view.tracks.len(), 4);
    }

    #[test]
    fn test_view_at_last_record_disables_next() {
        let mut mapper = SelectionMapper::onboarding(SelectionTuning::default()).unwrap();
        mapper.pick(3);
        let view = mapper.view();
        assert!(!view.can_go_next);
        assert_eq!(view.active.color, "#10B981");
    }
}
