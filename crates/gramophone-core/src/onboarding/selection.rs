//! Scroll-driven profile selection.
//!
//! The onboarding track is split into `N + settle_segments` equal bands of scroll
//! progress. Each of the first `N` bands selects one profile; the trailing settle band
//! is dead space that the visitor scrolls through before the auto-commit threshold.
//!
//! The mapper is a reducer: every scroll sample or button press is applied in arrival
//! order and the last writer wins `active_index`. Side effects (scheduling or
//! performing the commit) are returned as [`SelectionEffect`] values for the caller to
//! carry out.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{GramophoneError, Result};
use crate::profile::ProfileType;
use crate::scroll::ScrollSample;

/// Tuning values for the selection mapper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionTuning {
    /// Progress strictly above which an auto-commit is scheduled
    pub auto_commit_threshold: f64,
    /// Width of the trailing dead band, in segments
    pub settle_segments: f64,
    /// Delay between scheduling and performing an auto-commit
    pub auto_commit_delay: Duration,
}

impl Default for SelectionTuning {
    fn default() -> Self {
        Self {
            auto_commit_threshold: 0.9,
            settle_segments: 0.5,
            auto_commit_delay: Duration::from_millis(300),
        }
    }
}

impl SelectionTuning {
    pub fn validate(&self) -> Result<()> {
        let threshold = self.auto_commit_threshold;
        if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
            return Err(GramophoneError::config(format!(
                "auto_commit_threshold must be in (0, 1], got {}",
                threshold
            )));
        }
        if !self.settle_segments.is_finite() || self.settle_segments < 0.0 {
            return Err(GramophoneError::config(format!(
                "settle_segments must be a non-negative number, got {}",
                self.settle_segments
            )));
        }
        Ok(())
    }
}

/// Where the onboarding flow is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "profile", rename_all = "camelCase")]
pub enum SelectionPhase {
    /// Visitor is scrolling or clicking through profiles
    Browsing,
    /// An auto-commit has been scheduled and is waiting out its delay
    Committing(ProfileType),
    /// A profile has been committed; further input is ignored
    Committed(ProfileType),
}

/// One input to the mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionInput {
    /// Scroll or resize notification over the onboarding track
    Scroll(ScrollSample),
    Previous,
    Next,
    /// Direct pick from the track indicators
    Pick(usize),
    /// The play button
    Confirm,
}

/// Work the caller must perform after applying an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEffect {
    None,
    /// Commit `profile` after `delay`, unless the onboarding view is torn down first.
    /// Call [`SelectionMapper::fire_scheduled_commit`] when the delay elapses.
    ScheduleCommit {
        profile: ProfileType,
        delay: Duration,
    },
    /// Commit `profile` now.
    CommitNow(ProfileType),
}

/// Maps scroll progress and manual navigation onto a single active profile.
#[derive(Debug, Clone)]
pub struct SelectionMapper {
    profiles: Vec<ProfileType>,
    tuning: SelectionTuning,
    active_index: usize,
    phase: SelectionPhase,
}

impl SelectionMapper {
    pub fn new(profiles: Vec<ProfileType>, tuning: SelectionTuning) -> Result<Self> {
        if profiles.is_empty() {
            return Err(GramophoneError::config(
                "selection mapper needs at least one profile",
            ));
        }
        tuning.validate()?;

        Ok(Self {
            profiles,
            tuning,
            active_index: 0,
            phase: SelectionPhase::Browsing,
        })
    }

    /// A mapper over every profile in onboarding order.
    pub fn onboarding(tuning: SelectionTuning) -> Result<Self> {
        Self::new(ProfileType::ALL.to_vec(), tuning)
    }

    pub fn profiles(&self) -> &[ProfileType] {
        &self.profiles
    }

    pub fn tuning(&self) -> &SelectionTuning {
        &self.tuning
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_profile(&self) -> ProfileType {
        self.profiles[self.active_index]
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    pub fn is_committed(&self) -> bool {
        matches!(self.phase, SelectionPhase::Committed(_))
    }

    pub fn can_go_previous(&self) -> bool {
        self.active_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.active_index + 1 < self.profiles.len()
    }

    /// Width of one profile's band of progress.
    pub fn segment_size(&self) -> f64 {
        1.0 / (self.profiles.len() as f64 + self.tuning.settle_segments)
    }

    /// The profile index selected by a progress value.
    pub fn segment_index(&self, progress: f64) -> usize {
        let last = self.profiles.len() - 1;
        let band = (progress / self.segment_size()).floor();
        if !band.is_finite() || band <= 0.0 {
            0
        } else {
            (band as usize).min(last)
        }
    }

    pub fn apply(&mut self, input: SelectionInput) -> SelectionEffect {
        match input {
            SelectionInput::Scroll(sample) => self.on_scroll(sample),
            SelectionInput::Previous => self.previous(),
            SelectionInput::Next => self.next(),
            SelectionInput::Pick(index) => self.pick(index),
            SelectionInput::Confirm => self.confirm(),
        }
    }

    pub fn on_scroll(&mut self, sample: ScrollSample) -> SelectionEffect {
        self.on_progress(sample.progress())
    }

    /// Applies one progress sample.
    ///
    /// Progress is recomputed by the caller for every notification; nothing from an
    /// earlier sample is retained.
    pub fn on_progress(&mut self, progress: f64) -> SelectionEffect {
        if self.is_committed() {
            return SelectionEffect::None;
        }
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };

        self.set_active(self.segment_index(progress));

        if progress > self.tuning.auto_commit_threshold && self.phase == SelectionPhase::Browsing
        {
            let profile = self.active_profile();
            self.phase = SelectionPhase::Committing(profile);
            info!(
                profile = %profile,
                progress,
                delay_ms = self.tuning.auto_commit_delay.as_millis() as u64,
                "Scheduling onboarding auto-commit"
            );
            return SelectionEffect::ScheduleCommit {
                profile,
                delay: self.tuning.auto_commit_delay,
            };
        }

        SelectionEffect::None
    }

    pub fn previous(&mut self) -> SelectionEffect {
        self.pick(self.active_index.saturating_sub(1))
    }

    pub fn next(&mut self) -> SelectionEffect {
        self.pick(self.active_index.saturating_add(1))
    }

    /// Moves to `index`, clamped to the profile range. Never commits.
    pub fn pick(&mut self, index: usize) -> SelectionEffect {
        if !self.is_committed() {
            self.set_active(index.min(self.profiles.len() - 1));
        }
        SelectionEffect::None
    }

    /// Commits the active profile immediately, regardless of scroll progress.
    ///
    /// A pending auto-commit is superseded: its later
    /// [`fire_scheduled_commit`](Self::fire_scheduled_commit) returns `None`.
    pub fn confirm(&mut self) -> SelectionEffect {
        if self.is_committed() {
            return SelectionEffect::None;
        }
        let profile = self.active_profile();
        self.phase = SelectionPhase::Committed(profile);
        info!(profile = %profile, "Onboarding confirmed");
        SelectionEffect::CommitNow(profile)
    }

    /// Resolves a scheduled auto-commit once its delay has elapsed.
    ///
    /// Returns the profile to commit, or `None` when nothing is pending (already
    /// committed by confirm, or never scheduled).
    pub fn fire_scheduled_commit(&mut self) -> Option<ProfileType> {
        match self.phase {
            SelectionPhase::Committing(profile) => {
                self.phase = SelectionPhase::Committed(profile);
                Some(profile)
            }
            _ => None,
        }
    }

    fn set_active(&mut self, index: usize) {
        if index != self.active_index {
            debug!(
                from = self.active_index,
                to = index,
                profile = %self.profiles[index],
                "Active onboarding profile changed"
            );
            self.active_index = index;
        }
    }
}
