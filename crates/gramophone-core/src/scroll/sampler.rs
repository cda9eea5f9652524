//! Normalized scroll progress.
//!
//! Turns raw scroll geometry into a progress value in `[0, 1]`. Everything here is
//! pure so it can be called once per scroll notification at whatever cadence the
//! event source delivers.

use serde::{Deserialize, Serialize};

/// Progress through a scrollable document.
///
/// `scroll_top / (document_height - viewport_height)`, clamped to `[0, 1]`. A document
/// that fits inside the viewport (or any non-finite input) yields `0.0`.
pub fn progress(scroll_top: f64, viewport_height: f64, document_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// One reading of the page's vertical scroll geometry, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollSample {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollSample {
    pub fn new(scroll_top: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_top,
            viewport_height,
            document_height,
        }
    }

    pub fn progress(&self) -> f64 {
        progress(self.scroll_top, self.viewport_height, self.document_height)
    }

    /// Document offset of the middle of the viewport.
    pub fn viewport_midpoint(&self) -> f64 {
        self.scroll_top + self.viewport_height / 2.0
    }
}

/// A tall block of the page whose own scroll progress drives onboarding.
///
/// Progress runs from 0 when the region's top reaches the viewport top to 1 when its
/// bottom reaches the viewport bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRegion {
    pub top: f64,
    pub height: f64,
}

impl ScrollRegion {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// A region starting at the document top that is `multiple` viewports tall.
    pub fn viewport_multiple(viewport_height: f64, multiple: f64) -> Self {
        Self::new(0.0, viewport_height * multiple)
    }

    /// Samples the region as if it were the whole document.
    pub fn sample(&self, scroll_top: f64, viewport_height: f64) -> ScrollSample {
        ScrollSample::new(scroll_top - self.top, viewport_height, self.height)
    }

    pub fn progress(&self, scroll_top: f64, viewport_height: f64) -> f64 {
        self.sample(scroll_top, viewport_height).progress()
    }
}
