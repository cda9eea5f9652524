use anyhow::{Result, bail};
use gramophone_application::{PortfolioNavigator, Viewport};
use gramophone_core::navigation::{SectionAnchor, SectionId, SectionLayout};
use gramophone_core::scroll::ScrollSample;

use super::CliContext;

/// A page frozen at one scroll position.
struct StaticPage {
    anchors: Vec<SectionAnchor>,
    scroll_top: f64,
    viewport_height: f64,
    document_height: f64,
}

impl SectionLayout for StaticPage {
    fn section_offset(&self, section: SectionId) -> Option<f64> {
        self.anchors.section_offset(section)
    }
}

impl Viewport for StaticPage {
    fn scroll_sample(&self) -> ScrollSample {
        ScrollSample::new(self.scroll_top, self.viewport_height, self.document_height)
    }

    fn smooth_scroll_to(&mut self, _section: SectionId) {}
}

pub async fn show(
    ctx: &CliContext,
    viewport_height: f64,
    anchors: &[f64],
    scroll_top: f64,
    document_height: Option<f64>,
) -> Result<()> {
    let offsets: [f64; 4] = match anchors.try_into() {
        Ok(offsets) => offsets,
        Err(_) => bail!(
            "Expected 4 section offsets (hero, about, work, contact), got {}",
            anchors.len()
        ),
    };

    let page = StaticPage {
        anchors: SectionAnchor::from_offsets(offsets),
        scroll_top,
        viewport_height,
        document_height: document_height.unwrap_or(offsets[3] + viewport_height),
    };

    let mut navigator =
        PortfolioNavigator::new(page, ctx.store()?, ctx.config.navigation.advance_flash());
    navigator.on_scroll();

    println!(
        "{}",
        serde_json::to_string_pretty(&navigator.now_playing().await)?
    );
    Ok(())
}
