use anyhow::{Context, Result};
use gramophone_application::OnboardingSession;
use gramophone_core::scroll::ScrollRegion;
use serde_json::json;

use super::CliContext;

/// Feeds each scroll sample to a fresh onboarding session, then commits.
pub async fn replay(
    ctx: &CliContext,
    viewport_height: f64,
    scroll: &[f64],
    confirm: bool,
) -> Result<()> {
    let store = ctx.store()?;
    let previous = store.load().await;
    if let Some(profile) = previous.selected_profile() {
        tracing::info!(profile = %profile, "Replacing stored profile");
    }

    let session = OnboardingSession::new(store.clone(), ctx.config.onboarding.tuning())
        .context("Invalid onboarding tuning")?;
    let region = ScrollRegion::viewport_multiple(viewport_height, ctx.config.onboarding.track_viewports);

    for &scroll_top in scroll {
        let sample = region.sample(scroll_top, viewport_height);
        let active = session.on_scroll(sample);
        let line = json!({
            "scrollTop": scroll_top,
            "progress": sample.progress(),
            "activeIndex": active,
            "profile": session.active_profile(),
            "phase": session.phase(),
        });
        println!("{}", line);
    }

    let committed = if confirm {
        session.confirm().await.context("Failed to save profile")?
    } else {
        session.wait_pending().await
    };
    session.teardown();

    let summary = json!({
        "committed": committed,
        "view": session.view(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if committed.is_none() {
        println!("No profile committed; scroll past the end of the track or pass --confirm");
    }
    Ok(())
}
