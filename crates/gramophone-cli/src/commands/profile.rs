use anyhow::{Context, Result};
use gramophone_core::profile::{ProfileType, profile_config};
use gramophone_core::theme::ProfileTheme;
use serde_json::json;

use super::CliContext;

pub async fn status(ctx: &CliContext) -> Result<()> {
    let store = ctx.store()?;
    let snapshot = store.snapshot().await;
    let state_file = ctx.paths.state_file().context("Failed to resolve state file")?;

    let report = json!({
        "stateFile": state_file.display().to_string(),
        "key": ctx.config.storage.key,
        "selectedProfile": snapshot.state.selected_profile(),
        "hasSelectedProfile": snapshot.state.has_selected_profile(),
        "screen": snapshot.screen(),
        "config": snapshot.state.config(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub async fn select(ctx: &CliContext, profile: ProfileType) -> Result<()> {
    let store = ctx.store()?;
    store
        .commit(profile)
        .await
        .with_context(|| format!("Failed to save profile {}", profile))?;

    let config = profile_config(profile);
    println!("✓ Selected {} ({})", profile, config.title);
    println!("  {}", config.tagline);
    Ok(())
}

pub async fn clear(ctx: &CliContext) -> Result<()> {
    let store = ctx.store()?;
    store.clear().await.context("Failed to clear profile")?;
    println!("✓ Profile cleared; next visit starts at onboarding");
    Ok(())
}

pub async fn theme(ctx: &CliContext, profile: Option<ProfileType>) -> Result<()> {
    let config = match profile {
        Some(profile) => profile_config(profile),
        None => ctx.store()?.config().await,
    };
    let theme = ProfileTheme::for_config(config)
        .with_context(|| format!("Invalid color for profile {}", config.profile))?;

    println!("/* {} */", config.profile);
    println!(":root {{");
    for (name, value) in theme.css_custom_properties() {
        println!("  {}: {};", name, value);
    }
    println!("}}");
    Ok(())
}
