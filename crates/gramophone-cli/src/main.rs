//! Gramophone CLI - inspect and drive the portfolio personalization engine.
//!
//! - Show, select and clear the stored visitor profile
//! - Print the themed CSS custom properties for a profile
//! - Replay scroll traces through onboarding and section tracking

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gramophone_core::profile::ProfileType;

mod commands;

use commands::CliContext;

#[derive(Parser)]
#[command(name = "gramophone")]
#[command(about = "Gramophone - scroll-driven portfolio personalization", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding config.toml and state.json (default: platform config dir)
    #[arg(long, global = true, env = "GRAMOPHONE_STATE_DIR")]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the stored personalization and the resolved profile
    Status,

    /// Commit a profile (recruiter, business, collaborator, explorer)
    Select {
        #[arg(value_parser = parse_profile)]
        profile: ProfileType,
    },

    /// Forget the stored profile and return to onboarding
    Clear,

    /// Print the CSS custom properties for a profile (default: the stored one)
    Theme {
        #[arg(value_parser = parse_profile)]
        profile: Option<ProfileType>,
    },

    /// Replay a scroll trace through the onboarding selector
    Onboard {
        /// Viewport height in pixels
        #[arg(long, default_value_t = 800.0)]
        viewport_height: f64,

        /// Comma-separated scrollTop samples, in arrival order
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        scroll: Vec<f64>,

        /// Press play after the trace instead of waiting for auto-commit
        #[arg(long)]
        confirm: bool,
    },

    /// Show the transport bar for a scroll position on the portfolio page
    Sections {
        /// Viewport height in pixels
        #[arg(long, default_value_t = 800.0)]
        viewport_height: f64,

        /// Comma-separated offsets of the hero, about, work and contact sections
        #[arg(long, value_delimiter = ',', required = true)]
        anchors: Vec<f64>,

        #[arg(long)]
        scroll_top: f64,

        /// Total document height (default: last anchor plus one viewport)
        #[arg(long)]
        document_height: Option<f64>,
    },
}

fn parse_profile(value: &str) -> std::result::Result<ProfileType, String> {
    ProfileType::parse(value).map_err(|e| e.to_string())
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_filter))
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let ctx = CliContext::load(cli.state_dir)?;
    init_tracing(&ctx.config.logging.filter);

    match cli.command {
        Commands::Status => commands::profile::status(&ctx).await,
        Commands::Select { profile } => commands::profile::select(&ctx, profile).await,
        Commands::Clear => commands::profile::clear(&ctx).await,
        Commands::Theme { profile } => commands::profile::theme(&ctx, profile).await,
        Commands::Onboard {
            viewport_height,
            scroll,
            confirm,
        } => commands::onboard::replay(&ctx, viewport_height, &scroll, confirm).await,
        Commands::Sections {
            viewport_height,
            anchors,
            scroll_top,
            document_height,
        } => {
            commands::sections::show(&ctx, viewport_height, &anchors, scroll_top, document_height)
                .await
        }
    }
}
