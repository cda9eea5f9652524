//! Built-in profile presets.
//!
//! Provides the compiled-in copy, calls to action and accent colors for every profile.

use super::model::{CallToAction, ProfileConfig, ProfileType};

const RECRUITER: ProfileConfig = ProfileConfig {
    profile: ProfileType::Recruiter,
    color: "#8B5CF6",
    title: "Hiring",
    subtitle: "Looking for talent",
    tagline: "Enterprise-ready. Startup-tested. Impact-driven.",
    description: "Full-Stack Developer with 4 years of experience building AI-powered experiences for Gaming & Entertainment. I turn complex challenges into elegant, scalable solutions.",
    primary_cta: CallToAction {
        text: "Download Resume",
        href: "/resume.pdf",
    },
    secondary_cta: CallToAction {
        text: "View My Work",
        href: "#work",
    },
};

const BUSINESS: ProfileConfig = ProfileConfig {
    profile: ProfileType::Business,
    color: "#FF6B35",
    title: "Building",
    subtitle: "Have a project",
    tagline: "From idea to impact\u{2014}faster than you'd expect.",
    description: "I help businesses build high-impact digital products\u{2014}from AI integrations to seamless tech migrations. Let's turn your vision into measurable results.",
    primary_cta: CallToAction {
        text: "Let's Discuss Your Project",
        href: "#contact",
    },
    secondary_cta: CallToAction {
        text: "View Case Studies",
        href: "#work",
    },
};

const COLLABORATOR: ProfileConfig = ProfileConfig {
    profile: ProfileType::Collaborator,
    color: "#06B6D4",
    title: "Collaborating",
    subtitle: "Want to connect",
    tagline: "Let's build something worth talking about.",
    description: "I experiment fearlessly with AI, animations, and cutting-edge tech. Passionate about Gaming, Entertainment, and Education. Always looking for exciting projects and like-minded builders.",
    primary_cta: CallToAction {
        text: "Let's Connect",
        href: "#contact",
    },
    secondary_cta: CallToAction {
        text: "See What I'm Building",
        href: "#work",
    },
};

const EXPLORER: ProfileConfig = ProfileConfig {
    profile: ProfileType::Explorer,
    color: "#10B981",
    title: "Exploring",
    subtitle: "Just browsing",
    tagline: "Full-stack for the future. Built for impact.",
    description: "Full-Stack Developer crafting AI-powered experiences for Gaming & Entertainment. I build what matters.",
    primary_cta: CallToAction {
        text: "View My Work",
        href: "#work",
    },
    secondary_cta: CallToAction {
        text: "Get in Touch",
        href: "#contact",
    },
};

static ONBOARDING_PROFILES: [ProfileConfig; 4] = [RECRUITER, BUSINESS, COLLABORATOR, EXPLORER];

/// Returns the preset for a profile.
///
/// The match is exhaustive, so adding a variant without a preset fails to compile.
pub fn profile_config(profile: ProfileType) -> &'static ProfileConfig {
    match profile {
        ProfileType::Recruiter => &ONBOARDING_PROFILES[0],
        ProfileType::Business => &ONBOARDING_PROFILES[1],
        ProfileType::Collaborator => &ONBOARDING_PROFILES[2],
        ProfileType::Explorer => &ONBOARDING_PROFILES[3],
    }
}

/// Resolves the config for an optional selection, falling back to [`ProfileType::DEFAULT`].
pub fn resolve_config(selected: Option<ProfileType>) -> &'static ProfileConfig {
    profile_config(selected.unwrap_or(ProfileType::DEFAULT))
}

/// All presets in onboarding order.
pub fn onboarding_profiles() -> &'static [ProfileConfig] {
    &ONBOARDING_PROFILES
}
