//! Per-visit theme tokens derived from the active profile's accent color.

use serde::Serialize;

use crate::color::Rgb;
use crate::error::Result;
use crate::profile::ProfileConfig;

/// Opacity steps exposed as `--profile-color-NN` custom properties.
const TINT_STEPS: [(u8, f64); 4] = [(10, 0.1), (20, 0.2), (30, 0.3), (50, 0.5)];

/// Theme palette for a profile: the accent color plus its translucent tints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileTheme {
    pub color: String,
    /// `(percent, rgba)` pairs in ascending opacity
    pub tints: Vec<(u8, String)>,
}

impl ProfileTheme {
    pub fn from_color(hex: &str) -> Result<Self> {
        let rgb = Rgb::parse_hex(hex)?;
        Ok(Self {
            color: hex.to_string(),
            tints: TINT_STEPS
                .iter()
                .map(|&(percent, opacity)| (percent, rgb.with_opacity(opacity)))
                .collect(),
        })
    }

    pub fn for_config(config: &ProfileConfig) -> Result<Self> {
        Self::from_color(config.color)
    }

    /// The tint for a percentage step, if it is one of the exposed steps.
    pub fn tint(&self, percent: u8) -> Option<&str> {
        self.tints
            .iter()
            .find(|(p, _)| *p == percent)
            .map(|(_, rgba)| rgba.as_str())
    }

    /// CSS custom properties in declaration order.
    pub fn css_custom_properties(&self) -> Vec<(String, String)> {
        let mut properties = vec![("--profile-color".to_string(), self.color.clone())];
        properties.extend(
            self.tints
                .iter()
                .map(|(percent, rgba)| (format!("--profile-color-{}", percent), rgba.clone())),
        );
        properties
    }
}
