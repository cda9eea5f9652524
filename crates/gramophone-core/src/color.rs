//! Hex color parsing and translucent variants for themed views.

use std::fmt;
use std::str::FromStr;

use crate::error::{GramophoneError, Result};

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` or `RRGGBB`.
    ///
    /// Anything other than exactly six hex digits after the optional `#` is rejected.
    /// Preset colors are known-valid, so callers holding a [`ProfileConfig`] color may
    /// treat an error here as a programming mistake.
    ///
    /// [`ProfileConfig`]: crate::profile::ProfileConfig
    pub fn parse_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GramophoneError::invalid_color(
                hex,
                "expected 6 hex digits (#RRGGBB)",
            ));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| GramophoneError::invalid_color(hex, e.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Formats this color as a CSS `rgba()` string with the given opacity.
    pub fn with_opacity(self, opacity: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, opacity)
    }
}

impl FromStr for Rgb {
    type Err = GramophoneError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// `rgba(r, g, b, opacity)` for a `#RRGGBB` color.
pub fn with_opacity(hex: &str, opacity: f64) -> Result<String> {
    Ok(Rgb::parse_hex(hex)?.with_opacity(opacity))
}
