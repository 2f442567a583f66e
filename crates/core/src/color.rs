//! 8-bit RGBA color with CSS `rgba(r,g,b,a)` string form.
//!
//! Point fills carry the exact channel values of the sampled pixel, so the
//! color type is 8-bit per channel rather than normalized floats. The string
//! form matches the CSS functional notation the sampled colors originally
//! used, and is also the serde representation.

use crate::error::BounceError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An 8-bit RGBA color.
///
/// Serializes as the string `"rgba(r,g,b,a)"` for human-readable formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    /// Creates a color from the four channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = BounceError;

    /// Parses `"rgba(r,g,b,a)"`, tolerating whitespace around components.
    ///
    /// Returns `BounceError::InvalidColor` if the wrapper or any channel
    /// is malformed or out of the 0-255 range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| BounceError::InvalidColor(format!("expected rgba(...), got '{s}'")))?;

        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 4 {
            return Err(BounceError::InvalidColor(format!(
                "expected 4 components, got {}",
                parts.len()
            )));
        }

        let channel = |part: &str, name: &str| -> Result<u8, BounceError> {
            part.trim()
                .parse::<u8>()
                .map_err(|e| BounceError::InvalidColor(format!("invalid {name} component: {e}")))
        };

        Ok(Rgba {
            r: channel(parts[0], "red")?,
            g: channel(parts[1], "green")?,
            b: channel(parts[2], "blue")?,
            a: channel(parts[3], "alpha")?,
        })
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_str(&s).map_err(serde::de::Error::custom)
    }
}
