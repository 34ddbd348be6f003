//! Streak-to-color mapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Number of discrete intensity levels.
pub const LEVEL_COUNT: usize = 5;

/// Highest intensity level.
pub const MAX_LEVEL: u8 = (LEVEL_COUNT - 1) as u8;

/// Map a streak length to an intensity level in `0..=4`.
///
/// Every three consecutive days climb one level; anything from ten days on
/// saturates at the top level.
pub fn intensity_level(streak: u32) -> u8 {
    if streak == 0 {
        return 0;
    }
    (streak / 3 + 1).min(MAX_LEVEL as u32) as u8
}

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidValue {
            key: "color".into(),
            message: format!("'{s}' is not a #rrggbb color"),
        };
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordered five-stop palette, neutral first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: [Rgb; LEVEL_COUNT],
}

impl Palette {
    pub fn new(colors: [Rgb; LEVEL_COUNT]) -> Self {
        Self { colors }
    }

    /// Build a palette from hex strings.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly five valid `#rrggbb` values are given.
    pub fn from_hex<S: AsRef<str>>(values: &[S]) -> Result<Self, ConfigError> {
        if values.len() != LEVEL_COUNT {
            return Err(ConfigError::InvalidValue {
                key: "palette".into(),
                message: format!("expected {LEVEL_COUNT} colors, got {}", values.len()),
            });
        }
        let mut colors = [Rgb::WHITE; LEVEL_COUNT];
        for (slot, value) in colors.iter_mut().zip(values) {
            *slot = value.as_ref().parse()?;
        }
        Ok(Self { colors })
    }

    /// Color for an intensity level. Levels above the top stop saturate.
    pub fn color(&self, level: u8) -> Rgb {
        self.colors[(level as usize).min(LEVEL_COUNT - 1)]
    }

    /// Color for a streak length.
    pub fn color_for_streak(&self, streak: u32) -> Rgb {
        self.color(intensity_level(streak))
    }

    pub fn colors(&self) -> &[Rgb; LEVEL_COUNT] {
        &self.colors
    }
}

impl Default for Palette {
    /// GitHub-style contribution greens.
    fn default() -> Self {
        Self::new([
            Rgb::new(0xeb, 0xed, 0xf0),
            Rgb::new(0x9b, 0xe9, 0xa8),
            Rgb::new(0x40, 0xc4, 0x63),
            Rgb::new(0x30, 0xa1, 0x4e),
            Rgb::new(0x21, 0x6e, 0x39),
        ])
    }
}
