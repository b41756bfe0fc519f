//! Color value types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::codec;
use crate::error::ParseError;

/// An RGB color stored as byte channels.
///
/// Two colors are equal exactly when their channels are equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Neutral gray used when no light color is available.
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from untrusted integers, clamping each channel.
    #[must_use]
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        Self::from(codec::clamp_byte_channels(r, g, b))
    }

    /// Parse `RRGGBB` or `#RRGGBB`.
    pub fn from_hex(hex: &str) -> Result<Self, ParseError> {
        codec::byte_channels_from_hex_string(hex).map(Self::from)
    }

    /// Parse three decimal channel fields.
    pub fn from_decimal(r: &str, g: &str, b: &str) -> Result<Self, ParseError> {
        codec::byte_channels_from_decimal(r, g, b).map(Self::from)
    }

    /// Format as `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        codec::hex_string_from_byte_channels(self.r, self.g, self.b)
    }

    #[must_use]
    pub fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_normalized(self) -> NormalizedColor {
        NormalizedColor::from(codec::normalized_from_byte_channels(self.r, self.g, self.b))
    }

    #[must_use]
    pub fn from_normalized(color: NormalizedColor) -> Self {
        Self::from(codec::byte_channels_from_normalized(color.r, color.g, color.b))
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl From<NormalizedColor> for Color {
    fn from(color: NormalizedColor) -> Self {
        Self::from_normalized(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex(value)
    }
}

/// An RGB color in the host's native light-intensity form, `0.0..=1.0` per channel.
///
/// Values are not validated on construction; converting to [`Color`] clamps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl NormalizedColor {
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Multiply every channel by `intensity`, clamped to `0.0..=1.0`.
    ///
    /// A NaN intensity is treated as 0.
    #[must_use]
    pub fn scaled(self, intensity: f32) -> Self {
        let k = if intensity.is_nan() {
            0.0
        } else {
            intensity.clamp(0.0, 1.0)
        };
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    #[must_use]
    pub fn channels(self) -> (f32, f32, f32) {
        (self.r, self.g, self.b)
    }
}

impl From<(f32, f32, f32)> for NormalizedColor {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for NormalizedColor {
    fn from(color: Color) -> Self {
        color.to_normalized()
    }
}

impl fmt::Display for NormalizedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} {:.6} {:.6}", self.r, self.g, self.b)
    }
}
