//! 24-bit RGB color values and the `#RRGGBB` wire format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors raised while building theme inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("Invalid color format '{input}': {reason}")]
    InvalidColorFormat { input: String, reason: &'static str },
}

/// An opaque RGB triple. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (case-insensitive). The leading `#` is required.
    pub fn from_hex(input: &str) -> Result<Self, ThemeError> {
        let invalid = |reason: &'static str| ThemeError::InvalidColorFormat {
            input: input.to_string(),
            reason,
        };

        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| invalid("missing '#' prefix"))?;
        if digits.len() != 6 {
            return Err(invalid("expected exactly 6 hex digits"));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("non-hex character"));
        }

        // All six bytes are ASCII hex digits, so byte slicing is safe.
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid("non-hex character"))
        };

        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed neutrals (brand-independent)
// ────────────────────────────────────────────────────────────────────────────

pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

/// Near-black body text used whenever the brand color is too light to read.
pub const NEUTRAL_DARK: Color = Color::rgb(0x1f, 0x29, 0x37);

pub const GRAY_600: Color = Color::rgb(0x4b, 0x55, 0x63);
pub const GRAY_500: Color = Color::rgb(0x6b, 0x72, 0x80);
pub const GRAY_200: Color = Color::rgb(0xe5, 0xe7, 0xeb);
pub const GRAY_100: Color = Color::rgb(0xf3, 0xf4, 0xf6);
