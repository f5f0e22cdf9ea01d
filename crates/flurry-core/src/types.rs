//! Color and viewport types

use crate::error::FlurryError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// RGB color with 8-bit channels.
///
/// Channels are integers so two colors compare structurally and the
/// type can participate in hashed composite keys. Serialized as a
/// `"#RRGGBB"` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    /// #AEEEEE
    pub const PALE_TURQUOISE: Self = Self::from_hex(0xAEEEEE);
    /// #87CEFA
    pub const LIGHT_SKY_BLUE: Self = Self::from_hex(0x87CEFA);
    /// #F0FFFF
    pub const AZURE: Self = Self::from_hex(0xF0FFFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    pub fn to_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Pack into the 0RGB pixel format softbuffer expects
    pub fn to_pixel(&self) -> u32 {
        self.to_hex()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Color {
    type Err = FlurryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return Err(FlurryError::InvalidColor(s.to_string()));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| FlurryError::InvalidColor(s.to_string()))?;
        Ok(Self::from_hex(value))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// The visible drawing area's width and height.
///
/// Bounds spawn positions and the cull line. Hosts re-read this every
/// tick so a window resize takes effect immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A zero-area viewport (e.g. a minimized window) cannot host a tick
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
