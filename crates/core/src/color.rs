//! RGBA colors as the fragment shaders consume them.
//!
//! Components are `f32` in [0, 1], matching a `vec4` uniform. Colors
//! serialize as `"#rrggbbaa"` hex strings so configs stay readable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LessonError;

/// A straight-alpha RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black, the default clear color.
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color.
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parses `"#rrggbb"` or `"#rrggbbaa"` (the `#` is optional, case insensitive).
    ///
    /// Returns `LessonError::InvalidColor` on any other input.
    pub fn from_hex(hex: &str) -> Result<Rgba, LessonError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(LessonError::InvalidColor(format!("not a hex color: {hex}")));
        }
        if hex.len() != 6 && hex.len() != 8 {
            return Err(LessonError::InvalidColor(format!(
                "expected 6 or 8 hex digits, got {}",
                hex.len()
            )));
        }

        let channel = |i: usize| -> Result<f32, LessonError> {
            let digits = hex
                .get(i..i + 2)
                .ok_or_else(|| LessonError::InvalidColor(format!("non-ascii color: {hex}")))?;
            u8::from_str_radix(digits, 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|e| LessonError::InvalidColor(format!("'{digits}': {e}")))
        };

        let a = if hex.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Formats as `"#rrggbbaa"`, quantizing each component to 8 bits.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    /// Quantizes to 8-bit channels, clamping out-of-range components.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Components in uniform order.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
