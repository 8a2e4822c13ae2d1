// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the `LinearRgba` color type and associated operations.

use std::str::FromStr;

use thiserror::Error;

/// Represents a color in a **linear RGBA** color space using `f32` components.
///
/// This is the color representation stored on meshes and in lighting state.
/// Hex strings and color names given by users are interpreted as sRGB and
/// converted on the way in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgba {
    /// The red component in linear space.
    pub r: f32,
    /// The green component in linear space.
    pub g: f32,
    /// The blue component in linear space.
    pub b: f32,
    /// The alpha (opacity) component.
    pub a: f32,
}

/// An error raised when a color string cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}': expected #RRGGBB, #RRGGBBAA or a known color name")]
pub struct ColorError(pub String);

impl LinearRgba {
    // --- Common Color Constants ---

    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Creates a new `LinearRgba` with explicit RGBA values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new opaque `LinearRgba` (alpha = 1.0).
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a `LinearRgba` by converting from normalized sRGB components.
    #[inline]
    pub fn from_srgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: srgb_to_linear(r),
            g: srgb_to_linear(g),
            b: srgb_to_linear(b),
            a: 1.0,
        }
    }

    /// Parses an sRGB hex string (`#RRGGBB` or `#RRGGBBAA`).
    ///
    /// The RGB channels are converted to linear space; alpha is kept as is.
    ///
    /// # Example
    /// ```
    /// use vista_core::math::LinearRgba;
    /// let color = LinearRgba::try_from_hex("#6495ED").unwrap();
    /// assert_eq!(color.a, 1.0);
    /// assert!(LinearRgba::try_from_hex("#12").is_err());
    /// ```
    pub fn try_from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.trim_start_matches('#');
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(ColorError(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| ColorError(hex.to_string()))
        };
        let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
        let a = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::from_srgb(r, g, b).with_alpha(a))
    }

    /// Looks up one of the common color names used in plotting scripts.
    pub fn named(name: &str) -> Option<Self> {
        let srgb = match name.to_ascii_lowercase().as_str() {
            "white" | "w" => (1.0, 1.0, 1.0),
            "black" | "k" => (0.0, 0.0, 0.0),
            "red" | "r" => (1.0, 0.0, 0.0),
            "green" | "g" => (0.0, 0.5, 0.0),
            "blue" | "b" => (0.0, 0.0, 1.0),
            "yellow" | "y" => (1.0, 1.0, 0.0),
            "orange" => (1.0, 0.647, 0.0),
            "gold" => (1.0, 0.843, 0.0),
            "grey" | "gray" => (0.5, 0.5, 0.5),
            "lightgrey" | "lightgray" => (0.827, 0.827, 0.827),
            "tomato" => (1.0, 0.388, 0.278),
            "teal" => (0.0, 0.5, 0.5),
            "violet" => (0.933, 0.51, 0.933),
            _ => return None,
        };
        Some(Self::from_srgb(srgb.0, srgb.1, srgb.2))
    }

    /// Returns a new color with the same RGB components but a different alpha.
    #[inline]
    pub fn with_alpha(&self, a: f32) -> Self {
        Self { a, ..*self }
    }

    /// Linearly interpolates between two colors.
    /// The factor `t` is clamped to `[0.0, 1.0]`.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: start.r + (end.r - start.r) * t,
            g: start.g + (end.g - start.g) * t,
            b: start.b + (end.b - start.b) * t,
            a: start.a + (end.a - start.a) * t,
        }
    }
}

impl Default for LinearRgba {
    /// Mesh gold, the default surface color.
    fn default() -> Self {
        Self::named("gold").unwrap_or(Self::YELLOW)
    }
}

impl FromStr for LinearRgba {
    type Err = ColorError;

    /// Accepts either a hex string or a known color name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('#') {
            Self::try_from_hex(s)
        } else {
            Self::named(s).ok_or_else(|| ColorError(s.to_string()))
        }
    }
}

// --- Helper functions for sRGB conversion ---

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_hex_white_and_black() {
        assert_eq!(LinearRgba::try_from_hex("#FFFFFF"), Ok(LinearRgba::WHITE));
        assert_eq!(LinearRgba::try_from_hex("000000"), Ok(LinearRgba::BLACK));
    }

    #[test]
    fn test_from_hex_with_alpha() {
        let c = LinearRgba::try_from_hex("#FF000080").unwrap();
        assert_relative_eq!(c.r, 1.0);
        assert_relative_eq!(c.a, 128.0 / 255.0);
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(LinearRgba::try_from_hex("#FFF").is_err());
        assert!(LinearRgba::try_from_hex("#GGGGGG").is_err());
        assert!(LinearRgba::try_from_hex("#ÿÿÿ").is_err());
    }

    #[test]
    fn test_from_str_accepts_names_and_hex() {
        assert_eq!("white".parse::<LinearRgba>(), Ok(LinearRgba::WHITE));
        assert_eq!("#0000FF".parse::<LinearRgba>(), Ok(LinearRgba::BLUE));
        assert_eq!(
            "not-a-color".parse::<LinearRgba>(),
            Err(ColorError("not-a-color".to_string()))
        );
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = LinearRgba::lerp(LinearRgba::BLACK, LinearRgba::WHITE, 0.5);
        assert_relative_eq!(mid.r, 0.5);
        assert_relative_eq!(mid.a, 1.0);
    }
}
