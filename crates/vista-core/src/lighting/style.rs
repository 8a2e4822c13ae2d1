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

//! Named lighting presets.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::SurfaceLighting;
use crate::math::LinearRgba;

/// A named lighting preset.
///
/// `None` means "no preset": only the explicit overrides carried by a
/// [`LightingParams`](super::LightingParams) are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightingStyle {
    /// No preset; explicit overrides only.
    #[default]
    None,
    /// The stock look of a freshly created mesh.
    Default,
    /// Strong, tight specular highlights tinted by the surface color.
    Metallic,
    /// Soft, broad highlights.
    Plastic,
    /// Bright highlights with a moderate spread.
    Shiny,
    /// Very sharp highlights on a mostly diffuse surface.
    Glossy,
    /// Flat, mostly ambient shading.
    Ambient,
}

/// Returned when a string does not name a known [`LightingStyle`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown lighting style '{0}', expected one of: default, metallic, plastic, shiny, glossy, ambient")]
pub struct LightingStyleError(pub String);

impl LightingStyle {
    /// Every style that carries a preset.
    pub const PRESETS: [LightingStyle; 6] = [
        LightingStyle::Default,
        LightingStyle::Metallic,
        LightingStyle::Plastic,
        LightingStyle::Shiny,
        LightingStyle::Glossy,
        LightingStyle::Ambient,
    ];

    /// Returns the lowercase name of the style, `""` for [`LightingStyle::None`].
    pub fn as_str(&self) -> &'static str {
        match self {
            LightingStyle::None => "",
            LightingStyle::Default => "default",
            LightingStyle::Metallic => "metallic",
            LightingStyle::Plastic => "plastic",
            LightingStyle::Shiny => "shiny",
            LightingStyle::Glossy => "glossy",
            LightingStyle::Ambient => "ambient",
        }
    }

    /// Resolves the preset surface coefficients for this style.
    ///
    /// Several presets tint their highlights with `surface_color`.
    /// Returns `None` for [`LightingStyle::None`].
    pub fn preset(&self, surface_color: LinearRgba) -> Option<SurfaceLighting> {
        let near_white = LinearRgba::rgb(1.0, 1.0, 0.99);
        let (ambient, diffuse, specular, specular_power, specular_color) = match self {
            LightingStyle::None => return None,
            LightingStyle::Default => (0.1, 1.0, 0.05, 5.0, surface_color),
            LightingStyle::Metallic => (0.1, 0.3, 1.0, 10.0, surface_color),
            LightingStyle::Plastic => (0.3, 0.4, 0.3, 5.0, surface_color),
            LightingStyle::Shiny => (0.2, 0.6, 0.8, 50.0, surface_color),
            LightingStyle::Glossy => (0.1, 0.7, 0.9, 90.0, near_white),
            LightingStyle::Ambient => (0.8, 0.1, 0.0, 0.0, LinearRgba::WHITE),
        };
        Some(SurfaceLighting {
            ambient,
            diffuse,
            specular,
            specular_power,
            specular_color,
        })
    }
}

impl fmt::Display for LightingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LightingStyle {
    type Err = LightingStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(LightingStyle::None),
            "default" => Ok(LightingStyle::Default),
            "metallic" => Ok(LightingStyle::Metallic),
            "plastic" => Ok(LightingStyle::Plastic),
            "shiny" => Ok(LightingStyle::Shiny),
            "glossy" => Ok(LightingStyle::Glossy),
            "ambient" => Ok(LightingStyle::Ambient),
            _ => Err(LightingStyleError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for style in LightingStyle::PRESETS {
            assert_eq!(style.as_str().parse::<LightingStyle>(), Ok(style));
        }
        assert_eq!("".parse::<LightingStyle>(), Ok(LightingStyle::None));
        assert_eq!("  Plastic ".parse::<LightingStyle>(), Ok(LightingStyle::Plastic));
    }

    #[test]
    fn test_parse_rejects_unknown_style() {
        let err = "velvet".parse::<LightingStyle>().unwrap_err();
        assert_eq!(err, LightingStyleError("velvet".to_string()));
        assert!(err.to_string().contains("velvet"));
    }

    #[test]
    fn test_presets_tint_with_surface_color() {
        let red = LinearRgba::RED;
        let metallic = LightingStyle::Metallic.preset(red).unwrap();
        assert_eq!(metallic.specular_color, red);
        assert_eq!(metallic.specular_power, 10.0);

        let glossy = LightingStyle::Glossy.preset(red).unwrap();
        assert_eq!(glossy.specular_color, LinearRgba::rgb(1.0, 1.0, 0.99));

        assert!(LightingStyle::None.preset(red).is_none());
    }

    #[test]
    fn test_style_deserializes_from_lowercase() {
        let style: LightingStyle = ron::from_str("shiny").unwrap();
        assert_eq!(style, LightingStyle::Shiny);
    }
}
