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

//! Scene-wide settings, loadable from RON.

use serde::{Deserialize, Serialize};
use vista_core::{lighting::LightingStyle, math::LinearRgba};

use crate::{
    mesh::{MAX_RESOLUTION, MIN_RESOLUTION},
    SceneError,
};

/// Scene-wide defaults.
///
/// Missing fields fall back to [`SceneSettings::default`], so a settings
/// file only needs to mention what it changes:
///
/// ```
/// use vista_core::lighting::LightingStyle;
/// use vista_scene::SceneSettings;
///
/// let settings = SceneSettings::from_ron_str("(lighting: Some(plastic))").unwrap();
/// assert_eq!(settings.lighting, Some(LightingStyle::Plastic));
/// assert_eq!(settings.resolution, 24);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Lighting style applied to every prop added to the scene.
    pub lighting: Option<LightingStyle>,
    /// Background color, as a hex string or a color name.
    pub background: String,
    /// Default tessellation for generated shapes, within
    /// [`MIN_RESOLUTION`]..=[`MAX_RESOLUTION`].
    pub resolution: u32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            lighting: None,
            background: "white".to_string(),
            resolution: 24,
        }
    }
}

impl SceneSettings {
    /// Parses settings from RON text.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Settings`] for malformed RON and
    /// [`SceneError::InvalidResolution`] for a resolution the shape builders
    /// would not honor.
    pub fn from_ron_str(text: &str) -> Result<Self, SceneError> {
        let settings: Self = ron::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the values a deserializer cannot.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !(MIN_RESOLUTION..=MAX_RESOLUTION).contains(&self.resolution) {
            return Err(SceneError::InvalidResolution {
                value: self.resolution,
                min: MIN_RESOLUTION,
                max: MAX_RESOLUTION,
            });
        }
        Ok(())
    }

    /// Parses the background color.
    pub fn background_color(&self) -> Result<LinearRgba, SceneError> {
        Ok(self.background.parse::<LinearRgba>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_use_defaults() {
        let settings = SceneSettings::from_ron_str("()").unwrap();
        assert_eq!(settings, SceneSettings::default());
        assert_eq!(settings.background_color().unwrap(), LinearRgba::WHITE);
    }

    #[test]
    fn test_full_settings() {
        let text = r##"(
            lighting: Some(metallic),
            background: "#000000",
            resolution: 8,
        )"##;
        let settings = SceneSettings::from_ron_str(text).unwrap();
        assert_eq!(settings.lighting, Some(LightingStyle::Metallic));
        assert_eq!(settings.background_color().unwrap(), LinearRgba::BLACK);
        assert_eq!(settings.resolution, 8);
    }

    #[test]
    fn test_malformed_settings() {
        let err = SceneSettings::from_ron_str("(resolution: \"many\")").unwrap_err();
        assert!(matches!(err, SceneError::Settings(_)));
    }

    #[test]
    fn test_resolution_out_of_range() {
        let err = SceneSettings::from_ron_str("(resolution: 50000)").unwrap_err();
        assert!(matches!(
            err,
            SceneError::InvalidResolution {
                value: 50000,
                max: MAX_RESOLUTION,
                ..
            }
        ));
        assert!(SceneSettings::from_ron_str("(resolution: 1)").is_err());

        let at_limit = format!("(resolution: {MAX_RESOLUTION})");
        assert!(SceneSettings::from_ron_str(&at_limit).is_ok());
    }

    #[test]
    fn test_bad_background_color() {
        let settings = SceneSettings {
            background: "#12".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            settings.background_color(),
            Err(SceneError::InvalidColor(_))
        ));
    }
}
