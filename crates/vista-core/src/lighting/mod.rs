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

//! The surface lighting model.
//!
//! A [`LightingParams`] value describes a lighting request: an optional
//! [`LightingStyle`] preset plus up to five explicit overrides. Each renderable
//! resolves the request against its own [`SurfaceLighting`] state, so the
//! same request can be forwarded unchanged to every member of a group.

mod style;
mod surface;

pub use style::*;
pub use surface::*;

use crate::math::LinearRgba;

/// A lighting request: preset style plus optional explicit overrides.
///
/// # Examples
///
/// ```
/// use vista_core::lighting::{LightingParams, LightingStyle};
///
/// let params = LightingParams::style(LightingStyle::Metallic).with_specular_power(20.0);
/// assert_eq!(params.style, LightingStyle::Metallic);
/// assert_eq!(params.ambient, None);
/// assert_eq!(params.specular_power, Some(20.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LightingParams {
    /// The preset to start from.
    pub style: LightingStyle,
    /// Ambient fraction of emission, `[0, 1]`.
    pub ambient: Option<f32>,
    /// Emission of diffused light, `[0, 1]`.
    pub diffuse: Option<f32>,
    /// Fraction of reflected light, `[0, 1]`.
    pub specular: Option<f32>,
    /// Precision of reflection, `[1, 100]`.
    pub specular_power: Option<f32>,
    /// Color being reflected by the surface.
    pub specular_color: Option<LinearRgba>,
}

impl LightingParams {
    /// Creates a request for `style` with no overrides.
    pub fn style(style: LightingStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    /// Overrides the ambient coefficient.
    pub fn with_ambient(mut self, ambient: f32) -> Self {
        self.ambient = Some(ambient);
        self
    }

    /// Overrides the diffuse coefficient.
    pub fn with_diffuse(mut self, diffuse: f32) -> Self {
        self.diffuse = Some(diffuse);
        self
    }

    /// Overrides the specular coefficient.
    pub fn with_specular(mut self, specular: f32) -> Self {
        self.specular = Some(specular);
        self
    }

    /// Overrides the specular exponent.
    pub fn with_specular_power(mut self, power: f32) -> Self {
        self.specular_power = Some(power);
        self
    }

    /// Overrides the specular color.
    pub fn with_specular_color(mut self, color: LinearRgba) -> Self {
        self.specular_color = Some(color);
        self
    }

    /// Returns `true` if no explicit override is set.
    pub fn has_no_overrides(&self) -> bool {
        self.ambient.is_none()
            && self.diffuse.is_none()
            && self.specular.is_none()
            && self.specular_power.is_none()
            && self.specular_color.is_none()
    }
}

impl From<LightingStyle> for LightingParams {
    fn from(style: LightingStyle) -> Self {
        Self::style(style)
    }
}
