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

//! Resolved per-surface lighting coefficients.

use super::LightingParams;
use crate::math::LinearRgba;

/// The lighting state of a single surface, as handed to the renderer.
///
/// Coefficients follow the classic Phong split: `ambient`, `diffuse` and
/// `specular` are fractions in `[0, 1]`, `specular_power` is the highlight
/// exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceLighting {
    /// Ambient fraction of emission.
    pub ambient: f32,
    /// Fraction of diffused light.
    pub diffuse: f32,
    /// Fraction of reflected light.
    pub specular: f32,
    /// Sharpness of the specular highlight.
    pub specular_power: f32,
    /// Color of the reflected light.
    pub specular_color: LinearRgba,
}

impl Default for SurfaceLighting {
    fn default() -> Self {
        Self {
            ambient: 0.1,
            diffuse: 1.0,
            specular: 0.05,
            specular_power: 5.0,
            specular_color: LinearRgba::WHITE,
        }
    }
}

impl SurfaceLighting {
    /// Applies `params` on top of the current state.
    ///
    /// The style preset, if any, replaces every coefficient first; each
    /// explicit override then replaces its own field.
    pub fn apply(&mut self, params: &LightingParams, surface_color: LinearRgba) {
        if let Some(preset) = params.style.preset(surface_color) {
            *self = preset;
        }
        if let Some(ambient) = params.ambient {
            self.ambient = ambient;
        }
        if let Some(diffuse) = params.diffuse {
            self.diffuse = diffuse;
        }
        if let Some(specular) = params.specular {
            self.specular = specular;
        }
        if let Some(power) = params.specular_power {
            self.specular_power = power;
        }
        if let Some(color) = params.specular_color {
            self.specular_color = color;
        }
    }
}
