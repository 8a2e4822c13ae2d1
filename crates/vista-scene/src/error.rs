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

//! Error type for scene composition.

use thiserror::Error;
use vista_core::{lighting::LightingStyleError, math::ColorError};

/// Errors raised while composing or configuring a scene.
///
/// Looking a member up by name never fails: a miss is reported as `None`.
#[derive(Debug, Error)]
pub enum SceneError {
    /// An integer lookup went past the end of an assembly.
    #[error("index {index} is out of range for an assembly of {len} members")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of members at the time of the lookup.
        len: usize,
    },
    /// A lighting style name could not be parsed.
    #[error(transparent)]
    UnknownLightingStyle(#[from] LightingStyleError),
    /// A color string could not be parsed.
    #[error(transparent)]
    InvalidColor(#[from] ColorError),
    /// A tessellation resolution outside the range the shape builders accept.
    #[error("resolution {value} is outside {min}..={max}")]
    InvalidResolution {
        /// The rejected value.
        value: u32,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// Scene settings were not valid RON.
    #[error("failed to parse scene settings: {0}")]
    Settings(#[from] ron::error::SpannedError),
}
