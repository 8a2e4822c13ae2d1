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

//! The top-level container that props are registered with before rendering.

use log::{debug, warn};
use vista_core::{
    lighting::LightingParams,
    math::{Aabb, Vec3},
};

use crate::{PropHandle, PropInput, SceneSettings};

/// A drawable renderable reached by [`Scene::leaves`].
#[derive(Debug, Clone)]
pub struct Leaf {
    /// Number of compound nodes above the leaf.
    pub depth: usize,
    /// Sum of the origins of those compound nodes.
    pub offset: Vec3,
    /// The renderable itself.
    pub prop: PropHandle,
}

impl Leaf {
    /// The leaf's bounds in world space.
    pub fn world_bounds(&self) -> Option<Aabb> {
        self.prop.bounds().map(|b| b.translated(self.offset))
    }
}

/// An ordered collection of top-level props.
///
/// Compound props such as [`Assembly`](crate::Assembly) are registered as a
/// single node; [`leaves`](Scene::leaves) walks through them to the
/// renderables that are actually drawn.
#[derive(Debug, Default)]
pub struct Scene {
    settings: SceneSettings,
    props: Vec<PropHandle>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new(settings: SceneSettings) -> Self {
        Self {
            settings,
            props: Vec::new(),
        }
    }

    /// The settings this scene was created with.
    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// Registers one prop or a nested collection of props.
    ///
    /// Empty slots are skipped and a prop already in the scene is not added
    /// twice. When the settings name a lighting style, it is applied to each
    /// newly added prop.
    pub fn add(&mut self, items: impl Into<PropInput>) -> &mut Self {
        let input: PropInput = items.into();
        let lighting = self.settings.lighting.map(LightingParams::style);
        for prop in input.flatten().into_iter().flatten() {
            if self.contains(&prop) {
                warn!("Prop {:?} is already in the scene", prop.name());
                continue;
            }
            if let Some(params) = &lighting {
                prop.apply_lighting(params);
            }
            self.props.push(prop);
        }
        debug!("Scene now holds {} props", self.props.len());
        self
    }

    /// Unregisters `prop`. Returns `false` if it was not in the scene.
    pub fn remove(&mut self, prop: &PropHandle) -> bool {
        let before = self.props.len();
        self.props.retain(|p| !p.ptr_eq(prop));
        before != self.props.len()
    }

    /// Returns `true` if `prop` is registered.
    pub fn contains(&self, prop: &PropHandle) -> bool {
        self.props.iter().any(|p| p.ptr_eq(prop))
    }

    /// The top-level props, in registration order.
    pub fn props(&self) -> &[PropHandle] {
        &self.props
    }

    /// Number of top-level props.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// The first top-level prop whose name contains `needle`.
    pub fn find(&self, needle: &str) -> Option<PropHandle> {
        self.props.iter().find(|p| p.name_contains(needle)).cloned()
    }

    /// Union of the bounds of every prop.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::merge_all(self.props.iter().filter_map(PropHandle::bounds))
    }

    /// Every non-compound renderable in draw order, with its nesting depth
    /// and the offset of its enclosing compound nodes.
    pub fn leaves(&self) -> Vec<Leaf> {
        let mut out = Vec::new();
        for prop in &self.props {
            collect_leaves(prop, 0, Vec3::ZERO, &mut out);
        }
        out
    }
}

fn collect_leaves(prop: &PropHandle, depth: usize, offset: Vec3, out: &mut Vec<Leaf>) {
    if prop.is_compound() {
        let inner = offset + prop.origin();
        for part in prop.parts() {
            collect_leaves(&part, depth + 1, inner, out);
        }
    } else {
        out.push(Leaf {
            depth,
            offset,
            prop: prop.clone(),
        });
    }
}
