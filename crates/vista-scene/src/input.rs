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

//! Nested prop input accepted by assemblies and scenes.

use crate::{Assembly, Mesh, PropHandle};

/// One prop, an empty slot, or an arbitrarily nested list of either.
///
/// Most call sites never name this type: anything convertible into it
/// (a [`Mesh`], a [`PropHandle`], an `Option<PropHandle>`, or a `Vec`/array
/// of those) can be passed where an `impl Into<PropInput>` is expected.
#[derive(Debug, Clone)]
pub enum PropInput {
    /// A single prop; `None` is an empty slot.
    Single(Option<PropHandle>),
    /// A nested collection.
    Many(Vec<PropInput>),
}

impl PropInput {
    /// Flattens the input depth-first, preserving order and empty slots.
    pub fn flatten(self) -> Vec<Option<PropHandle>> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<Option<PropHandle>>) {
        match self {
            PropInput::Single(prop) => out.push(prop),
            PropInput::Many(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

impl From<PropHandle> for PropInput {
    fn from(prop: PropHandle) -> Self {
        PropInput::Single(Some(prop))
    }
}

impl From<&PropHandle> for PropInput {
    fn from(prop: &PropHandle) -> Self {
        PropInput::Single(Some(prop.clone()))
    }
}

impl From<Option<PropHandle>> for PropInput {
    fn from(prop: Option<PropHandle>) -> Self {
        PropInput::Single(prop)
    }
}

impl From<Mesh> for PropInput {
    fn from(mesh: Mesh) -> Self {
        PropInput::Single(Some(PropHandle::new(mesh)))
    }
}

impl From<Assembly> for PropInput {
    fn from(assembly: Assembly) -> Self {
        PropInput::Single(Some(PropHandle::new(assembly)))
    }
}

impl<T: Into<PropInput>> From<Vec<T>> for PropInput {
    fn from(items: Vec<T>) -> Self {
        PropInput::Many(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<PropInput>, const N: usize> From<[T; N]> for PropInput {
    fn from(items: [T; N]) -> Self {
        PropInput::Many(items.into_iter().map(Into::into).collect())
    }
}
