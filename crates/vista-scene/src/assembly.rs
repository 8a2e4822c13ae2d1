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

//! Groups many renderables into a single compound node.

use std::ops::{Add, AddAssign};

use log::{debug, trace, warn};
use vista_core::{
    lighting::{LightingParams, LightingStyle},
    math::{Aabb, Vec3},
};

use crate::{Extents, PropHandle, PropInput, Renderable, SceneError};

/// Selects which members [`Assembly::unpack`] returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// The whole ordered member list.
    All,
    /// The member at a position.
    Index(usize),
    /// The first member whose name contains the string.
    Name(String),
}

impl From<()> for Selector {
    fn from(_: ()) -> Self {
        Selector::All
    }
}

impl From<usize> for Selector {
    fn from(index: usize) -> Self {
        Selector::Index(index)
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::Name(name.to_string())
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Selector::Name(name)
    }
}

/// The result of [`Assembly::unpack`].
#[derive(Debug, Clone)]
pub enum Unpacked {
    /// Every member slot, in order.
    All(Vec<Option<PropHandle>>),
    /// A single slot: an empty member or a name miss is `None`.
    One(Option<PropHandle>),
}

impl Unpacked {
    /// Returns the single selected member, or `None` for a miss or for [`Unpacked::All`].
    pub fn into_one(self) -> Option<PropHandle> {
        match self {
            Unpacked::One(prop) => prop,
            Unpacked::All(_) => None,
        }
    }

    /// Returns the member list, or `None` for [`Unpacked::One`].
    pub fn into_all(self) -> Option<Vec<Option<PropHandle>>> {
        match self {
            Unpacked::All(members) => Some(members),
            Unpacked::One(_) => None,
        }
    }
}

/// A compound renderable holding an ordered list of member props.
///
/// Members are shared handles: the assembly, a [`Scene`](crate::Scene) and
/// user code may all hold the same prop. Member order is the rendering
/// order. Empty slots keep their index but are never registered as parts.
///
/// # Examples
///
/// ```
/// use vista_core::math::Vec3;
/// use vista_scene::{Assembly, Mesh};
///
/// let mut group = Assembly::new(vec![
///     Mesh::cylinder(Vec3::ZERO, Vec3::Z, 0.1, 8).with_name("axis"),
///     Mesh::sphere(Vec3::Z, 0.3, 8).with_name("knob"),
/// ]);
/// group.append(Mesh::cube(Vec3::ZERO, 0.5).with_name("base"));
///
/// assert_eq!(group.len(), 3);
/// assert_eq!(group.base(), Some(Vec3::ZERO));
/// assert!(group.find("kno").is_some());
/// ```
#[derive(Debug, Default)]
pub struct Assembly {
    name: Option<String>,
    members: Vec<Option<PropHandle>>,
    parts: Vec<PropHandle>,
    extents: Option<Extents>,
    position: Vec3,
}

impl Assembly {
    /// Creates an assembly from one prop or a nested collection of props.
    ///
    /// The input is flattened in order. If the first member exposes a
    /// base/top pair, the assembly adopts it.
    pub fn new(items: impl Into<PropInput>) -> Self {
        let input: PropInput = items.into();
        let members = input.flatten();
        let extents = members.first().and_then(|m| m.as_ref()?.extents());

        let mut assembly = Self {
            extents,
            ..Default::default()
        };
        for prop in members.iter().flatten() {
            assembly.register(prop);
        }
        assembly.members = members;

        debug!(
            "Created assembly with {} members ({} parts)",
            assembly.members.len(),
            assembly.parts.len()
        );
        assembly
    }

    /// Creates an assembly with no members.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets the assembly name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends one prop or a collection of props, registering each.
    ///
    /// When the assembly is edited through its own [`PropHandle`], a prop
    /// that is or contains that handle is skipped with a warning: the
    /// assembly would contain itself.
    pub fn append(&mut self, items: impl Into<PropInput>) -> &mut Self {
        let input: PropInput = items.into();
        let mut added = input.flatten();
        added.retain(|slot| match slot {
            Some(prop) if prop.reaches_borrowed() => {
                warn!("Skipping a prop that contains the assembly it is appended to");
                false
            }
            _ => true,
        });
        for prop in added.iter().flatten() {
            self.register(prop);
        }
        let count = added.len();
        self.members.extend(added);

        debug!(
            "Appended {} members to assembly '{}' (now {})",
            count,
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.members.len()
        );
        self
    }

    /// Returns a new assembly whose members are deep clones of this one's.
    ///
    /// Empty slots stay empty. No handle is shared with the original.
    pub fn deep_clone(&self) -> Self {
        let members: Vec<Option<PropHandle>> = self
            .members
            .iter()
            .map(|m| m.as_ref().map(PropHandle::deep_clone))
            .collect();

        let mut clone = Self::new(members);
        clone.name = self.name.clone();
        clone.position = self.position;
        clone
    }

    /// Looks members up by [`Selector`].
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::IndexOutOfRange`] for an index past the end.
    /// A name that matches nothing is not an error.
    pub fn unpack(&self, selector: impl Into<Selector>) -> Result<Unpacked, SceneError> {
        let selector: Selector = selector.into();
        match selector {
            Selector::All => Ok(Unpacked::All(self.members.clone())),
            Selector::Index(i) => self.get(i).map(Unpacked::One),
            Selector::Name(needle) => Ok(Unpacked::One(self.find(&needle))),
        }
    }

    /// All member slots in order.
    pub fn members(&self) -> &[Option<PropHandle>] {
        &self.members
    }

    /// The member slot at position `index`.
    pub fn get(&self, index: usize) -> Result<Option<PropHandle>, SceneError> {
        self.members
            .get(index)
            .cloned()
            .ok_or(SceneError::IndexOutOfRange {
                index,
                len: self.members.len(),
            })
    }

    /// The first member whose name contains `needle`.
    pub fn find(&self, needle: &str) -> Option<PropHandle> {
        self.members
            .iter()
            .flatten()
            .find(|m| m.name_contains(needle))
            .cloned()
    }

    /// Forwards a lighting request to every member, in member order.
    pub fn lighting(&mut self, params: &LightingParams) -> &mut Self {
        for prop in self.members.iter().flatten() {
            trace!("Forwarding lighting '{}' to {:?}", params.style, prop.name());
            prop.apply_lighting(params);
        }
        self
    }

    /// Parses `style` and forwards it with no overrides.
    pub fn lighting_named(&mut self, style: &str) -> Result<&mut Self, SceneError> {
        let style: LightingStyle = style.parse()?;
        Ok(self.lighting(&LightingParams::style(style)))
    }

    /// Number of member slots, including empty ones.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the assembly has no member slots.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The registered parts, without empty slots or repeats.
    pub fn parts(&self) -> &[PropHandle] {
        &self.parts
    }

    /// The base point adopted from the first member.
    pub fn base(&self) -> Option<Vec3> {
        self.extents().map(|e| e.base)
    }

    /// The top point adopted from the first member.
    pub fn top(&self) -> Option<Vec3> {
        self.extents().map(|e| e.top)
    }

    /// The assembly offset.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    fn register(&mut self, prop: &PropHandle) {
        if self.parts.iter().any(|p| p.ptr_eq(prop)) {
            warn!("Prop {:?} is already a part of this assembly", prop.name());
            return;
        }
        self.parts.push(prop.clone());
    }
}

impl Renderable for Assembly {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn extents(&self) -> Option<Extents> {
        self.extents.map(|e| e.translated(self.position))
    }

    fn bounds(&self) -> Option<Aabb> {
        Aabb::merge_all(self.parts.iter().filter_map(PropHandle::bounds))
            .map(|b| b.translated(self.position))
    }

    fn apply_lighting(&mut self, params: &LightingParams) {
        self.lighting(params);
    }

    fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    fn clone_prop(&self) -> PropHandle {
        PropHandle::new(self.deep_clone())
    }

    fn parts(&self) -> Vec<PropHandle> {
        self.parts.clone()
    }

    fn is_compound(&self) -> bool {
        true
    }

    fn origin(&self) -> Vec3 {
        self.position
    }
}

impl From<Assembly> for PropHandle {
    fn from(assembly: Assembly) -> Self {
        PropHandle::new(assembly)
    }
}

impl<T: Into<PropInput>> AddAssign<T> for Assembly {
    fn add_assign(&mut self, items: T) {
        self.append(items);
    }
}

impl<T: Into<PropInput>> Add<T> for Assembly {
    type Output = Assembly;

    fn add(mut self, items: T) -> Assembly {
        self.append(items);
        self
    }
}
