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

//! The renderable capability trait and the shared handle used to hold props.

use std::{
    any::Any,
    cell::{Ref, RefCell, RefMut},
    fmt, ptr,
    rc::Rc,
};

use vista_core::{
    lighting::LightingParams,
    math::{Aabb, Vec3},
};

/// Helper trait to allow downcasting `dyn Renderable` trait objects to their concrete types.
pub trait AsAny {
    /// Returns a reference to the inner value as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
    /// Returns a mutable reference to the inner value as `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A base/top point pair, typically the two ends of an elongated shape.
///
/// Used to orient annotations along a shape's main axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    /// The start point of the axis.
    pub base: Vec3,
    /// The end point of the axis.
    pub top: Vec3,
}

impl Extents {
    /// Creates a new base/top pair.
    pub fn new(base: Vec3, top: Vec3) -> Self {
        Self { base, top }
    }

    /// Returns the pair shifted by `offset`.
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            base: self.base + offset,
            top: self.top + offset,
        }
    }
}

/// A piece of visible geometry that can be registered in a scene.
///
/// Optional capabilities are exposed as `Option`-returning queries instead of
/// being probed at runtime: a renderable without a name returns `None` from
/// [`name`](Renderable::name), one without an axis returns `None` from
/// [`extents`](Renderable::extents).
pub trait Renderable: AsAny + fmt::Debug + 'static {
    /// The user-facing name, used for substring lookups.
    fn name(&self) -> Option<&str>;

    /// The base/top point pair, in the parent's frame, if the shape has one.
    fn extents(&self) -> Option<Extents> {
        None
    }

    /// Bounds in the parent's frame, or `None` for empty geometry.
    ///
    /// A prop registered directly in a [`Scene`](crate::Scene) has no parent,
    /// so its bounds are in world space. A member of an
    /// [`Assembly`](crate::Assembly) reports bounds relative to the assembly;
    /// [`Scene::leaves`](crate::Scene::leaves) supplies the offset to add.
    fn bounds(&self) -> Option<Aabb>;

    /// Resolves a lighting request against this renderable's surface state.
    fn apply_lighting(&mut self, params: &LightingParams);

    /// Moves the renderable by `offset`.
    fn translate(&mut self, offset: Vec3);

    /// Deep-clones the renderable into a fresh, unshared handle.
    fn clone_prop(&self) -> PropHandle;

    /// Child nodes of a compound renderable.
    fn parts(&self) -> Vec<PropHandle> {
        Vec::new()
    }

    /// Whether this renderable is a compound node whose [`parts`](Renderable::parts)
    /// are drawn in its place.
    fn is_compound(&self) -> bool {
        false
    }

    /// The offset a compound node applies to its parts.
    fn origin(&self) -> Vec3 {
        Vec3::ZERO
    }
}

/// A shared, reference-counted handle to a renderable.
///
/// Cloning the handle is cheap and shares the renderable: the same prop can
/// be held by an [`Assembly`](crate::Assembly) and a [`Scene`](crate::Scene)
/// at once. Use [`deep_clone`](PropHandle::deep_clone) for an independent copy.
///
/// # Panics
///
/// Borrowing follows `RefCell` rules: borrowing a prop while it is mutably
/// borrowed panics. [`Assembly::append`](crate::Assembly::append) refuses
/// props that would make an assembly contain itself, since walking such a
/// prop would re-borrow it.
#[derive(Debug, Clone)]
pub struct PropHandle(Rc<RefCell<dyn Renderable>>);

impl PropHandle {
    /// Wraps a renderable in a new handle.
    pub fn new<R: Renderable>(prop: R) -> Self {
        Self(Rc::new(RefCell::new(prop)))
    }

    /// Immutably borrows the renderable.
    pub fn borrow(&self) -> Ref<'_, dyn Renderable> {
        self.0.borrow()
    }

    /// Mutably borrows the renderable.
    pub fn borrow_mut(&self) -> RefMut<'_, dyn Renderable> {
        self.0.borrow_mut()
    }

    /// Returns `true` if both handles point at the same renderable.
    pub fn ptr_eq(&self, other: &PropHandle) -> bool {
        ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }

    /// Number of handles currently sharing the renderable.
    pub fn share_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Returns `true` if this prop, or any part below it, is mutably
    /// borrowed right now.
    ///
    /// While an assembly is being edited through its handle, that handle is
    /// mutably borrowed, so this detects props that contain the assembly.
    pub fn reaches_borrowed(&self) -> bool {
        match self.0.try_borrow() {
            Ok(prop) => prop.parts().iter().any(PropHandle::reaches_borrowed),
            Err(_) => true,
        }
    }

    /// Returns an owned copy of the renderable's name.
    pub fn name(&self) -> Option<String> {
        self.borrow().name().map(str::to_owned)
    }

    /// Returns `true` if the renderable has a name containing `needle`.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.borrow().name().is_some_and(|name| name.contains(needle))
    }

    /// See [`Renderable::extents`].
    pub fn extents(&self) -> Option<Extents> {
        self.borrow().extents()
    }

    /// See [`Renderable::bounds`].
    pub fn bounds(&self) -> Option<Aabb> {
        self.borrow().bounds()
    }

    /// See [`Renderable::parts`].
    pub fn parts(&self) -> Vec<PropHandle> {
        self.borrow().parts()
    }

    /// See [`Renderable::is_compound`].
    pub fn is_compound(&self) -> bool {
        self.borrow().is_compound()
    }

    /// See [`Renderable::origin`].
    pub fn origin(&self) -> Vec3 {
        self.borrow().origin()
    }

    /// See [`Renderable::apply_lighting`].
    pub fn apply_lighting(&self, params: &LightingParams) {
        self.borrow_mut().apply_lighting(params);
    }

    /// See [`Renderable::translate`].
    pub fn translate(&self, offset: Vec3) {
        self.borrow_mut().translate(offset);
    }

    /// Deep-clones the renderable into a new, unshared handle.
    pub fn deep_clone(&self) -> PropHandle {
        self.borrow().clone_prop()
    }

    /// Runs `f` on the renderable if it is a `T`.
    pub fn with<T: Renderable, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let guard = self.borrow();
        let any: &dyn Any = (*guard).as_any();
        any.downcast_ref::<T>().map(f)
    }

    /// Runs `f` on the renderable mutably if it is a `T`.
    pub fn with_mut<T: Renderable, R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut guard = self.borrow_mut();
        let any: &mut dyn Any = (*guard).as_any_mut();
        any.downcast_mut::<T>().map(f)
    }
}
