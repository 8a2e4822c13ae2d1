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

//! Integration tests for assembly construction, lookup, cloning and lighting.

use std::{cell::RefCell, rc::Rc};

use vista_core::{
    lighting::{LightingParams, LightingStyle},
    math::{Aabb, LinearRgba, Vec3},
};
use vista_scene::{Assembly, Extents, Mesh, PropHandle, Renderable, SceneError, Selector};

/// A renderable that records every lighting request it receives into a shared log.
#[derive(Debug, Clone)]
struct Recorder {
    name: String,
    log: Rc<RefCell<Vec<(String, LightingParams)>>>,
}

impl Renderable for Recorder {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn bounds(&self) -> Option<Aabb> {
        None
    }

    fn apply_lighting(&mut self, params: &LightingParams) {
        self.log.borrow_mut().push((self.name.clone(), *params));
    }

    fn translate(&mut self, _offset: Vec3) {}

    fn clone_prop(&self) -> PropHandle {
        PropHandle::new(self.clone())
    }
}

fn mesh(name: &str) -> PropHandle {
    Mesh::sphere(Vec3::ZERO, 1.0, 6).with_name(name).into_handle()
}

fn names(members: &[Option<PropHandle>]) -> Vec<Option<String>> {
    members
        .iter()
        .map(|m| m.as_ref().and_then(PropHandle::name))
        .collect()
}

#[test]
fn test_unpack_all_preserves_flattened_order() {
    let group = Assembly::new(vec![
        vec![mesh("a"), mesh("b")],
        vec![mesh("c")],
        vec![],
        vec![mesh("d"), mesh("e")],
    ]);

    let all = group.unpack(()).unwrap().into_all().unwrap();
    assert_eq!(
        names(&all),
        ["a", "b", "c", "d", "e"]
            .iter()
            .map(|s| Some(s.to_string()))
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_unpack_index() {
    let a = mesh("a");
    let b = mesh("b");
    let group = Assembly::new(vec![a.clone(), b.clone()]);

    let first = group.unpack(0usize).unwrap().into_one().unwrap();
    let second = group.unpack(Selector::Index(1)).unwrap().into_one().unwrap();
    assert!(first.ptr_eq(&a));
    assert!(second.ptr_eq(&b));
}

#[test]
fn test_unpack_index_out_of_range() {
    let group = Assembly::new(vec![mesh("a"), mesh("b")]);
    let err = group.unpack(2usize).unwrap_err();
    assert!(matches!(err, SceneError::IndexOutOfRange { index: 2, len: 2 }));
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_unpack_name_returns_first_substring_match() {
    let group = Assembly::new(vec![mesh("sphere1"), mesh("foobar"), mesh("foobaz")]);

    let found = group.unpack("foo").unwrap().into_one().unwrap();
    assert_eq!(found.name().as_deref(), Some("foobar"));

    let baz = group.unpack("baz").unwrap().into_one().unwrap();
    assert_eq!(baz.name().as_deref(), Some("foobaz"));
}

#[test]
fn test_unpack_name_miss_is_none() {
    let group = Assembly::new(vec![Some(mesh("sphere1")), None, Some(mesh("foobar"))]);
    let missing = group.unpack("cone").unwrap();
    assert!(missing.into_one().is_none());
}

#[test]
fn test_deep_clone_gives_distinct_members_with_equal_state() {
    let original = Assembly::new(vec![
        Some(mesh("a")),
        None,
        Some(
            Mesh::cube(Vec3::ONE, 2.0)
                .with_color(LinearRgba::RED)
                .with_name("b")
                .into_handle(),
        ),
    ]);

    let clone = original.deep_clone();
    assert_eq!(clone.len(), original.len());

    for (orig, copy) in original.members().iter().zip(clone.members()) {
        match (orig, copy) {
            (Some(orig), Some(copy)) => {
                assert!(!orig.ptr_eq(copy));
                let orig_state = orig.with(|m: &Mesh| m.clone()).unwrap();
                let copy_state = copy.with(|m: &Mesh| m.clone()).unwrap();
                assert_eq!(orig_state, copy_state);
            }
            (None, None) => {}
            _ => panic!("clone changed the slot layout"),
        }
    }
}

#[test]
fn test_deep_clone_does_not_share_state() {
    let original = Assembly::new(vec![mesh("a")]);
    let mut clone = original.deep_clone();

    clone.lighting(&LightingParams::style(LightingStyle::Metallic));

    let orig_surface = original.get(0).unwrap().unwrap().with(|m: &Mesh| m.surface);
    let clone_surface = clone.get(0).unwrap().unwrap().with(|m: &Mesh| m.surface);
    assert_ne!(orig_surface, clone_surface);
}

#[test]
fn test_deep_clone_keeps_extents_name_and_position() {
    let top = Vec3::new(0.0, 0.0, 2.0);
    let axis = Mesh::cylinder(Vec3::ZERO, top, 0.1, 8).into_handle();
    let mut original = Assembly::new(vec![axis.clone(), mesh("ball")]).with_name("pointer");
    original.translate(Vec3::X);

    let clone = original.deep_clone();
    assert_eq!(clone.name(), Some("pointer"));
    assert_eq!(clone.position(), Vec3::X);
    assert_eq!(clone.extents(), original.extents());
    assert_eq!(clone.base(), Some(Vec3::X));
    assert_eq!(clone.top(), Some(top + Vec3::X));

    // Moving the shared first member only shows up in assemblies built afterwards.
    axis.translate(Vec3::Y);
    let rebuilt = original.deep_clone();
    assert_eq!(rebuilt.base(), Some(Vec3::new(1.0, 1.0, 0.0)));
    assert_eq!(original.base(), Some(Vec3::X));
}

#[test]
fn test_deep_clone_is_deep_through_nested_assemblies() {
    let leaf = mesh("leaf");
    let inner = PropHandle::from(
        Assembly::new(vec![leaf.clone(), mesh("other")]).with_name("inner"),
    );
    let outer = Assembly::new(vec![inner.clone(), mesh("top")]);

    let clone = outer.deep_clone();
    let inner_copy = clone.find("inner").unwrap();
    assert!(!inner_copy.ptr_eq(&inner));
    assert_eq!(inner_copy.parts().len(), 2);

    let leaf_copy = inner_copy
        .with(|a: &Assembly| a.find("leaf"))
        .flatten()
        .unwrap();
    assert!(!leaf_copy.ptr_eq(&leaf));
    assert_eq!(
        leaf_copy.with(|m: &Mesh| m.clone()),
        leaf.with(|m: &Mesh| m.clone())
    );

    leaf_copy.translate(Vec3::Z);
    assert_eq!(leaf.with(|m: &Mesh| m.position), Some(Vec3::ZERO));
}

#[test]
fn test_lighting_forwarded_to_every_member_in_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let recorder = |name: &str| {
        PropHandle::new(Recorder {
            name: name.to_string(),
            log: log.clone(),
        })
    };
    let mut group = Assembly::new(vec![
        Some(recorder("first")),
        None,
        Some(recorder("second")),
        Some(recorder("third")),
    ]);

    group.lighting_named("plastic").unwrap();

    let calls = log.borrow();
    let order: Vec<_> = calls.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(order, ["first", "second", "third"]);
    for (_, params) in calls.iter() {
        assert_eq!(params.style, LightingStyle::Plastic);
        assert!(params.has_no_overrides());
    }
}

#[test]
fn test_lighting_reaches_nested_assemblies() {
    let inner = PropHandle::from(Assembly::new(vec![mesh("inner")]));
    let mut outer = Assembly::new(vec![inner.clone(), mesh("outer")]);

    outer.lighting(&LightingParams::default().with_ambient(0.7));

    let inner_mesh = inner
        .with(|a: &Assembly| a.find("inner"))
        .flatten()
        .unwrap();
    assert_eq!(inner_mesh.with(|m: &Mesh| m.surface.ambient), Some(0.7));
    let outer_mesh = outer.find("outer").unwrap();
    assert_eq!(outer_mesh.with(|m: &Mesh| m.surface.ambient), Some(0.7));
}

#[test]
fn test_append_single_goes_last() {
    let mut group = Assembly::new(vec![mesh("a"), mesh("b"), mesh("c")]);
    let n = group.len();

    let extra = mesh("extra");
    group.append(extra.clone());

    assert_eq!(group.len(), n + 1);
    assert!(group.get(n).unwrap().unwrap().ptr_eq(&extra));
    assert!(group.parts().iter().any(|p| p.ptr_eq(&extra)));
}

#[test]
fn test_append_list_is_fluent() {
    let mut group = Assembly::empty();
    group
        .append(vec![mesh("a"), mesh("b")])
        .append(mesh("c"))
        .lighting(&LightingParams::style(LightingStyle::Shiny));
    assert_eq!(group.len(), 3);
    assert_eq!(group.parts().len(), 3);
}

#[test]
fn test_extents_copied_from_first_member() {
    let base = Vec3::new(0.0, 0.0, -1.0);
    let top = Vec3::new(0.0, 0.0, 1.0);
    let group = Assembly::new(vec![
        Mesh::cylinder(base, top, 0.2, 8).into_handle(),
        mesh("knob"),
    ]);
    assert_eq!(group.base(), Some(base));
    assert_eq!(group.top(), Some(top));
    assert_eq!(group.extents(), Some(Extents::new(base, top)));
}

#[test]
fn test_member_shared_with_caller() {
    let shared = mesh("shared");
    let group = Assembly::new(vec![shared.clone()]);

    shared.translate(Vec3::X);
    let seen = group.get(0).unwrap().unwrap().with(|m: &Mesh| m.position);
    assert_eq!(seen, Some(Vec3::X));
}
