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

//! Triangle mesh actors and basic shape builders.

use log::trace;
use vista_core::{
    lighting::{LightingParams, SurfaceLighting},
    math::{Aabb, LinearRgba, Vec3, PI, TAU},
};

use crate::{Extents, PropHandle, Renderable};

/// Smallest tessellation the shape builders use.
pub const MIN_RESOLUTION: u32 = 3;

/// Largest tessellation the shape builders use. Higher requests are clamped.
pub const MAX_RESOLUTION: u32 = 512;

/// A triangle mesh with its display state.
///
/// Geometry is stored in local coordinates; `position` places it in the
/// scene. Shapes built along an axis (cylinders, arrows) also record that
/// axis as [`Extents`].
///
/// # Examples
///
/// ```
/// use vista_core::math::{LinearRgba, Vec3};
/// use vista_scene::Mesh;
///
/// let ball = Mesh::sphere(Vec3::ZERO, 1.0, 12)
///     .with_name("ball")
///     .with_color(LinearRgba::RED)
///     .at(Vec3::new(0.0, 0.0, 2.0));
/// assert_eq!(ball.name.as_deref(), Some("ball"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Optional user-facing name.
    pub name: Option<String>,
    /// Vertex positions, in local space.
    pub vertices: Vec<Vec3>,
    /// Triangles as indices into `vertices`.
    pub faces: Vec<[u32; 3]>,
    /// Surface color.
    pub color: LinearRgba,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
    /// Resolved lighting coefficients.
    pub surface: SurfaceLighting,
    /// Offset applied to every vertex.
    pub position: Vec3,
    /// Local-space base/top axis, if the shape has one.
    pub extents: Option<Extents>,
}

impl Mesh {
    /// Creates an unnamed mesh from raw geometry.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<[u32; 3]>) -> Self {
        Self {
            name: None,
            vertices,
            faces,
            color: LinearRgba::default(),
            alpha: 1.0,
            surface: SurfaceLighting::default(),
            position: Vec3::ZERO,
            extents: None,
        }
    }

    /// Builds a UV sphere. `resolution` is the number of stacks, clamped to
    /// [`MIN_RESOLUTION`]..=[`MAX_RESOLUTION`]; twice as many slices are used
    /// around the equator.
    pub fn sphere(center: Vec3, radius: f32, resolution: u32) -> Self {
        let stacks = clamp_resolution(resolution);
        let slices = stacks * 2;

        let mut vertices = Vec::with_capacity((stacks as usize + 1) * slices as usize);
        for i in 0..=stacks {
            let theta = PI * i as f32 / stacks as f32;
            for j in 0..slices {
                let phi = TAU * j as f32 / slices as f32;
                let dir = Vec3::new(theta.sin() * phi.cos(), theta.sin() * phi.sin(), theta.cos());
                vertices.push(center + dir * radius);
            }
        }

        let mut faces = Vec::with_capacity(stacks as usize * slices as usize * 2);
        for i in 0..stacks {
            for j in 0..slices {
                let a = i * slices + j;
                let b = i * slices + (j + 1) % slices;
                let c = (i + 1) * slices + j;
                let d = (i + 1) * slices + (j + 1) % slices;
                faces.push([a, c, b]);
                faces.push([b, c, d]);
            }
        }

        Self::new(vertices, faces)
    }

    /// Builds an axis-aligned cube.
    pub fn cube(center: Vec3, side: f32) -> Self {
        let h = side * 0.5;
        let vertices = (0..8)
            .map(|i| {
                let sx = if i & 1 == 0 { -h } else { h };
                let sy = if i & 2 == 0 { -h } else { h };
                let sz = if i & 4 == 0 { -h } else { h };
                center + Vec3::new(sx, sy, sz)
            })
            .collect();
        let faces = vec![
            [0, 2, 1],
            [1, 2, 3],
            [4, 5, 6],
            [5, 7, 6],
            [0, 1, 4],
            [1, 5, 4],
            [2, 6, 3],
            [3, 6, 7],
            [0, 4, 2],
            [2, 4, 6],
            [1, 3, 5],
            [3, 7, 5],
        ];
        Self::new(vertices, faces)
    }

    /// Builds a capped cylinder between `base` and `top`, and records that
    /// pair as the mesh extents.
    pub fn cylinder(base: Vec3, top: Vec3, radius: f32, resolution: u32) -> Self {
        let res = clamp_resolution(resolution);
        let axis = top - base;
        let u = axis.any_orthonormal();
        let v = axis.normalize().cross(u);

        let mut vertices = ring(base, u, v, radius, res);
        vertices.extend(ring(top, u, v, radius, res));
        let base_cap = vertices.len() as u32;
        vertices.push(base);
        vertices.push(top);
        let top_cap = base_cap + 1;

        let mut faces = Vec::with_capacity(res as usize * 4);
        for j in 0..res {
            let k = (j + 1) % res;
            faces.push([j, k, res + j]);
            faces.push([k, res + k, res + j]);
            faces.push([base_cap, k, j]);
            faces.push([top_cap, res + j, res + k]);
        }

        let mut mesh = Self::new(vertices, faces);
        mesh.extents = Some(Extents::new(base, top));
        mesh
    }

    /// Builds an arrow from `start` to `end`: a thin shaft capped by a cone.
    /// The arrow's extents are `(start, end)`.
    pub fn arrow(start: Vec3, end: Vec3, resolution: u32) -> Self {
        let res = clamp_resolution(resolution);
        let axis = end - start;
        let length = axis.length();
        let u = axis.any_orthonormal();
        let v = axis.normalize().cross(u);
        let shaft_radius = length * 0.02;
        let neck = start + axis * 0.8;

        let mut vertices = ring(start, u, v, shaft_radius, res);
        vertices.extend(ring(neck, u, v, shaft_radius, res));
        vertices.extend(ring(neck, u, v, shaft_radius * 2.5, res));
        let tail = vertices.len() as u32;
        vertices.push(start);
        vertices.push(end);
        let tip = tail + 1;

        let mut faces = Vec::with_capacity(res as usize * 5);
        for j in 0..res {
            let k = (j + 1) % res;
            faces.push([j, k, res + j]);
            faces.push([k, res + k, res + j]);
            faces.push([tail, k, j]);
            faces.push([res + j, res + k, 2 * res + j]);
            faces.push([2 * res + j, 2 * res + k, tip]);
        }

        let mut mesh = Self::new(vertices, faces);
        mesh.extents = Some(Extents::new(start, end));
        mesh
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the surface color.
    pub fn with_color(mut self, color: LinearRgba) -> Self {
        self.color = color;
        self
    }

    /// Sets the opacity, clamped to `[0, 1]`.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Places the mesh at `position`.
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Number of vertices.
    pub fn num_points(&self) -> usize {
        self.vertices.len()
    }

    /// World-space position of vertex `i`.
    pub fn point(&self, i: usize) -> Option<Vec3> {
        self.vertices.get(i).map(|p| *p + self.position)
    }

    /// Wraps the mesh in a new shared handle.
    pub fn into_handle(self) -> PropHandle {
        PropHandle::new(self)
    }
}

impl Renderable for Mesh {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn extents(&self) -> Option<Extents> {
        self.extents.map(|e| e.translated(self.position))
    }

    fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices).map(|b| b.translated(self.position))
    }

    fn apply_lighting(&mut self, params: &LightingParams) {
        trace!(
            "Lighting '{}' with style '{}'",
            self.name.as_deref().unwrap_or("<unnamed>"),
            params.style
        );
        self.surface.apply(params, self.color);
    }

    fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    fn clone_prop(&self) -> PropHandle {
        PropHandle::new(self.clone())
    }
}

impl From<Mesh> for PropHandle {
    fn from(mesh: Mesh) -> Self {
        mesh.into_handle()
    }
}

/// Keeps vertex indices well inside `u32` for every builder.
fn clamp_resolution(resolution: u32) -> u32 {
    resolution.clamp(MIN_RESOLUTION, MAX_RESOLUTION)
}

fn ring(center: Vec3, u: Vec3, v: Vec3, radius: f32, res: u32) -> Vec<Vec3> {
    (0..res)
        .map(|j| {
            let phi = TAU * j as f32 / res as f32;
            center + (u * phi.cos() + v * phi.sin()) * radius
        })
        .collect()
}
