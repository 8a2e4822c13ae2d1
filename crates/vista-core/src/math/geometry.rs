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

//! Provides the bounding volume used to report the extent of scene props.

use super::Vec3;

/// Represents an Axis-Aligned Bounding Box (AABB).
///
/// Props report their bounds as an `Aabb`, expressed in the frame of the
/// node that holds them; compound props report the merge of their parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// The corner of the box with the smallest coordinates on all axes.
    pub min: Vec3,
    /// The corner of the box with the largest coordinates on all axes.
    pub max: Vec3,
}

impl Aabb {
    /// Creates a new `Aabb` from two corner points, in any order.
    #[inline]
    pub fn from_min_max(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a degenerate `Aabb` containing a single point.
    #[inline]
    pub fn from_point(point: Vec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Creates an `Aabb` that tightly encloses a given set of points.
    ///
    /// Returns `None` if the input is empty.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = Self::from_point(*iter.next()?);
        Some(iter.fold(first, |acc, p| acc.merged_with_point(*p)))
    }

    /// Merges an iterator of boxes into one. Returns `None` if it is empty.
    pub fn merge_all(boxes: impl IntoIterator<Item = Aabb>) -> Option<Self> {
        boxes.into_iter().reduce(|acc, b| acc.merge(&b))
    }

    /// Calculates the center point of the `Aabb`.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Calculates the full size (width, height, depth) of the `Aabb`.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Checks if a point is contained within or on the boundary of the `Aabb`.
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Creates a new `Aabb` that encompasses both this `Aabb` and another one.
    #[inline]
    pub fn merge(&self, other: &Aabb) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Creates a new `Aabb` that encompasses both this `Aabb` and an additional point.
    #[inline]
    pub fn merged_with_point(&self, point: Vec3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Returns this box shifted by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_min_max_orders_corners() {
        let aabb = Aabb::from_min_max(Vec3::new(4.0, 2.0, 6.0), Vec3::new(1.0, 5.0, 3.0));
        assert_eq!(aabb.min, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.max, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_aabb_from_points() {
        let points = [
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(-2.0, 3.0, 1.0),
            Vec3::new(0.0, 0.0, -4.0),
        ];
        let aabb = Aabb::from_points(&points).unwrap();
        assert_eq!(aabb.min, Vec3::new(-2.0, -1.0, -4.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 3.0, 1.0));
        assert!(Aabb::from_points(&Vec::<Vec3>::new()).is_none());
    }

    #[test]
    fn test_aabb_merge_all() {
        let a = Aabb::from_point(Vec3::ZERO);
        let b = Aabb::from_point(Vec3::ONE);
        let merged = Aabb::merge_all([a, b]).unwrap();
        assert_eq!(merged, Aabb::from_min_max(Vec3::ZERO, Vec3::ONE));
        assert!(Aabb::merge_all(std::iter::empty()).is_none());
    }

    #[test]
    fn test_aabb_translated_and_contains() {
        let aabb = Aabb::from_min_max(Vec3::ZERO, Vec3::ONE).translated(Vec3::X);
        assert!(aabb.contains_point(Vec3::new(1.5, 0.5, 0.5)));
        assert!(!aabb.contains_point(Vec3::new(0.5, 0.5, 0.5)));
        assert_eq!(aabb.center(), Vec3::new(1.5, 0.5, 0.5));
        assert_eq!(aabb.size(), Vec3::ONE);
    }
}
