/// Axis-aligned bounding box and the pure tests built on it.
///
/// Boxes are closed intervals on every axis: touching boxes intersect and
/// equal boxes contain each other. Degenerate (zero-volume) boxes are legal.
/// Nothing here mutates a box in place; every helper returns a new value.

use glam::Vec3;
use crate::scene::SceneObject;

/// Axis-Aligned Bounding Box
///
/// Invariant: `min <= max` component-wise. Constructors that take a center
/// and half-extents use the absolute half-extents to keep it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Box from explicit corners. The caller guarantees `min <= max`.
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box spanning two arbitrary corners (order-independent).
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    /// Box centered on `center` extending `half_extents` along each axis.
    ///
    /// Zero half-extents give a point box. Negative half-extents are taken
    /// by absolute value, so `min <= max` always holds for finite input.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let h = half_extents.abs();
        Self {
            min: center - h,
            max: center + h,
        }
    }

    /// World-space box of a scene object: half-extents are `|scale| / 2`.
    ///
    /// Rotation is ignored; the box is a proxy for the unit primitive scaled
    /// in place.
    pub fn from_scene_object(object: &SceneObject) -> Self {
        Self::from_center_half_extents(object.position, object.half_extents())
    }

    /// Compute the center point of this AABB.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half of the box size along each axis.
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Whether every coordinate is finite (no NaN, no infinity).
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Test if this AABB fully contains another AABB.
    ///
    /// Non-strict on every axis: equal bounds count as contained.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Test if this AABB intersects (overlaps or touches) another AABB.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Compute the AABB of a specific octant (0–7).
    ///
    /// Octant bit layout: bit0 = X, bit1 = Y, bit2 = Z.
    /// - 0 = low, 1 = high for each axis.
    pub fn octant(&self, octant: u8) -> AABB {
        let center = self.center();
        AABB {
            min: Vec3::new(
                if octant & 1 == 0 { self.min.x } else { center.x },
                if octant & 2 == 0 { self.min.y } else { center.y },
                if octant & 4 == 0 { self.min.z } else { center.z },
            ),
            max: Vec3::new(
                if octant & 1 == 0 { center.x } else { self.max.x },
                if octant & 2 == 0 { center.y } else { self.max.y },
                if octant & 4 == 0 { center.z } else { self.max.z },
            ),
        }
    }
}

/// Test a sphere against a box.
///
/// Clamps `center` into the box to find the closest point, then compares the
/// squared distance with `radius²` (inclusive, so a sphere touching a face
/// intersects).
pub fn sphere_intersects_aabb(center: Vec3, radius: f32, aabb: &AABB) -> bool {
    let closest = center.max(aabb.min).min(aabb.max);
    center.distance_squared(closest) <= radius * radius
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
