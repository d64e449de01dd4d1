/// Bounding planes for visibility culling.
///
/// Each plane is a unit normal plus a signed distance:
/// - The normal points inward (toward the visible volume)
/// - A point P is in front of the plane if dot(normal, P) + distance >= 0
/// - A point is inside the frustum if it is in front of every plane
///
/// Box tests use the "positive vertex" trick and are conservative: a box lying
/// outside the frustum on a diagonal may still be reported as visible. That is
/// acceptable for culling, not for exact containment.

use glam::{Mat4, Vec3, Vec4};
use super::aabb::AABB;

/// Result of a 3-way plane set / AABB classification.
///
/// Used by the octree for hierarchical culling:
/// - `Outside` → skip the entire subtree
/// - `Inside` → collect all objects without further testing
/// - `Partial` → test individual objects and recurse into children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// AABB is entirely outside at least one plane
    Outside,
    /// AABB is entirely in front of every plane
    Inside,
    /// AABB straddles at least one plane
    Partial,
}

/// Frustum plane indices (for frustums built by `Frustum::from_view_projection`)
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// A bounding plane: `dot(normal, p) + distance = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumPlane {
    /// Inward-facing normal
    pub normal: Vec3,
    /// Signed offset along the normal
    pub distance: f32,
}

impl FrustumPlane {
    /// Create a plane from a normal and signed distance (not renormalized).
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Plane from (A, B, C, D) coefficients, normalized so that (A, B, C) is unit length.
    pub fn from_coefficients(plane: Vec4) -> Self {
        let normal = plane.truncate();
        let len = normal.length();
        if len > 0.0 {
            Self::new(normal / len, plane.w / len)
        } else {
            Self::new(normal, plane.w)
        }
    }

    /// Corner of `aabb` most aligned with the normal.
    fn positive_vertex(&self, aabb: &AABB) -> Vec3 {
        Vec3::new(
            if self.normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
            if self.normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
            if self.normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
        )
    }

    /// Corner of `aabb` least aligned with the normal.
    fn negative_vertex(&self, aabb: &AABB) -> Vec3 {
        Vec3::new(
            if self.normal.x >= 0.0 { aabb.min.x } else { aabb.max.x },
            if self.normal.y >= 0.0 { aabb.min.y } else { aabb.max.y },
            if self.normal.z >= 0.0 { aabb.min.z } else { aabb.max.z },
        )
    }
}

/// Signed distance from a plane to a point.
///
/// Positive means the point is in front of (inside, for an inward-facing
/// normal) the plane.
pub fn plane_distance_to_point(plane: &FrustumPlane, point: Vec3) -> f32 {
    plane.normal.dot(point) + plane.distance
}

/// Conservative frustum/AABB test over an arbitrary set of planes.
///
/// For each plane, the positive vertex is tested; if it lies behind any plane
/// the whole box is outside. Returns `true` if the box is (potentially)
/// visible. An empty plane set accepts everything.
pub fn aabb_in_frustum(planes: &[FrustumPlane], aabb: &AABB) -> bool {
    planes
        .iter()
        .all(|plane| plane_distance_to_point(plane, plane.positive_vertex(aabb)) >= 0.0)
}

/// Classify an AABB against a plane set (3-way test).
///
/// - If the p-vertex is behind any plane → `Outside` (early out)
/// - If the n-vertex is behind any plane → at least `Partial`
/// - If all n-vertices are in front of all planes → `Inside`
pub fn classify_aabb(planes: &[FrustumPlane], aabb: &AABB) -> FrustumTest {
    let mut all_inside = true;

    for plane in planes {
        if plane_distance_to_point(plane, plane.positive_vertex(aabb)) < 0.0 {
            return FrustumTest::Outside;
        }
        if plane_distance_to_point(plane, plane.negative_vertex(aabb)) < 0.0 {
            all_inside = false;
        }
    }

    if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
}

/// Six frustum planes extracted from a camera.
///
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [FrustumPlane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method, assuming a [0, 1] clip-space depth
    /// range (glam's `perspective_rh` / `orthographic_rh`).
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();

        let row = |r: usize| Vec4::new(m[0][r], m[1][r], m[2][r], m[3][r]);
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        Self {
            planes: [
                FrustumPlane::from_coefficients(r3 + r0), // left
                FrustumPlane::from_coefficients(r3 - r0), // right
                FrustumPlane::from_coefficients(r3 + r1), // bottom
                FrustumPlane::from_coefficients(r3 - r1), // top
                FrustumPlane::from_coefficients(r2),      // near (z >= 0)
                FrustumPlane::from_coefficients(r3 - r2), // far
            ],
        }
    }

    /// Planes as a slice, ready for `SceneIndex::query_frustum`.
    pub fn planes(&self) -> &[FrustumPlane] {
        &self.planes
    }

    /// Whether the point is in front of every plane.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane_distance_to_point(plane, point) >= 0.0)
    }

    /// Conservative AABB visibility test.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        aabb_in_frustum(&self.planes, aabb)
    }

    /// 3-way AABB classification.
    pub fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        classify_aabb(&self.planes, aabb)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
