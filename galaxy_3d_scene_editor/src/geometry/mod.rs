//! Geometry primitives: boxes, spheres and bounding planes.
//!
//! Pure functions with no state. Everything in `scene` and `camera` that
//! reasons about space is built on these.

mod aabb;
mod frustum;

pub use aabb::{AABB, sphere_intersects_aabb};
pub use frustum::{
    Frustum, FrustumPlane, FrustumTest,
    aabb_in_frustum, classify_aabb, plane_distance_to_point,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
