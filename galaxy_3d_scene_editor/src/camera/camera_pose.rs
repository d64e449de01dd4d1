/// An evaluated camera pose.
///
/// Produced fresh by every path evaluation and consumed by whoever drives
/// the real camera. The matrix helpers follow glam's right-handed
/// conventions (Y up, looking down -Z, depth in [0, 1]).

use glam::{Mat4, Vec3};
use crate::geometry::Frustum;
use super::camera_path::CameraPathPoint;

/// FOV of the default pose and of points created without one, in degrees
pub const DEFAULT_FOV: f32 = 60.0;

/// World up axis used by every camera helper
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Camera position, look-at target and vertical FOV (degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPathState {
    pub position: Vec3,
    pub look_at: Vec3,
    pub fov: f32,
}

impl Default for CameraPathState {
    /// Origin looking at the origin with a 60° FOV
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            look_at: Vec3::ZERO,
            fov: DEFAULT_FOV,
        }
    }
}

impl From<&CameraPathPoint> for CameraPathState {
    fn from(point: &CameraPathPoint) -> Self {
        Self {
            position: point.position,
            look_at: point.look_at,
            fov: point.fov,
        }
    }
}

impl CameraPathState {
    /// World → view transform.
    ///
    /// A pose whose look-at equals its position has no view direction; the
    /// resulting matrix is not meaningful.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, WORLD_UP)
    }

    /// Perspective projection from this pose's FOV.
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, near, far)
    }

    /// Combined projection * view.
    pub fn view_projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        self.projection_matrix(aspect, near, far) * self.view_matrix()
    }

    /// Culling volume of this pose.
    pub fn frustum(&self, aspect: f32, near: f32, far: f32) -> Frustum {
        Frustum::from_view_projection(&self.view_projection_matrix(aspect, near, far))
    }
}

#[cfg(test)]
#[path = "camera_pose_tests.rs"]
mod tests;
