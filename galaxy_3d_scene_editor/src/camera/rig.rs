/// Camera rig moves.
///
/// Pure functions of a camera position and its target. Directions are
/// normalized with `normalize_or_zero`, so a degenerate rig (camera on its
/// target, or looking straight up/down for `truck`) stays where it is
/// instead of turning into NaNs.

use std::f32::consts::PI;
use glam::Vec3;
use super::camera_pose::WORLD_UP;

/// Pitch limits for `orbit_3d`, keeping the camera off the poles
const MIN_PITCH: f32 = 0.01;
const MAX_PITCH: f32 = PI - 0.01;

/// Camera position plus look-at target, moved together by truck/pedestal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraRig {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    fn translated(self, offset: Vec3) -> Self {
        Self {
            position: self.position + offset,
            look_at: self.look_at + offset,
        }
    }
}

/// Move the camera along its view direction. Positive `amount` approaches
/// the target, negative backs away; the target does not move.
pub fn dolly(position: Vec3, look_at: Vec3, amount: f32) -> Vec3 {
    let forward = (look_at - position).normalize_or_zero();
    position + forward * amount
}

/// Slide camera and target sideways (positive = to the camera's right).
pub fn truck(position: Vec3, look_at: Vec3, amount: f32) -> CameraRig {
    let forward = (look_at - position).normalize_or_zero();
    let right = forward.cross(WORLD_UP).normalize_or_zero();
    CameraRig::new(position, look_at).translated(right * amount)
}

/// Raise (positive) or lower camera and target along world Y.
pub fn pedestal(position: Vec3, look_at: Vec3, amount: f32) -> CameraRig {
    CameraRig::new(position, look_at).translated(WORLD_UP * amount)
}

/// Rotate the camera around `target` in the XZ plane.
///
/// Height and distance to the target are preserved.
pub fn orbit(position: Vec3, target: Vec3, angle: f32) -> Vec3 {
    let offset = position - target;
    let (sin, cos) = angle.sin_cos();
    let rotated = Vec3::new(
        offset.x * cos - offset.z * sin,
        offset.y,
        offset.x * sin + offset.z * cos,
    );
    target + rotated
}

/// Rotate the camera around `target` on a sphere.
///
/// Yaw is measured with `atan2(x, z)`, pitch from +Y. The new pitch is
/// clamped to `[0.01, π - 0.01]` so the camera never flips over a pole.
/// A camera sitting exactly on its target is returned unchanged.
pub fn orbit_3d(position: Vec3, target: Vec3, yaw_delta: f32, pitch_delta: f32) -> Vec3 {
    let offset = position - target;
    let distance = offset.length();
    if distance == 0.0 {
        return position;
    }

    let yaw = offset.x.atan2(offset.z) + yaw_delta;
    let pitch = ((offset.y / distance).clamp(-1.0, 1.0).acos() + pitch_delta)
        .clamp(MIN_PITCH, MAX_PITCH);

    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    target
        + Vec3::new(
            distance * sin_pitch * sin_yaw,
            distance * cos_pitch,
            distance * sin_pitch * cos_yaw,
        )
}

#[cfg(test)]
#[path = "rig_tests.rs"]
mod tests;
