/// Cinematic path generators.
///
/// Each generator returns a ready-to-play `CameraPath` whose `duration` is
/// the requested one. Parameters come in descriptor structs so call sites
/// read like a shot description and defaults stay in one place.
///
/// # Example
///
/// ```ignore
/// let mut ids = IdGenerator::new();
/// let path = generate_orbit_path(
///     &OrbitPathDesc { radius: 25.0, num_points: 12, ..Default::default() },
///     &mut ids,
/// );
/// ```

use std::f32::consts::TAU;
use glam::Vec3;
use crate::utils::IdGenerator;
use crate::engine_debug;
use super::camera_path::{CameraPath, CameraPathPoint};
use super::camera_pose::DEFAULT_FOV;
use super::spline::DEFAULT_TENSION;

const SOURCE: &str = "galaxy3d::Generators";

/// Circular orbit around a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPathDesc {
    /// Point every key looks at
    pub target: Vec3,
    /// Horizontal distance from the target
    pub radius: f32,
    /// Camera height above the target
    pub height: f32,
    /// Keys around the circle
    pub num_points: usize,
    /// Seconds per revolution
    pub duration: f32,
    /// FOV of every key, in degrees
    pub fov: f32,
}

impl Default for OrbitPathDesc {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            radius: 10.0,
            height: 5.0,
            num_points: 8,
            duration: 10.0,
            fov: DEFAULT_FOV,
        }
    }
}

/// "Vertigo" shot: FOV changes while the camera moves to keep the subject's
/// apparent size constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DollyZoomDesc {
    /// Camera position at the first key
    pub start_position: Vec3,
    /// Subject; the camera moves along the line through it
    pub target: Vec3,
    pub start_fov: f32,
    pub end_fov: f32,
    pub num_points: usize,
    pub duration: f32,
}

impl Default for DollyZoomDesc {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            start_fov: DEFAULT_FOV,
            end_fov: 30.0,
            num_points: 5,
            duration: 5.0,
        }
    }
}

/// Straight flight with a parabolic vertical arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyThroughDesc {
    pub start_position: Vec3,
    pub end_position: Vec3,
    pub start_look_at: Vec3,
    pub end_look_at: Vec3,
    /// Extra height at mid-flight (0 at both ends)
    pub arc_height: f32,
    pub num_points: usize,
    pub duration: f32,
    pub fov: f32,
}

impl Default for FlyThroughDesc {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, 2.0, 20.0),
            end_position: Vec3::new(0.0, 2.0, -20.0),
            start_look_at: Vec3::new(0.0, 0.0, 0.0),
            end_look_at: Vec3::new(0.0, 0.0, -40.0),
            arc_height: 5.0,
            num_points: 6,
            duration: 8.0,
            fov: DEFAULT_FOV,
        }
    }
}

/// Progress of key `i` out of `n`, from 0 at the first key to 1 at the last.
/// A single key sits at 0.
fn key_progress(i: usize, n: usize) -> f32 {
    if n > 1 {
        i as f32 / (n - 1) as f32
    } else {
        0.0
    }
}

fn assemble(
    name: &str,
    points: impl Iterator<Item = (Vec3, Vec3, f32, f32)>,
    duration: f32,
    looping: bool,
    ids: &mut IdGenerator,
) -> CameraPath {
    let id = ids.next_id("path");
    let points: Vec<CameraPathPoint> = points
        .map(|(position, look_at, fov, time)| CameraPathPoint {
            id: ids.next_id("point"),
            position,
            look_at,
            fov,
            time,
        })
        .collect();
    engine_debug!(SOURCE, "Generated '{}' path with {} points", name, points.len());
    CameraPath::from_parts(id, name, points, duration, looping, DEFAULT_TENSION)
}

/// Evenly spaced keys on a circle at `target.y + height`, all looking at the
/// target. Key `i` sits at angle `2πi/n` and time `duration·i/n`; the path
/// loops.
pub fn generate_orbit_path(desc: &OrbitPathDesc, ids: &mut IdGenerator) -> CameraPath {
    let n = desc.num_points;
    let keys = (0..n).map(|i| {
        let fraction = i as f32 / n as f32;
        let (sin, cos) = (TAU * fraction).sin_cos();
        let position = desc.target + Vec3::new(cos * desc.radius, desc.height, sin * desc.radius);
        (position, desc.target, desc.fov, desc.duration * fraction)
    });
    assemble("Orbit", keys, desc.duration, true, ids)
}

/// FOV interpolates linearly from start to end while the camera distance is
/// rescaled by `tan(start/2) / tan(fov/2)` along the start direction.
pub fn generate_dolly_zoom_path(desc: &DollyZoomDesc, ids: &mut IdGenerator) -> CameraPath {
    let offset = desc.start_position - desc.target;
    let start_distance = offset.length();
    let direction = offset.normalize_or_zero();
    let start_half_tan = (desc.start_fov.to_radians() * 0.5).tan();

    let n = desc.num_points;
    let keys = (0..n).map(|i| {
        let t = key_progress(i, n);
        let fov = desc.start_fov + (desc.end_fov - desc.start_fov) * t;
        let distance = start_distance * start_half_tan / (fov.to_radians() * 0.5).tan();
        let position = desc.target + direction * distance;
        (position, desc.target, fov, desc.duration * t)
    });
    assemble("Dolly Zoom", keys, desc.duration, false, ids)
}

/// Position and look-at each interpolate linearly; the position gets an
/// extra `4·h·t·(1 - t)` on Y, peaking at `arc_height` mid-flight.
pub fn generate_fly_through_path(desc: &FlyThroughDesc, ids: &mut IdGenerator) -> CameraPath {
    let n = desc.num_points;
    let keys = (0..n).map(|i| {
        let t = key_progress(i, n);
        let arc = 4.0 * desc.arc_height * t * (1.0 - t);
        let position = desc.start_position.lerp(desc.end_position, t) + Vec3::Y * arc;
        let look_at = desc.start_look_at.lerp(desc.end_look_at, t);
        (position, look_at, desc.fov, desc.duration * t)
    });
    assemble("Fly Through", keys, desc.duration, false, ids)
}

#[cfg(test)]
#[path = "generators_tests.rs"]
mod tests;
