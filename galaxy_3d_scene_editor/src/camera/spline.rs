/// Cardinal Catmull-Rom evaluation and segment lookup.
///
/// The curve between `p1` and `p2` is a cubic Hermite segment whose
/// tangents are derived from the neighbours:
///
/// ```text
/// m1 = (1 - tension) * (p2 - p0) / 2
/// m2 = (1 - tension) * (p3 - p1) / 2
/// ```
///
/// Tension 0 is the standard Catmull-Rom spline; tension 1 flattens the
/// tangents and the segment approaches a straight line.

use glam::Vec3;
use super::camera_path::CameraPathPoint;

/// Tension used by new paths
pub const DEFAULT_TENSION: f32 = 0.5;

/// Cubic Hermite basis `(h00, h10, h01, h11)` at `t`.
///
/// Evaluates to exactly `(1, 0, 0, 0)` at `t = 0` and `(0, 0, 1, 0)` at
/// `t = 1`, so segment endpoints are reproduced bit-for-bit.
#[inline]
fn hermite_basis(t: f32) -> (f32, f32, f32, f32) {
    let t2 = t * t;
    let t3 = t2 * t;
    (
        2.0 * t3 - 3.0 * t2 + 1.0,
        t3 - 2.0 * t2 + t,
        -2.0 * t3 + 3.0 * t2,
        t3 - t2,
    )
}

/// Scalar Catmull-Rom between `p1` (t = 0) and `p2` (t = 1).
pub fn catmull_rom(p0: f32, p1: f32, p2: f32, p3: f32, t: f32, tension: f32) -> f32 {
    let scale = (1.0 - tension) * 0.5;
    let m1 = scale * (p2 - p0);
    let m2 = scale * (p3 - p1);
    let (h00, h10, h01, h11) = hermite_basis(t);
    h00 * p1 + h10 * m1 + h01 * p2 + h11 * m2
}

/// Component-wise Catmull-Rom on vectors.
pub fn catmull_rom_vec3(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32, tension: f32) -> Vec3 {
    Vec3::new(
        catmull_rom(p0.x, p1.x, p2.x, p3.x, t, tension),
        catmull_rom(p0.y, p1.y, p2.y, p3.y, t, tension),
        catmull_rom(p0.z, p1.z, p2.z, p3.z, t, tension),
    )
}

/// Result of locating a time on a point sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLookup {
    /// Index of the first point of the bracketing pair
    pub seg_index: usize,
    /// Position inside the segment, in `[0, 1]`
    pub local_t: f32,
}

impl SegmentLookup {
    const START: SegmentLookup = SegmentLookup { seg_index: 0, local_t: 0.0 };
}

/// Find the pair `[points[i], points[i + 1]]` bracketing `time`.
///
/// Points are expected in ascending time order. Times at or before the
/// first point clamp to `(0, 0)`, at or after the last to `(len - 2, 1)`.
/// Two points sharing the same time give `local_t = 0`. Fewer than two
/// points always yield `(0, 0)`.
pub fn segment_index(points: &[CameraPathPoint], time: f32) -> SegmentLookup {
    let n = points.len();
    if n < 2 {
        return SegmentLookup::START;
    }
    if time <= points[0].time {
        return SegmentLookup::START;
    }
    let end = SegmentLookup { seg_index: n - 2, local_t: 1.0 };
    if time >= points[n - 1].time {
        return end;
    }

    for (i, pair) in points.windows(2).enumerate() {
        let (a, b) = (pair[0].time, pair[1].time);
        if a <= time && time <= b {
            let span = b - a;
            let local_t = if span > 0.0 { (time - a) / span } else { 0.0 };
            return SegmentLookup { seg_index: i, local_t };
        }
    }

    // Only a NaN time gets here
    end
}

#[cfg(test)]
#[path = "spline_tests.rs"]
mod tests;
