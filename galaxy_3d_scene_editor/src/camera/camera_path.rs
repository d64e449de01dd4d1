/// CameraPath: timed control points interpolated by a Catmull-Rom spline.
///
/// A path is a value: every edit returns a new `CameraPath` and leaves the
/// receiver untouched, so an editor can keep old snapshots around for
/// undo or hand them to other readers.
///
/// Evaluation is a pure function of `(path, time)`:
/// - no points → default pose (origin, origin, 60°)
/// - one point → that point's pose
/// - two or more → wrap (looping) or clamp the time, find the bracketing
///   segment, then interpolate position, look-at and FOV independently

use glam::Vec3;
use crate::error::{Error, Result};
use crate::utils::IdGenerator;
use crate::engine_bail;
use super::camera_pose::{CameraPathState, DEFAULT_FOV};
use super::spline::{catmull_rom, catmull_rom_vec3, segment_index, SegmentLookup, DEFAULT_TENSION};

/// Playback length of a new path, in seconds
pub const DEFAULT_PATH_DURATION: f32 = 5.0;

/// Sample count used by `CameraPath::length_default`
pub const DEFAULT_LENGTH_SAMPLES: usize = 50;

/// Valid FOV range, in degrees (inclusive)
pub const MIN_FOV: f32 = 1.0;
pub const MAX_FOV: f32 = 179.0;

/// A control point of a camera path.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPathPoint {
    /// Unique within its path
    pub id: String,
    /// Camera position
    pub position: Vec3,
    /// Point the camera looks at
    pub look_at: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Time of this key, in seconds from path start
    pub time: f32,
}

/// A control point before it has been given an id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewPathPoint {
    pub position: Vec3,
    pub look_at: Vec3,
    pub fov: f32,
    pub time: f32,
}

impl NewPathPoint {
    /// Point with the default FOV
    pub fn new(position: Vec3, look_at: Vec3, time: f32) -> Self {
        Self { position, look_at, fov: DEFAULT_FOV, time }
    }

    /// Same point with another FOV
    pub fn with_fov(self, fov: f32) -> Self {
        Self { fov, ..self }
    }
}

impl Default for NewPathPoint {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO, 0.0)
    }
}

/// Partial edit of a control point. `None` fields are left as they are.
///
/// # Example
///
/// ```ignore
/// let edit = PathPointUpdate::default().fov(35.0).time(2.5);
/// let path = path.with_point_updated("point_3", edit);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PathPointUpdate {
    pub position: Option<Vec3>,
    pub look_at: Option<Vec3>,
    pub fov: Option<f32>,
    pub time: Option<f32>,
}

impl PathPointUpdate {
    pub fn position(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    pub fn look_at(mut self, look_at: Vec3) -> Self {
        self.look_at = Some(look_at);
        self
    }

    pub fn fov(mut self, fov: f32) -> Self {
        self.fov = Some(fov);
        self
    }

    pub fn time(mut self, time: f32) -> Self {
        self.time = Some(time);
        self
    }

    fn apply_to(&self, point: &mut CameraPathPoint) {
        if let Some(position) = self.position {
            point.position = position;
        }
        if let Some(look_at) = self.look_at {
            point.look_at = look_at;
        }
        if let Some(fov) = self.fov {
            point.fov = fov;
        }
        if let Some(time) = self.time {
            point.time = time;
        }
    }
}

/// An ordered set of camera keys plus playback settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPath {
    id: String,
    name: String,
    points: Vec<CameraPathPoint>,
    duration: f32,
    looping: bool,
    tension: f32,
}

impl CameraPath {
    /// Empty path with a fresh id, 5 s duration, no looping and tension 0.5.
    pub fn new(name: impl Into<String>, ids: &mut IdGenerator) -> Self {
        Self {
            id: ids.next_id("path"),
            name: name.into(),
            points: Vec::new(),
            duration: DEFAULT_PATH_DURATION,
            looping: false,
            tension: DEFAULT_TENSION,
        }
    }

    /// Assemble a path from existing parts (e.g. a deserialized scene).
    ///
    /// Nothing is checked here; call `ensure_valid` or `validate_camera_path`
    /// to find out whether the result is usable.
    pub fn from_parts(
        id: impl Into<String>,
        name: impl Into<String>,
        points: Vec<CameraPathPoint>,
        duration: f32,
        looping: bool,
        tension: f32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points,
            duration,
            looping,
            tension,
        }
    }

    // ===== GETTERS =====

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Control points, in stored order (not necessarily sorted)
    pub fn points(&self) -> &[CameraPathPoint] {
        &self.points
    }

    /// Control point by id
    pub fn point(&self, point_id: &str) -> Option<&CameraPathPoint> {
        self.points.iter().find(|point| point.id == point_id)
    }

    /// Playback length in seconds (independent of the point times)
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn tension(&self) -> f32 {
        self.tension
    }

    // ===== COPY-ON-WRITE EDITS =====

    /// Append a point with a fresh id. Points are not re-sorted.
    pub fn with_point_added(&self, point: NewPathPoint, ids: &mut IdGenerator) -> Self {
        let mut path = self.clone();
        path.points.push(CameraPathPoint {
            id: ids.next_id("point"),
            position: point.position,
            look_at: point.look_at,
            fov: point.fov,
            time: point.time,
        });
        path
    }

    /// Drop the point with this id. Unknown ids leave the points unchanged.
    pub fn with_point_removed(&self, point_id: &str) -> Self {
        let mut path = self.clone();
        path.points.retain(|point| point.id != point_id);
        path
    }

    /// Merge `update` into the point with this id; other points are untouched.
    pub fn with_point_updated(&self, point_id: &str, update: PathPointUpdate) -> Self {
        let mut path = self.clone();
        if let Some(point) = path.points.iter_mut().find(|point| point.id == point_id) {
            update.apply_to(point);
        }
        path
    }

    /// Points stable-sorted by ascending time.
    pub fn reordered(&self) -> Self {
        let mut path = self.clone();
        path.points.sort_by(|a, b| a.time.total_cmp(&b.time));
        path
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self { name: name.into(), ..self.clone() }
    }

    pub fn with_duration(&self, duration: f32) -> Self {
        Self { duration, ..self.clone() }
    }

    pub fn with_looping(&self, looping: bool) -> Self {
        Self { looping, ..self.clone() }
    }

    pub fn with_tension(&self, tension: f32) -> Self {
        Self { tension, ..self.clone() }
    }

    // ===== EVALUATION =====

    /// Camera pose at `time` seconds.
    ///
    /// Looping paths with a positive duration wrap the time into
    /// `[0, duration)` first (negative times included). The time is then
    /// clamped into the span of the first and last point.
    pub fn evaluate(&self, time: f32) -> CameraPathState {
        let time = if self.looping && self.duration > 0.0 {
            ((time % self.duration) + self.duration) % self.duration
        } else {
            time
        };

        let points = match self.points.as_slice() {
            [] => return CameraPathState::default(),
            [only] => return CameraPathState::from(only),
            points => points,
        };

        let n = points.len();
        let first = points[0].time;
        let last = points[n - 1].time;
        let time = time.max(first).min(last);

        let SegmentLookup { seg_index: i, local_t } = segment_index(points, time);
        let p1 = &points[i];
        let p2 = &points[i + 1];
        let (p0, p3) = if self.looping {
            (&points[(i + n - 1) % n], &points[(i + 2) % n])
        } else {
            (&points[i.saturating_sub(1)], &points[(i + 2).min(n - 1)])
        };

        let tension = self.tension;
        CameraPathState {
            position: catmull_rom_vec3(p0.position, p1.position, p2.position, p3.position, local_t, tension),
            look_at: catmull_rom_vec3(p0.look_at, p1.look_at, p2.look_at, p3.look_at, local_t, tension),
            fov: catmull_rom(p0.fov, p1.fov, p2.fov, p3.fov, local_t, tension),
        }
    }

    /// Time span `(first, last)` of the stored points, if there are any.
    fn time_span(&self) -> Option<(f32, f32)> {
        Some((self.points.first()?.time, self.points.last()?.time))
    }

    /// Arc length of the camera position between the first and last point.
    ///
    /// Sums straight-line distances between `samples + 1` poses returned by
    /// `evaluate` at evenly spaced times, so a looping path whose duration
    /// ends before the last point contributes its return leg. Zero with fewer than two points, zero samples, or when
    /// the first point is not earlier than the last.
    pub fn length(&self, samples: usize) -> f32 {
        if self.points.len() < 2 || samples == 0 {
            return 0.0;
        }
        let Some((first, last)) = self.time_span() else {
            return 0.0;
        };
        if !(first < last) {
            return 0.0;
        }

        let span = last - first;
        let mut previous = self.evaluate(first).position;
        let mut length = 0.0;
        for k in 1..=samples {
            let time = first + span * (k as f32 / samples as f32);
            let position = self.evaluate(time).position;
            length += position.distance(previous);
            previous = position;
        }
        length
    }

    /// `length` with 50 samples
    pub fn length_default(&self) -> f32 {
        self.length(DEFAULT_LENGTH_SAMPLES)
    }

    /// Latest point time (0 for an empty path).
    ///
    /// Distinct from `duration`, which is the separately editable playback
    /// length.
    pub fn points_duration(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points
            .iter()
            .map(|point| point.time)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// `num_samples` poses from `evaluate` at times evenly spaced from the
    /// first to the last point time, both included. A single sample sits at
    /// the first point's time.
    pub fn sample(&self, num_samples: usize) -> Vec<CameraPathState> {
        let Some((first, last)) = self.time_span() else {
            return Vec::new();
        };
        match num_samples {
            0 => Vec::new(),
            1 => vec![self.evaluate(first)],
            n => {
                let span = last - first;
                (0..n)
                    .map(|k| {
                        let time = first + span * (k as f32 / (n - 1) as f32);
                        self.evaluate(time)
                    })
                    .collect()
            }
        }
    }

    // ===== VALIDATION =====

    /// Fail with every validation message if the path is not usable.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCameraPath` listing all problems found by
    /// `validate_camera_path`.
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = validate_camera_path(self);
        if !errors.is_empty() {
            engine_bail!("galaxy3d::CameraPath", Error::InvalidCameraPath(errors));
        }
        Ok(())
    }
}

/// Problems with a single point; empty when the point is valid.
pub fn validate_path_point(point: &CameraPathPoint) -> Vec<String> {
    let mut errors = Vec::new();
    if !(MIN_FOV..=MAX_FOV).contains(&point.fov) {
        errors.push(format!("FOV must be between {} and {} degrees", MIN_FOV, MAX_FOV));
    }
    if !(point.time >= 0.0) {
        errors.push("Time must be non-negative".to_string());
    }
    if point.id.trim().is_empty() {
        errors.push("Point ID is required".to_string());
    }
    errors
}

/// Problems with a path and its points; empty when the path is valid.
///
/// Point problems are prefixed with `"Point <id>: "`. Out-of-order points
/// are reported once, however many inversions there are.
pub fn validate_camera_path(path: &CameraPath) -> Vec<String> {
    let mut errors = Vec::new();
    if path.points.len() < 2 {
        errors.push("Path must have at least 2 points".to_string());
    }
    if !(path.duration > 0.0) {
        errors.push("Duration must be positive".to_string());
    }
    if !(0.0..=1.0).contains(&path.tension) {
        errors.push("Tension must be between 0 and 1".to_string());
    }
    if path.name.trim().is_empty() {
        errors.push("Path name is required".to_string());
    }
    if path.points.windows(2).any(|pair| pair[1].time < pair[0].time) {
        errors.push("Points must be ordered by time".to_string());
    }
    for point in &path.points {
        errors.extend(
            validate_path_point(point)
                .into_iter()
                .map(|error| format!("Point {}: {}", point.id, error)),
        );
    }
    errors
}

#[cfg(test)]
#[path = "camera_path_tests.rs"]
mod tests;
