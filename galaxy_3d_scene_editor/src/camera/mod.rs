//! Camera paths, rig moves and playback.
//!
//! Paths are immutable values evaluated as pure functions of time. The
//! engine does NOT store or drive cameras: the caller owns paths and
//! players and applies the evaluated poses to its own camera.

mod spline;
mod camera_pose;
mod camera_path;
mod rig;
mod generators;
mod easing;
mod playback;

pub use spline::{catmull_rom, catmull_rom_vec3, segment_index, SegmentLookup, DEFAULT_TENSION};
pub use camera_pose::{CameraPathState, DEFAULT_FOV, WORLD_UP};
pub use camera_path::{
    CameraPath, CameraPathPoint, NewPathPoint, PathPointUpdate,
    validate_path_point, validate_camera_path,
    DEFAULT_PATH_DURATION, DEFAULT_LENGTH_SAMPLES, MIN_FOV, MAX_FOV,
};
pub use rig::{CameraRig, dolly, truck, pedestal, orbit, orbit_3d};
pub use generators::{
    OrbitPathDesc, DollyZoomDesc, FlyThroughDesc,
    generate_orbit_path, generate_dolly_zoom_path, generate_fly_through_path,
};
pub use easing::Easing;
pub use playback::{PathPlayer, PlaybackState};
