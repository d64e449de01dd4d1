/*!
# Galaxy 3D Scene Editor

Core of the Galaxy3D scene editor: spatial indexing and cinematic camera
paths over a dynamic set of 3D objects.

The crate has no rendering or UI of its own. A rendering layer feeds object
boxes into a spatial index and queries it for culling and picking; a
playback clock feeds times into camera paths and applies the returned poses.

## Architecture

- **geometry**: AABB, plane and frustum tests
- **scene**: SceneObject, Scene container, SceneIndex trait with an octree and a linear implementation
- **camera**: Catmull-Rom spline math, copy-on-write CameraPath, rig moves, path generators and playback
- **log** / **Engine**: pluggable logging hub used by every module
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod utils;
pub mod geometry;
pub mod scene;
pub mod camera;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logging hub)
    pub use crate::engine::{Engine, DEFAULT_MIN_SEVERITY};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, MemoryLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Utilities
    pub mod utils {
        pub use crate::utils::*;
    }
}

// Re-export math library at crate root
pub use glam;
