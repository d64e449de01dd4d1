/// Configuration for the octree spatial index.

use glam::Vec3;
use crate::error::{Error, Result};
use crate::geometry::AABB;
use crate::engine_bail;

/// World volume covered by a default index: a 2 km cube centered on the origin.
pub const DEFAULT_WORLD_BOUNDS: AABB = AABB::new(Vec3::splat(-1000.0), Vec3::splat(1000.0));

/// Default maximum tree depth (root = 0)
pub const DEFAULT_MAX_DEPTH: u32 = 8;

/// Default leaf capacity before a subdivision is attempted
pub const DEFAULT_MAX_OBJECTS_PER_NODE: usize = 8;

/// Octree spatial index configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialIndexConfig {
    /// Bounds of the root node. Objects outside are still indexed (at the root).
    pub world_bounds: AABB,
    /// Maximum depth a node may be created at
    pub max_depth: u32,
    /// A leaf holding more than this many objects subdivides
    pub max_objects_per_node: usize,
}

impl Default for SpatialIndexConfig {
    fn default() -> Self {
        Self {
            world_bounds: DEFAULT_WORLD_BOUNDS,
            max_depth: DEFAULT_MAX_DEPTH,
            max_objects_per_node: DEFAULT_MAX_OBJECTS_PER_NODE,
        }
    }
}

impl SpatialIndexConfig {
    /// Default configuration over custom world bounds
    pub fn with_world_bounds(world_bounds: AABB) -> Self {
        Self { world_bounds, ..Self::default() }
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the world bounds are non-finite or
    /// inverted, or if `max_objects_per_node` is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.world_bounds.is_finite() {
            engine_bail!(
                "galaxy3d::SpatialIndexConfig",
                Error::InvalidConfig(format!("world bounds must be finite, got {:?}", self.world_bounds))
            );
        }
        if !self.world_bounds.min.cmple(self.world_bounds.max).all() {
            engine_bail!(
                "galaxy3d::SpatialIndexConfig",
                Error::InvalidConfig(format!("world bounds min must not exceed max, got {:?}", self.world_bounds))
            );
        }
        if self.max_objects_per_node == 0 {
            engine_bail!(
                "galaxy3d::SpatialIndexConfig",
                Error::InvalidConfig("max_objects_per_node must be at least 1".to_string())
            );
        }
        Ok(())
    }
}
