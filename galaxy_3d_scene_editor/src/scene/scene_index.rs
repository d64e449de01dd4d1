/// Spatial acceleration structures for scene queries.
///
/// A SceneIndex indexes scene objects by their world-space AABB for
/// culling and proximity lookups. The octree is the production
/// implementation; a linear index serves small scenes and as a reference.
///
/// Ownership: the caller (usually a Scene) creates and owns the SceneIndex
/// and drives it on object creation, move and deletion.

use glam::Vec3;
use crate::geometry::{AABB, FrustumPlane};
use super::scene_object::{SceneObject, SceneObjectKey};

/// Snapshot of an index's shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Total number of nodes in the structure
    pub node_count: usize,
    /// Number of indexed objects
    pub object_count: usize,
    /// Deepest node depth actually reached (root = 0)
    pub max_depth: u32,
}

/// Trait for spatial indexing of scene objects.
///
/// Every operation is total: unknown keys, empty indexes and degenerate
/// boxes yield neutral results rather than errors. Query results never
/// contain duplicates; their order is unspecified.
pub trait SceneIndex: Send + Sync {
    /// Index an object by center and half-extents. Re-inserting a known key
    /// replaces its previous box.
    fn insert(&mut self, key: SceneObjectKey, position: Vec3, half_extents: Vec3);

    /// Remove an object. Unknown keys are ignored.
    fn remove(&mut self, key: SceneObjectKey);

    /// Move or resize an object (remove followed by insert).
    fn update(&mut self, key: SceneObjectKey, position: Vec3, half_extents: Vec3);

    /// All objects whose box intersects `bounds`.
    fn query(&self, bounds: &AABB) -> Vec<SceneObjectKey>;

    /// All objects whose box intersects the sphere.
    fn query_radius(&self, center: Vec3, radius: f32) -> Vec<SceneObjectKey>;

    /// All objects whose box is (conservatively) in front of every plane.
    fn query_frustum(&self, planes: &[FrustumPlane]) -> Vec<SceneObjectKey>;

    /// Remove all objects.
    fn clear(&mut self);

    /// Clear, then index every object in order (half-extents `|scale| / 2`).
    fn rebuild(&mut self, objects: &[SceneObject]);

    /// Current shape of the index.
    fn stats(&self) -> IndexStats;
}
