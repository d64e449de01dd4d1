//! Scene module
//!
//! Provides scene objects, the scene container and spatial indexing
//! (octree and brute-force) for box, sphere and frustum queries.

mod scene_object;
mod scene;
mod scene_index;
mod spatial_index_config;
mod octree_scene_index;
mod linear_scene_index;

pub use scene_object::{SceneObject, SceneObjectKey, PrimitiveKind};
pub use scene::Scene;
pub use scene_index::{SceneIndex, IndexStats};
pub use spatial_index_config::{
    SpatialIndexConfig,
    DEFAULT_WORLD_BOUNDS, DEFAULT_MAX_DEPTH, DEFAULT_MAX_OBJECTS_PER_NODE,
};
pub use octree_scene_index::OctreeSceneIndex;
pub use linear_scene_index::LinearSceneIndex;
