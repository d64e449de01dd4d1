/// LinearSceneIndex: brute-force index that tests every object.
///
/// O(n) per query. Suitable for small scenes and as a baseline to check the
/// octree against: both must return the same key sets for the same input.

use rustc_hash::FxHashMap;
use glam::Vec3;
use crate::geometry::{AABB, FrustumPlane, aabb_in_frustum, sphere_intersects_aabb};
use super::scene_index::{IndexStats, SceneIndex};
use super::scene_object::{SceneObject, SceneObjectKey};

/// Flat key → AABB map with exhaustive queries.
#[derive(Debug, Default)]
pub struct LinearSceneIndex {
    boxes: FxHashMap<SceneObjectKey, AABB>,
}

impl LinearSceneIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn filter<F>(&self, test: F) -> Vec<SceneObjectKey>
    where
        F: Fn(&AABB) -> bool,
    {
        self.boxes
            .iter()
            .filter(|(_, aabb)| test(aabb))
            .map(|(key, _)| *key)
            .collect()
    }
}

impl SceneIndex for LinearSceneIndex {
    fn insert(&mut self, key: SceneObjectKey, position: Vec3, half_extents: Vec3) {
        self.boxes
            .insert(key, AABB::from_center_half_extents(position, half_extents));
    }

    fn remove(&mut self, key: SceneObjectKey) {
        self.boxes.remove(&key);
    }

    fn update(&mut self, key: SceneObjectKey, position: Vec3, half_extents: Vec3) {
        self.insert(key, position, half_extents);
    }

    fn query(&self, bounds: &AABB) -> Vec<SceneObjectKey> {
        self.filter(|aabb| aabb.intersects(bounds))
    }

    fn query_radius(&self, center: Vec3, radius: f32) -> Vec<SceneObjectKey> {
        self.filter(|aabb| sphere_intersects_aabb(center, radius, aabb))
    }

    fn query_frustum(&self, planes: &[FrustumPlane]) -> Vec<SceneObjectKey> {
        self.filter(|aabb| aabb_in_frustum(planes, aabb))
    }

    fn clear(&mut self) {
        self.boxes.clear();
    }

    fn rebuild(&mut self, objects: &[SceneObject]) {
        self.clear();
        for object in objects {
            self.insert(object.id, object.position, object.half_extents());
        }
    }

    fn stats(&self) -> IndexStats {
        IndexStats {
            node_count: 1,
            object_count: self.boxes.len(),
            max_depth: 0,
        }
    }
}
