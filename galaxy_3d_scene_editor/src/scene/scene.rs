/// Scene: the editor's object collection kept in sync with a spatial index.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. Every mutation
/// that changes an object's bounds is forwarded to the SceneIndex, so
/// queries always reflect the current objects.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use glam::Vec3;
use crate::camera::CameraPathState;
use crate::error::{Error, Result};
use crate::geometry::{AABB, FrustumPlane};
use crate::{engine_debug, engine_err};
use super::octree_scene_index::OctreeSceneIndex;
use super::scene_index::{IndexStats, SceneIndex};
use super::scene_object::{PrimitiveKind, SceneObject, SceneObjectKey};

const SOURCE: &str = "galaxy3d::Scene";

/// A collection of SceneObjects plus the index answering spatial queries on them.
pub struct Scene {
    /// Objects stored in a slot map for O(1) insert/remove
    objects: SlotMap<SceneObjectKey, SceneObject>,
    /// Spatial index (owned; kept in sync on every mutation)
    index: Box<dyn SceneIndex>,
    /// Per-kind counters for auto-generated names ("Box 1", "Box 2", ...)
    name_counters: FxHashMap<PrimitiveKind, u32>,
}

impl Scene {
    /// Create an empty scene backed by a default octree
    pub fn new() -> Self {
        Self::with_index(Box::new(OctreeSceneIndex::default()))
    }

    /// Create an empty scene backed by the given index.
    ///
    /// The index is cleared so that it starts in agreement with the (empty)
    /// object collection.
    pub fn with_index(mut index: Box<dyn SceneIndex>) -> Self {
        index.clear();
        Self {
            objects: SlotMap::with_key(),
            index,
            name_counters: FxHashMap::default(),
        }
    }

    /// Create an object and index it.
    ///
    /// Returns a stable key that remains valid until the object is removed.
    pub fn add_object(&mut self, kind: PrimitiveKind, position: Vec3, scale: Vec3) -> SceneObjectKey {
        let counter = self.name_counters.entry(kind).or_insert(0);
        *counter += 1;
        let name = format!("{} {}", kind.default_name(), counter);

        let key = self.objects.insert_with_key(|key| SceneObject {
            id: key,
            name,
            kind,
            position,
            rotation: Vec3::ZERO,
            scale,
        });
        self.index.insert(key, position, scale.abs() * 0.5);
        key
    }

    /// Remove an object from the scene and the index.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownObject` if the key is not live.
    pub fn remove_object(&mut self, key: SceneObjectKey) -> Result<SceneObject> {
        let object = self
            .objects
            .remove(key)
            .ok_or_else(|| engine_err!(SOURCE, Error::UnknownObject(format!("{:?}", key))))?;
        self.index.remove(key);
        Ok(object)
    }

    /// Move an object.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownObject` if the key is not live.
    pub fn set_position(&mut self, key: SceneObjectKey, position: Vec3) -> Result<()> {
        self.modify(key, |object| object.position = position)
    }

    /// Resize an object.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownObject` if the key is not live.
    pub fn set_scale(&mut self, key: SceneObjectKey, scale: Vec3) -> Result<()> {
        self.modify(key, |object| object.scale = scale)
    }

    /// Rotate an object. Rotation does not affect the bounding box, so the
    /// index is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownObject` if the key is not live.
    pub fn set_rotation(&mut self, key: SceneObjectKey, rotation: Vec3) -> Result<()> {
        let object = self
            .objects
            .get_mut(key)
            .ok_or_else(|| engine_err!(SOURCE, Error::UnknownObject(format!("{:?}", key))))?;
        object.rotation = rotation;
        Ok(())
    }

    /// Rename an object.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownObject` if the key is not live.
    pub fn rename(&mut self, key: SceneObjectKey, name: impl Into<String>) -> Result<()> {
        let object = self
            .objects
            .get_mut(key)
            .ok_or_else(|| engine_err!(SOURCE, Error::UnknownObject(format!("{:?}", key))))?;
        object.name = name.into();
        Ok(())
    }

    fn modify<F>(&mut self, key: SceneObjectKey, edit: F) -> Result<()>
    where
        F: FnOnce(&mut SceneObject),
    {
        let object = self
            .objects
            .get_mut(key)
            .ok_or_else(|| engine_err!(SOURCE, Error::UnknownObject(format!("{:?}", key))))?;
        edit(object);
        self.index.update(key, object.position, object.half_extents());
        Ok(())
    }

    /// Get an object by key
    pub fn object(&self, key: SceneObjectKey) -> Option<&SceneObject> {
        self.objects.get(key)
    }

    /// Iterate over all objects (key, object)
    pub fn objects(&self) -> impl Iterator<Item = (SceneObjectKey, &SceneObject)> {
        self.objects.iter()
    }

    /// Number of objects in the scene
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Objects whose bounding box intersects `bounds`
    pub fn objects_in_box(&self, bounds: &AABB) -> Vec<SceneObjectKey> {
        self.index.query(bounds)
    }

    /// Objects whose bounding box intersects the sphere
    pub fn objects_in_radius(&self, center: Vec3, radius: f32) -> Vec<SceneObjectKey> {
        self.index.query_radius(center, radius)
    }

    /// Objects whose bounding box is (conservatively) in front of every plane
    pub fn objects_in_frustum(&self, planes: &[FrustumPlane]) -> Vec<SceneObjectKey> {
        self.index.query_frustum(planes)
    }

    /// Objects (conservatively) visible from a camera pose.
    ///
    /// # Arguments
    ///
    /// * `pose` - Camera position, look-at and vertical FOV (degrees)
    /// * `aspect` - Viewport width / height
    /// * `near`, `far` - Clip distances
    pub fn visible_objects(
        &self,
        pose: &CameraPathState,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Vec<SceneObjectKey> {
        let frustum = pose.frustum(aspect, near, far);
        self.objects_in_frustum(frustum.planes())
    }

    /// Rebuild the index from the current objects.
    ///
    /// Intended for bulk resynchronization after many external changes.
    pub fn resync_index(&mut self) {
        let objects: Vec<SceneObject> = self.objects.values().cloned().collect();
        self.index.rebuild(&objects);
        engine_debug!(SOURCE, "Resynchronized index with {} objects", objects.len());
    }

    /// Shape of the underlying index
    pub fn index_stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Remove all objects
    pub fn clear(&mut self) {
        self.objects.clear();
        self.index.clear();
        self.name_counters.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
