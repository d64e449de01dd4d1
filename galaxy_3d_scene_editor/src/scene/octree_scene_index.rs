/// Dynamic octree spatial index for culling and picking.
///
/// Uses **single-node placement**: each object is stored in exactly one
/// node, the deepest node whose bounds fully contain the object's AABB.
/// If the object straddles a child boundary, it stays in the parent.
///
/// Benefits:
/// - No duplication → no HashSet needed for query results
/// - Simple insert/remove/query logic
/// - O(depth) insert and remove per object
///
/// Unlike a pre-allocated static octree, nodes are created on demand: a leaf
/// subdivides into 8 octants once it holds more than `max_objects_per_node`
/// objects (and `depth < max_depth`), and a parent collapses back into a leaf
/// once its subtree is flat and small enough again.
///
/// A side map (key → AABB) gives O(1) box lookup for remove/update and is
/// always in agreement with the tree on membership.

use rustc_hash::FxHashMap;
use glam::Vec3;
use crate::error::Result;
use crate::geometry::{
    AABB, FrustumPlane, FrustumTest,
    aabb_in_frustum, classify_aabb, sphere_intersects_aabb,
};
use crate::{engine_debug, engine_trace, engine_warn};
use super::scene_index::{IndexStats, SceneIndex};
use super::scene_object::{SceneObject, SceneObjectKey};
use super::spatial_index_config::{SpatialIndexConfig, DEFAULT_WORLD_BOUNDS};

const SOURCE: &str = "galaxy3d::Octree";

/// Restructuring limits, copied out of the config so nodes can be mutated
/// while the side map is borrowed.
#[derive(Debug, Clone, Copy)]
struct Limits {
    max_depth: u32,
    max_objects: usize,
}

/// A single node in the octree.
struct OctreeNode {
    /// World-space bounds of this node
    bounds: AABB,
    /// Objects stored in this node. For an internal node: only objects that
    /// don't fit in any child.
    objects: Vec<SceneObjectKey>,
    /// The 8 octants, or `None` for a leaf
    children: Option<Box<[OctreeNode; 8]>>,
    /// Root = 0
    depth: u32,
}

impl OctreeNode {
    fn leaf(bounds: AABB, depth: u32) -> Self {
        Self {
            bounds,
            objects: Vec::new(),
            children: None,
            depth,
        }
    }

    /// Place an object in the deepest node that fully contains it.
    fn insert(
        &mut self,
        key: SceneObjectKey,
        aabb: &AABB,
        boxes: &FxHashMap<SceneObjectKey, AABB>,
        limits: Limits,
    ) {
        if let Some(children) = self.children.as_mut() {
            match children.iter_mut().find(|child| child.bounds.contains(aabb)) {
                Some(child) => child.insert(key, aabb, boxes, limits),
                // Straddles a boundary, stays in this node
                None => self.objects.push(key),
            }
            return;
        }

        self.objects.push(key);
        if self.objects.len() > limits.max_objects && self.depth < limits.max_depth {
            self.subdivide(boxes, limits);
        }
    }

    /// Split a leaf into 8 octants and push its objects down where they fit.
    fn subdivide(&mut self, boxes: &FxHashMap<SceneObjectKey, AABB>, limits: Limits) {
        let bounds = self.bounds;
        let depth = self.depth + 1;
        let mut children: Box<[OctreeNode; 8]> =
            Box::new(std::array::from_fn(|octant| OctreeNode::leaf(bounds.octant(octant as u8), depth)));

        let mut stragglers = Vec::new();
        for key in std::mem::take(&mut self.objects) {
            let Some(aabb) = boxes.get(&key) else {
                stragglers.push(key);
                continue;
            };
            match children.iter_mut().find(|child| child.bounds.contains(aabb)) {
                Some(child) => child.insert(key, aabb, boxes, limits),
                None => stragglers.push(key),
            }
        }

        engine_trace!(
            SOURCE,
            "Subdivided node at depth {} ({} objects kept in parent)",
            self.depth,
            stragglers.len()
        );

        self.objects = stragglers;
        self.children = Some(children);
    }

    /// Remove an object, descending only into children that can hold it.
    ///
    /// Every node on the path back up tries to collapse after a successful
    /// removal (the recursion unwinds bottom-up, so deeper nodes go first).
    fn remove(&mut self, key: SceneObjectKey, aabb: &AABB, limits: Limits) -> bool {
        let removed = if let Some(pos) = self.objects.iter().position(|&k| k == key) {
            self.objects.swap_remove(pos);
            true
        } else if let Some(children) = self.children.as_mut() {
            children
                .iter_mut()
                .any(|child| child.bounds.intersects(aabb) && child.remove(key, aabb, limits))
        } else {
            false
        };

        if removed {
            self.try_collapse(limits);
        }
        removed
    }

    /// Fold the children back into this node if none of them is subdivided
    /// and the combined object count fits in a single leaf.
    fn try_collapse(&mut self, limits: Limits) -> bool {
        let Some(children) = self.children.as_ref() else {
            return false;
        };
        if children.iter().any(|child| child.children.is_some()) {
            return false;
        }
        let total = self.objects.len()
            + children.iter().map(|child| child.objects.len()).sum::<usize>();
        if total > limits.max_objects {
            return false;
        }

        if let Some(children) = self.children.take() {
            let children: [OctreeNode; 8] = *children;
            for child in children {
                self.objects.extend(child.objects);
            }
        }

        engine_trace!(SOURCE, "Collapsed node at depth {} ({} objects)", self.depth, total);
        true
    }

    /// Depth-first collection with one predicate for both node pruning and
    /// per-object inclusion. The node's own objects are always tested (the
    /// root may hold objects outside its bounds); children are pruned.
    fn collect<F>(
        &self,
        boxes: &FxHashMap<SceneObjectKey, AABB>,
        test: &F,
        results: &mut Vec<SceneObjectKey>,
    ) where
        F: Fn(&AABB) -> bool,
    {
        for key in &self.objects {
            if boxes.get(key).is_some_and(|aabb| test(aabb)) {
                results.push(*key);
            }
        }

        if let Some(children) = &self.children {
            for child in children.iter() {
                if test(&child.bounds) {
                    child.collect(boxes, test, results);
                }
            }
        }
    }

    /// Frustum collection with 3-way classification of child nodes:
    /// - `Outside` → skip entire subtree
    /// - `Inside` → collect all objects from subtree without further testing
    /// - `Partial` → test objects individually, recurse into children
    fn collect_frustum(
        &self,
        boxes: &FxHashMap<SceneObjectKey, AABB>,
        planes: &[FrustumPlane],
        results: &mut Vec<SceneObjectKey>,
    ) {
        for key in &self.objects {
            if boxes.get(key).is_some_and(|aabb| aabb_in_frustum(planes, aabb)) {
                results.push(*key);
            }
        }

        if let Some(children) = &self.children {
            for child in children.iter() {
                match classify_aabb(planes, &child.bounds) {
                    FrustumTest::Outside => {}
                    // Objects below the root are contained in their node's bounds
                    FrustumTest::Inside => child.collect_all(results),
                    FrustumTest::Partial => child.collect_frustum(boxes, planes, results),
                }
            }
        }
    }

    /// Collect all objects from a node and its entire subtree.
    fn collect_all(&self, results: &mut Vec<SceneObjectKey>) {
        results.extend_from_slice(&self.objects);
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect_all(results);
            }
        }
    }

    fn accumulate_stats(&self, stats: &mut IndexStats) {
        stats.node_count += 1;
        stats.max_depth = stats.max_depth.max(self.depth);
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.accumulate_stats(stats);
            }
        }
    }
}

/// Dynamic octree spatial index.
///
/// Constructed with world bounds (or a full `SpatialIndexConfig`). Objects
/// outside the world bounds are still accepted: no child can contain them,
/// so they stay at the root and remain queryable.
///
/// Not designed for concurrent mutation; confine it to one update loop or
/// wrap it in a lock.
pub struct OctreeSceneIndex {
    /// Root node (depth 0, bounds = world bounds)
    root: OctreeNode,
    /// Bounds and restructuring limits
    config: SpatialIndexConfig,
    /// Reverse lookup: object key → world AABB.
    /// Needed for O(1) remove without a full tree search.
    boxes: FxHashMap<SceneObjectKey, AABB>,
}

impl OctreeSceneIndex {
    /// Create an empty octree over `world_bounds` with default limits
    /// (max depth 8, 8 objects per node).
    pub fn new(world_bounds: AABB) -> Self {
        Self::from_config(SpatialIndexConfig::with_world_bounds(world_bounds))
    }

    /// Create an empty octree from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration does not validate.
    pub fn with_config(config: SpatialIndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: SpatialIndexConfig) -> Self {
        Self {
            root: OctreeNode::leaf(config.world_bounds, 0),
            config,
            boxes: FxHashMap::default(),
        }
    }

    /// Configuration this index was built with
    pub fn config(&self) -> &SpatialIndexConfig {
        &self.config
    }

    /// Whether the key is indexed
    pub fn contains(&self, key: SceneObjectKey) -> bool {
        self.boxes.contains_key(&key)
    }

    /// Last box recorded for the key
    pub fn aabb(&self, key: SceneObjectKey) -> Option<AABB> {
        self.boxes.get(&key).copied()
    }

    /// Number of indexed objects
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether no object is indexed
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    fn limits(&self) -> Limits {
        Limits {
            max_depth: self.config.max_depth,
            max_objects: self.config.max_objects_per_node,
        }
    }

    fn remove_key(&mut self, key: SceneObjectKey) -> bool {
        let Some(aabb) = self.boxes.remove(&key) else {
            return false;
        };
        let found = self.root.remove(key, &aabb, self.limits());
        debug_assert!(found, "side map and tree disagree on {:?}", key);
        found
    }
}

impl Default for OctreeSceneIndex {
    fn default() -> Self {
        Self::new(DEFAULT_WORLD_BOUNDS)
    }
}

// ===== SCENE INDEX TRAIT =====

impl SceneIndex for OctreeSceneIndex {
    fn insert(&mut self, key: SceneObjectKey, position: Vec3, half_extents: Vec3) {
        let aabb = AABB::from_center_half_extents(position, half_extents);
        if !aabb.is_finite() {
            engine_warn!(
                SOURCE,
                "Indexing {:?} with non-finite bounds {:?}; containment tests on it are unreliable",
                key,
                aabb
            );
        }

        if self.boxes.contains_key(&key) {
            self.remove_key(key);
        }

        self.boxes.insert(key, aabb);
        let limits = self.limits();
        self.root.insert(key, &aabb, &self.boxes, limits);
    }

    fn remove(&mut self, key: SceneObjectKey) {
        self.remove_key(key);
    }

    fn update(&mut self, key: SceneObjectKey, position: Vec3, half_extents: Vec3) {
        self.remove_key(key);
        self.insert(key, position, half_extents);
    }

    fn query(&self, bounds: &AABB) -> Vec<SceneObjectKey> {
        let mut results = Vec::new();
        self.root
            .collect(&self.boxes, &|aabb: &AABB| aabb.intersects(bounds), &mut results);
        results
    }

    fn query_radius(&self, center: Vec3, radius: f32) -> Vec<SceneObjectKey> {
        let mut results = Vec::new();
        self.root.collect(
            &self.boxes,
            &|aabb: &AABB| sphere_intersects_aabb(center, radius, aabb),
            &mut results,
        );
        results
    }

    fn query_frustum(&self, planes: &[FrustumPlane]) -> Vec<SceneObjectKey> {
        let mut results = Vec::new();
        self.root.collect_frustum(&self.boxes, planes, &mut results);
        results
    }

    fn clear(&mut self) {
        self.boxes.clear();
        self.root = OctreeNode::leaf(self.config.world_bounds, 0);
    }

    fn rebuild(&mut self, objects: &[SceneObject]) {
        self.clear();
        for object in objects {
            self.insert(object.id, object.position, object.half_extents());
        }
        engine_debug!(SOURCE, "Rebuilt octree with {} objects", objects.len());
    }

    fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            object_count: self.boxes.len(),
            ..IndexStats::default()
        };
        self.root.accumulate_stats(&mut stats);
        stats
    }
}

#[cfg(test)]
#[path = "octree_scene_index_tests.rs"]
mod tests;
