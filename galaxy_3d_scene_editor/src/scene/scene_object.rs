/// The editor's view of an object placed in the scene.
///
/// Only what the spatial index needs is modelled here: a primitive kind and
/// a transform. The bounding box proxy ignores rotation.

use glam::Vec3;
use slotmap::new_key_type;
use crate::geometry::AABB;

new_key_type! {
    /// Stable key for a SceneObject within a Scene.
    ///
    /// Keys remain valid even after other objects are removed, and are what
    /// the spatial index stores.
    pub struct SceneObjectKey;
}

/// Closed set of primitive shapes the editor can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Box,
    Sphere,
    Cylinder,
    Cone,
    Torus,
    Plane,
}

impl PrimitiveKind {
    /// Every primitive kind, in menu order
    pub const ALL: [PrimitiveKind; 6] = [
        PrimitiveKind::Box,
        PrimitiveKind::Sphere,
        PrimitiveKind::Cylinder,
        PrimitiveKind::Cone,
        PrimitiveKind::Torus,
        PrimitiveKind::Plane,
    ];

    /// Base display name used for auto-numbered objects ("Sphere 3")
    pub fn default_name(self) -> &'static str {
        match self {
            PrimitiveKind::Box => "Box",
            PrimitiveKind::Sphere => "Sphere",
            PrimitiveKind::Cylinder => "Cylinder",
            PrimitiveKind::Cone => "Cone",
            PrimitiveKind::Torus => "Torus",
            PrimitiveKind::Plane => "Plane",
        }
    }
}

/// An object in the scene.
///
/// `scale` is the full size of the unit primitive along each axis; a negative
/// component mirrors the object but never inverts its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Key of this object (null key until inserted into a Scene)
    pub id: SceneObjectKey,
    /// Display name
    pub name: String,
    /// Primitive shape
    pub kind: PrimitiveKind,
    /// World-space position (box center)
    pub position: Vec3,
    /// Euler rotation in radians (not used by the bounding box)
    pub rotation: Vec3,
    /// Per-axis scale
    pub scale: Vec3,
}

impl SceneObject {
    /// Object of the given kind at the origin with unit scale.
    pub fn new(kind: PrimitiveKind) -> Self {
        Self {
            id: SceneObjectKey::default(),
            name: kind.default_name().to_string(),
            kind,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Half-extents of the bounding box: `|scale| / 2`
    pub fn half_extents(&self) -> Vec3 {
        self.scale.abs() * 0.5
    }

    /// World-space bounding box
    pub fn aabb(&self) -> AABB {
        AABB::from_scene_object(self)
    }
}
