/// Tests for Scene
///
/// These tests validate object lifecycle via SlotMap keys, index
/// synchronization on every mutation, naming, and spatial queries.

use super::*;
use crate::scene::linear_scene_index::LinearSceneIndex;
use glam::Vec3;

// ============================================================================
// Creation
// ============================================================================

#[test]
fn test_new_scene_is_empty() {
    let scene = Scene::new();
    assert_eq!(scene.object_count(), 0);
    assert_eq!(scene.objects().count(), 0);
    assert_eq!(scene.index_stats().object_count, 0);
}

#[test]
fn test_with_index_clears_supplied_index() {
    let mut index = LinearSceneIndex::new();
    let mut scene = Scene::new();
    let key = scene.add_object(PrimitiveKind::Box, Vec3::ZERO, Vec3::ONE);
    index.insert(key, Vec3::ZERO, Vec3::ONE);

    let scene = Scene::with_index(Box::new(index));
    assert_eq!(scene.index_stats().object_count, 0);
}

// ============================================================================
// Object lifecycle
// ============================================================================

#[test]
fn test_add_object_assigns_key_and_name() {
    let mut scene = Scene::new();
    let a = scene.add_object(PrimitiveKind::Sphere, Vec3::ZERO, Vec3::ONE);
    let b = scene.add_object(PrimitiveKind::Sphere, Vec3::X, Vec3::ONE);
    let c = scene.add_object(PrimitiveKind::Torus, Vec3::Y, Vec3::ONE);

    assert_ne!(a, b);
    assert_eq!(scene.object(a).unwrap().name, "Sphere 1");
    assert_eq!(scene.object(b).unwrap().name, "Sphere 2");
    assert_eq!(scene.object(c).unwrap().name, "Torus 1");
    assert_eq!(scene.object(a).unwrap().id, a);
    assert_eq!(scene.object_count(), 3);
    assert_eq!(scene.index_stats().object_count, 3);
}

#[test]
fn test_remove_object_returns_it_and_unindexes() {
    let mut scene = Scene::new();
    let key = scene.add_object(PrimitiveKind::Box, Vec3::new(5.0, 0.0, 0.0), Vec3::ONE);

    let removed = scene.remove_object(key).unwrap();

    assert_eq!(removed.kind, PrimitiveKind::Box);
    assert!(scene.object(key).is_none());
    assert!(scene.objects_in_radius(Vec3::new(5.0, 0.0, 0.0), 1.0).is_empty());
    assert_eq!(scene.index_stats().object_count, 0);
}

#[test]
fn test_remove_unknown_object_fails() {
    let mut scene = Scene::new();
    let key = scene.add_object(PrimitiveKind::Box, Vec3::ZERO, Vec3::ONE);
    scene.remove_object(key).unwrap();

    assert!(matches!(scene.remove_object(key), Err(Error::UnknownObject(_))));
}

#[test]
fn test_stale_key_after_slot_reuse() {
    let mut scene = Scene::new();
    let old = scene.add_object(PrimitiveKind::Box, Vec3::ZERO, Vec3::ONE);
    scene.remove_object(old).unwrap();
    let new = scene.add_object(PrimitiveKind::Box, Vec3::ZERO, Vec3::ONE);

    assert_ne!(old, new);
    assert!(scene.object(old).is_none());
    assert!(scene.set_position(old, Vec3::X).is_err());
}

#[test]
fn test_set_position_updates_index() {
    let mut scene = Scene::new();
    let key = scene.add_object(PrimitiveKind::Cone, Vec3::new(-20.0, 0.0, 0.0), Vec3::ONE);

    scene.set_position(key, Vec3::new(20.0, 0.0, 0.0)).unwrap();

    assert!(scene.objects_in_radius(Vec3::new(-20.0, 0.0, 0.0), 2.0).is_empty());
    assert_eq!(scene.objects_in_radius(Vec3::new(20.0, 0.0, 0.0), 2.0), vec![key]);
    assert_eq!(scene.object(key).unwrap().position, Vec3::new(20.0, 0.0, 0.0));
}

#[test]
fn test_set_scale_updates_index() {
    let mut scene = Scene::new();
    let key = scene.add_object(PrimitiveKind::Box, Vec3::ZERO, Vec3::ONE);
    let probe = AABB::new(Vec3::new(4.0, -0.1, -0.1), Vec3::new(5.0, 0.1, 0.1));
    assert!(scene.objects_in_box(&probe).is_empty());

    scene.set_scale(key, Vec3::splat(10.0)).unwrap();

    assert_eq!(scene.objects_in_box(&probe), vec![key]);
}

#[test]
fn test_rotation_and_rename() {
    let mut scene = Scene::new();
    let key = scene.add_object(PrimitiveKind::Cylinder, Vec3::ZERO, Vec3::ONE);

    scene.set_rotation(key, Vec3::new(0.0, 1.0, 0.0)).unwrap();
    scene.rename(key, "Pillar").unwrap();

    let object = scene.object(key).unwrap();
    assert_eq!(object.rotation, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(object.name, "Pillar");
}

#[test]
fn test_clear_resets_names() {
    let mut scene = Scene::new();
    scene.add_object(PrimitiveKind::Plane, Vec3::ZERO, Vec3::ONE);
    scene.clear();
    let key = scene.add_object(PrimitiveKind::Plane, Vec3::ZERO, Vec3::ONE);

    assert_eq!(scene.object_count(), 1);
    assert_eq!(scene.object(key).unwrap().name, "Plane 1");
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_visible_objects_uses_camera_frustum() {
    let mut scene = Scene::new();
    let ahead = scene.add_object(PrimitiveKind::Box, Vec3::new(0.0, 0.0, -10.0), Vec3::ONE);
    let behind = scene.add_object(PrimitiveKind::Box, Vec3::new(0.0, 0.0, 10.0), Vec3::ONE);

    let pose = CameraPathState {
        position: Vec3::ZERO,
        look_at: Vec3::new(0.0, 0.0, -1.0),
        fov: 60.0,
    };
    let visible = scene.visible_objects(&pose, 16.0 / 9.0, 0.1, 100.0);

    assert!(visible.contains(&ahead));
    assert!(!visible.contains(&behind));
}

#[test]
fn test_resync_index_matches_objects() {
    let mut scene = Scene::new();
    let keys: Vec<_> = (0..20)
        .map(|i| scene.add_object(PrimitiveKind::Box, Vec3::splat(i as f32), Vec3::ONE))
        .collect();

    scene.resync_index();

    let mut found = scene.objects_in_box(&AABB::new(Vec3::splat(-1.0), Vec3::splat(25.0)));
    found.sort();
    let mut expected = keys.clone();
    expected.sort();
    assert_eq!(found, expected);
}

#[test]
fn test_linear_backed_scene_answers_queries() {
    let mut scene = Scene::with_index(Box::new(LinearSceneIndex::new()));
    let key = scene.add_object(PrimitiveKind::Sphere, Vec3::new(3.0, 0.0, 0.0), Vec3::splat(2.0));

    assert_eq!(scene.objects_in_radius(Vec3::ZERO, 2.0), vec![key]);
    assert_eq!(scene.index_stats().node_count, 1);
}
