//! Unit tests for camera_path.rs

use super::*;
use crate::error::Error;

// ============================================================================
// Helpers
// ============================================================================

fn key(x: f32, time: f32) -> NewPathPoint {
    NewPathPoint::new(Vec3::new(x, 0.0, 0.0), Vec3::new(x, 0.0, -1.0), time)
}

/// x = 0, 10, 20, 30 at t = 0, 1, 2, 3
fn line_path(ids: &mut IdGenerator) -> CameraPath {
    let mut path = CameraPath::new("Line", ids).with_duration(3.0);
    for i in 0..4 {
        path = path.with_point_added(key(i as f32 * 10.0, i as f32), ids);
    }
    path
}

/// Square in the XZ plane, one corner per second
fn square_path(ids: &mut IdGenerator) -> CameraPath {
    let corners = [
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::new(-10.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -10.0),
    ];
    let mut path = CameraPath::new("Square", ids);
    for (i, corner) in corners.iter().enumerate() {
        path = path.with_point_added(NewPathPoint::new(*corner, Vec3::ZERO, i as f32), ids);
    }
    path
}

// ============================================================================
// Creation and edits
// ============================================================================

#[test]
fn test_new_path_defaults() {
    let mut ids = IdGenerator::new();
    let path = CameraPath::new("Shot A", &mut ids);

    assert_eq!(path.id(), "path_1");
    assert_eq!(path.name(), "Shot A");
    assert!(path.points().is_empty());
    assert_eq!(path.duration(), 5.0);
    assert!(!path.is_looping());
    assert_eq!(path.tension(), 0.5);
}

#[test]
fn test_add_point_appends_with_fresh_id() {
    let mut ids = IdGenerator::new();
    let empty = CameraPath::new("P", &mut ids);
    let one = empty.with_point_added(key(0.0, 5.0), &mut ids);
    let two = one.with_point_added(key(1.0, 1.0), &mut ids);

    assert!(empty.points().is_empty());
    assert_eq!(one.points().len(), 1);
    assert_eq!(two.points().len(), 2);
    assert_ne!(two.points()[0].id, two.points()[1].id);
    // Appended, not sorted
    assert_eq!(two.points()[1].time, 1.0);
    assert_eq!(two.points()[0].fov, 60.0);
}

#[test]
fn test_remove_point() {
    let mut ids = IdGenerator::new();
    let path = line_path(&mut ids);
    let victim = path.points()[1].id.clone();

    let removed = path.with_point_removed(&victim);

    assert_eq!(removed.points().len(), 3);
    assert!(removed.point(&victim).is_none());
    assert_eq!(path.points().len(), 4);
}

#[test]
fn test_remove_unknown_point_is_noop() {
    let mut ids = IdGenerator::new();
    let path = line_path(&mut ids);
    assert_eq!(path.with_point_removed("nope"), path);
}

#[test]
fn test_update_point_merges_fields() {
    let mut ids = IdGenerator::new();
    let path = line_path(&mut ids);
    let target = path.points()[2].id.clone();

    let updated = path.with_point_updated(&target, PathPointUpdate::default().fov(35.0).time(2.5));

    let point = updated.point(&target).unwrap();
    assert_eq!(point.fov, 35.0);
    assert_eq!(point.time, 2.5);
    assert_eq!(point.position, Vec3::new(20.0, 0.0, 0.0));
    assert_eq!(updated.points()[1], path.points()[1]);
    assert_eq!(path.point(&target).unwrap().fov, 60.0);
}

#[test]
fn test_update_position_and_look_at() {
    let mut ids = IdGenerator::new();
    let path = line_path(&mut ids);
    let target = path.points()[0].id.clone();

    let updated = path.with_point_updated(
        &target,
        PathPointUpdate::default().position(Vec3::ONE).look_at(Vec3::NEG_ONE),
    );

    let point = updated.point(&target).unwrap();
    assert_eq!(point.position, Vec3::ONE);
    assert_eq!(point.look_at, Vec3::NEG_ONE);
}

#[test]
fn test_reorder_is_stable_sort_by_time() {
    let mut ids = IdGenerator::new();
    let path = CameraPath::new("P", &mut ids)
        .with_point_added(key(0.0, 3.0), &mut ids)
        .with_point_added(key(1.0, 1.0), &mut ids)
        .with_point_added(key(2.0, 3.0), &mut ids)
        .with_point_added(key(3.0, 0.0), &mut ids);

    let sorted = path.reordered();

    let xs: Vec<f32> = sorted.points().iter().map(|p| p.position.x).collect();
    assert_eq!(xs, vec![3.0, 1.0, 0.0, 2.0]);
    assert_eq!(path.points()[0].position.x, 0.0);
}

#[test]
fn test_setters_copy() {
    let mut ids = IdGenerator::new();
    let path = CameraPath::new("P", &mut ids);
    let edited = path
        .with_name("Q")
        .with_duration(9.0)
        .with_looping(true)
        .with_tension(0.1);

    assert_eq!(edited.name(), "Q");
    assert_eq!(edited.duration(), 9.0);
    assert!(edited.is_looping());
    assert_eq!(edited.tension(), 0.1);
    assert_eq!(edited.id(), path.id());
    assert_eq!(path.name(), "P");
}

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn test_evaluate_empty_path_gives_default_pose() {
    let mut ids = IdGenerator::new();
    let path = CameraPath::new("P", &mut ids);
    assert_eq!(path.evaluate(2.0), CameraPathState::default());
}

#[test]
fn test_evaluate_single_point_ignores_time() {
    let mut ids = IdGenerator::new();
    let path = CameraPath::new("P", &mut ids).with_point_added(key(7.0, 3.0).with_fov(20.0), &mut ids);
    for time in [-5.0, 0.0, 3.0, 100.0] {
        let pose = path.evaluate(time);
        assert_eq!(pose.position, Vec3::new(7.0, 0.0, 0.0));
        assert_eq!(pose.fov, 20.0);
    }
}

#[test]
fn test_evaluate_linear_midpoint() {
    let mut ids = IdGenerator::new();
    let path = line_path(&mut ids);
    let pose = path.evaluate(1.5);
    assert!((pose.position.x - 15.0).abs() < 1e-4);
    assert!((pose.fov - 60.0).abs() < 1e-4);
}

#[test]
fn test_evaluate_clamps_outside_span() {
    let mut ids = IdGenerator::new();
    let path = line_path(&mut ids);
    let first = CameraPathState::from(&path.points()[0]);
    let last = CameraPathState::from(&path.points()[3]);

    assert_eq!(path.evaluate(-1.0), first);
    assert_eq!(path.evaluate(0.0), first);
    assert_eq!(path.evaluate(3.0), last);
    assert_eq!(path.evaluate(50.0), last);
}

#[test]
fn test_evaluate_hits_keys_exactly() {
    let mut ids = IdGenerator::new();
    let path = square_path(&mut ids).with_tension(0.2);
    for point in path.points() {
        assert_eq!(path.evaluate(point.time).position, point.position);
    }
}

#[test]
fn test_looping_wraps_time() {
    let mut ids = IdGenerator::new();
    let path = square_path(&mut ids).with_looping(true).with_duration(3.0);

    let at_zero = path.evaluate(0.0);
    let at_duration = path.evaluate(path.points_duration());
    assert!((at_zero.position - at_duration.position).length() < 1e-4);

    let a = path.evaluate(1.25);
    let b = path.evaluate(1.25 + 3.0);
    let c = path.evaluate(1.25 - 3.0);
    assert!((a.position - b.position).length() < 1e-4);
    assert!((a.position - c.position).length() < 1e-4);
}

#[test]
fn test_looping_neighbours_wrap_around() {
    let mut ids = IdGenerator::new();
    let open = square_path(&mut ids).with_duration(4.0);
    let closed = open.with_looping(true);

    // First segment: clamped p0 vs wrapped p0 (the last corner)
    let a = open.evaluate(0.5).position;
    let b = closed.evaluate(0.5).position;
    assert!((a - b).length() > 1e-3);
}

#[test]
fn test_zero_duration_loop_does_not_wrap() {
    let mut ids = IdGenerator::new();
    let path = line_path(&mut ids).with_looping(true).with_duration(0.0);
    assert!((path.evaluate(1.5).position.x - 15.0).abs() < 1e-4);
}

// ============================================================================
// Length / duration / sampling
// ============================================================================

#[test]
fn test_length_of_straight_line() {
    let mut ids = IdGenerator::new();
    let path = line_path(&mut ids);
    assert!((path.length_default() - 30.0).abs() < 1e-2);
    assert!((path.length(200) - 30.0).abs() < 1e-2);
}

#[test]
fn test_length_degenerate_cases() {
    let mut ids = IdGenerator::new();
    let empty = CameraPath::new("P", &mut ids);
    let one = empty.with_point_added(key(0.0, 0.0), &mut ids);
    let same_time = one.with_point_added(key(10.0, 0.0), &mut ids);
    let backwards = one.with_point_added(key(10.0, -1.0), &mut ids);

    assert_eq!(empty.length_default(), 0.0);
    assert_eq!(one.length_default(), 0.0);
    assert_eq!(same_time.length_default(), 0.0);
    assert_eq!(backwards.length_default(), 0.0);
    assert_eq!(line_path(&mut ids).length(0), 0.0);
}

#[test]
fn test_curved_length_exceeds_chord() {
    let mut ids = IdGenerator::new();
    let path = square_path(&mut ids);
    let chords: f32 = path
        .points()
        .windows(2)
        .map(|pair| pair[0].position.distance(pair[1].position))
        .sum();
    assert!(path.length_default() >= chords - 1e-3);
}

#[test]
fn test_points_duration() {
    let mut ids = IdGenerator::new();
    let empty = CameraPath::new("P", &mut ids);
    assert_eq!(empty.points_duration(), 0.0);

    let path = empty
        .with_point_added(key(0.0, 4.0), &mut ids)
        .with_point_added(key(0.0, 2.0), &mut ids);
    assert_eq!(path.points_duration(), 4.0);
    assert_eq!(path.duration(), 5.0);
}

#[test]
fn test_sample_counts() {
    let mut ids = IdGenerator::new();
    let path = line_path(&mut ids);

    assert!(path.sample(0).is_empty());
    assert!(CameraPath::new("P", &mut ids).sample(5).is_empty());

    let one = path.sample(1);
    assert_eq!(one, vec![path.evaluate(path.points()[0].time)]);

    let four = path.sample(4);
    assert_eq!(four.len(), 4);
    assert_eq!(four[0], path.evaluate(0.0));
    assert_eq!(four[3], path.evaluate(3.0));
    assert!((four[1].position.x - 10.0).abs() < 1e-3);
}

#[test]
fn test_sample_looping_matches_evaluate() {
    let mut ids = IdGenerator::new();
    let mut path = CameraPath::new("Loop", &mut ids).with_looping(true);
    for i in 0..4 {
        path = path.with_point_added(key(i as f32 * 10.0, i as f32 * 2.0), &mut ids);
    }

    // Default duration 5 wraps the last sample time (6) back to 1
    let samples = path.sample(4);
    for (k, sample) in samples.iter().enumerate() {
        assert_eq!(*sample, path.evaluate(k as f32 * 2.0));
    }
    assert!(samples[3].position.x < 10.0);

    // Duration equal to the key span lands the last sample on the first point
    let closed = path.with_duration(6.0);
    let ends = closed.sample(2);
    assert_eq!(ends[1], closed.evaluate(6.0));
    assert_eq!(ends[1].position, closed.points()[0].position);
}

#[test]
fn test_looping_length_includes_return_leg() {
    let mut ids = IdGenerator::new();
    let mut open = CameraPath::new("Open", &mut ids);
    for i in 0..4 {
        open = open.with_point_added(key(i as f32 * 10.0, i as f32 * 2.0), &mut ids);
    }
    let looping = open.with_looping(true);

    assert!((open.length_default() - 30.0).abs() < 1e-2);
    assert!(looping.length_default() > open.length_default() + 10.0);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_valid_path_has_no_errors() {
    let mut ids = IdGenerator::new();
    let path = line_path(&mut ids);
    assert!(validate_camera_path(&path).is_empty());
    assert!(path.ensure_valid().is_ok());
}

#[test]
fn test_point_validation() {
    let point = CameraPathPoint {
        id: "  ".to_string(),
        position: Vec3::ZERO,
        look_at: Vec3::Z,
        fov: 180.0,
        time: -1.0,
    };
    let errors = validate_path_point(&point);
    assert_eq!(errors.len(), 3);

    let ok = CameraPathPoint { id: "a".to_string(), fov: 1.0, time: 0.0, ..point.clone() };
    assert!(validate_path_point(&ok).is_empty());
    let edge = CameraPathPoint { fov: 179.0, ..ok.clone() };
    assert!(validate_path_point(&edge).is_empty());
    let nan = CameraPathPoint { fov: f32::NAN, ..ok };
    assert_eq!(validate_path_point(&nan).len(), 1);
}

#[test]
fn test_path_validation_collects_everything() {
    let mut ids = IdGenerator::new();
    let path = CameraPath::new("", &mut ids)
        .with_duration(0.0)
        .with_tension(1.5)
        .with_point_added(key(0.0, 1.0).with_fov(0.5), &mut ids);

    let errors = validate_camera_path(&path);
    let bad_id = &path.points()[0].id;

    assert_eq!(errors.len(), 5);
    assert!(errors.iter().any(|e| e.contains("at least 2 points")));
    assert!(errors.iter().any(|e| e.contains("Duration")));
    assert!(errors.iter().any(|e| e.contains("Tension")));
    assert!(errors.iter().any(|e| e.contains("name")));
    assert!(errors.iter().any(|e| e.starts_with(&format!("Point {}: ", bad_id))));
}

#[test]
fn test_time_inversions_reported_once() {
    let mut ids = IdGenerator::new();
    let path = CameraPath::new("P", &mut ids)
        .with_point_added(key(0.0, 3.0), &mut ids)
        .with_point_added(key(0.0, 2.0), &mut ids)
        .with_point_added(key(0.0, 1.0), &mut ids);

    let errors = validate_camera_path(&path);
    assert_eq!(errors, vec!["Points must be ordered by time".to_string()]);
    assert!(validate_camera_path(&path.reordered()).is_empty());
}

#[test]
fn test_ensure_valid_wraps_errors() {
    let mut ids = IdGenerator::new();
    let path = CameraPath::new("P", &mut ids);
    match path.ensure_valid() {
        Err(Error::InvalidCameraPath(errors)) => {
            assert_eq!(errors, validate_camera_path(&path));
        }
        other => panic!("expected InvalidCameraPath, got {:?}", other),
    }
}
