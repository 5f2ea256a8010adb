use super::*;
use crate::foundation::math::{Mat3, Mat3Ext};
use crate::physics::collision::{Collider, Plane, ResultValue, Transformable};
use approx::assert_relative_eq;

fn corner_hit(result: &crate::physics::collision::CollisionResult) -> Option<&str> {
    result.value("corner_hit").and_then(ResultValue::as_text)
}

fn count(result: &crate::physics::collision::CollisionResult, key: &str) -> i64 {
    result.value(key).and_then(ResultValue::as_int).unwrap()
}

fn polygon(result: &crate::physics::collision::CollisionResult) -> Vec<Vec3> {
    result.value("polygon").and_then(ResultValue::as_points).unwrap().to_vec()
}

/// Lengths of all polygon sides, closing edge included
fn side_lengths(points: &[Vec3]) -> Vec<f64> {
    (0..points.len())
        .map(|i| (points[(i + 1) % points.len()] - points[i]).norm())
        .collect()
}

#[test]
fn test_overlapping_boxes() {
    let a = unit_cube();
    let mut b = unit_cube();
    b.set_translation(&shifted(0.5, 0.0, 0.0));

    let result = a.has_collision(&b, &opts()).unwrap();
    assert!(result.collision());
    assert_eq!(corner_hit(&result), Some("first_in_second"));
}

#[test]
fn test_separated_boxes() {
    let a = unit_cube();
    let mut b = unit_cube();
    b.set_translation(&shifted(2.0, 0.0, 0.0));

    let result = a.has_collision(&b, &opts()).unwrap();
    assert!(!result.collision());
    assert_eq!(corner_hit(&result), None);
}

#[test]
fn test_face_touching_boxes() {
    let a = unit_cube();
    let mut b = unit_cube();
    b.set_translation(&shifted(1.0, 0.0, 0.0));

    assert!(a.has_collision(&b, &opts()).unwrap().collision());
    assert!(b.has_collision(&a, &opts()).unwrap().collision());
}

#[test]
fn test_box_box_tolerance() {
    let a = unit_cube();
    let mut b = unit_cube();
    b.set_translation(&shifted(1.0 + 1e-4, 0.0, 0.0));

    assert!(a.has_collision(&b, &opts().with_atol(1e-4)).unwrap().collision());
    assert!(!a.has_collision(&b, &opts().with_atol(1e-5)).unwrap().collision());
}

#[test]
fn test_engulfed_box() {
    let big = unit_cube();
    let small = Cuboid::new([0.25, 0.25, 0.25], [0.75, 0.75, 0.75]).unwrap();

    let result = big.has_collision(&small, &opts()).unwrap();
    assert!(result.collision());
    assert_eq!(corner_hit(&result), Some("second_in_first"));

    let result = small.has_collision(&big, &opts()).unwrap();
    assert!(result.collision());
    assert_eq!(corner_hit(&result), Some("first_in_second"));
}

#[test]
fn test_rotated_box_corner_reaches_in() {
    let a = centered_cube();
    let mut b = centered_cube();
    b.set_rotation(&Mat3::rotation_z(45.0));
    b.set_translation(&shifted(2.5, 0.0, 0.0));

    // the diamond tip sits at x = 2.5 - sqrt(2)
    assert!(!a.has_collision(&b, &opts()).unwrap().collision());

    b.set_translation(&shifted(-0.2, 0.0, 0.0));
    let result = a.has_collision(&b, &opts()).unwrap();
    assert!(result.collision());
    assert_eq!(corner_hit(&result), Some("second_in_first"));
}

#[test]
fn test_crossing_bars_without_corner_contact() {
    // the bars overlap in their middle but no corner lies in the other bar
    let a = Cuboid::new([-2.0, -0.5, -0.5], [2.0, 0.5, 0.5]).unwrap();
    let b = Cuboid::new([-0.5, -2.0, -0.5], [0.5, 2.0, 0.5]).unwrap();

    assert!(!a.has_collision(&b, &opts()).unwrap().collision());
}

#[test]
fn test_box_cut_by_plane_in_a_square() {
    let cube = centered_cube();
    let plane = Plane::xy(0.0);

    let result = cube.has_collision(&plane, &opts()).unwrap();
    assert!(result.collision());
    assert_eq!(count(&result, "positive"), 4);
    assert_eq!(count(&result, "negative"), 4);
    assert_eq!(count(&result, "touching"), 0);

    let points = polygon(&result);
    assert_eq!(points.len(), 4);
    for p in &points {
        assert_relative_eq!(p.z, 0.0, epsilon = EPSILON);
        assert_relative_eq!(p.x.abs(), 1.0, epsilon = EPSILON);
        assert_relative_eq!(p.y.abs(), 1.0, epsilon = EPSILON);
    }
    for side in side_lengths(&points) {
        assert_relative_eq!(side, 2.0, epsilon = EPSILON);
    }
}

#[test]
fn test_box_cut_by_diagonal_plane_in_a_hexagon() {
    let cube = centered_cube();
    let plane = Plane::new([1.0, 1.0, 1.0], 0.0).unwrap();

    let result = cube.has_collision(&plane, &opts()).unwrap();
    assert!(result.collision());

    let points = polygon(&result);
    assert_eq!(points.len(), 6);
    for p in &points {
        assert_relative_eq!(p.x + p.y + p.z, 0.0, epsilon = EPSILON);
    }
    for side in side_lengths(&points) {
        assert_relative_eq!(side, 2.0_f64.sqrt(), epsilon = EPSILON);
    }
}

#[test]
fn test_box_face_on_plane() {
    let cube = centered_cube();
    let plane = Plane::xy(1.0);

    let result = cube.has_collision(&plane, &opts()).unwrap();
    assert!(result.collision());
    assert_eq!(count(&result, "touching"), 4);
    assert_eq!(count(&result, "negative"), 4);
    assert_eq!(polygon(&result).len(), 4);
}

#[test]
fn test_box_corner_on_plane() {
    let cube = centered_cube();
    let plane = Plane::new([1.0, 1.0, 1.0], 3.0_f64.sqrt()).unwrap();

    let result = cube.has_collision(&plane, &opts()).unwrap();
    assert!(result.collision());
    assert_eq!(count(&result, "touching"), 1);
    assert_eq!(count(&result, "negative"), 7);

    let points = polygon(&result);
    assert_eq!(points.len(), 1);
    assert_relative_eq!(points[0], Vec3::new(1.0, 1.0, 1.0), epsilon = 1e-8);
}

#[test]
fn test_box_beside_plane() {
    let cube = centered_cube();
    let plane = Plane::xy(2.0);

    let result = cube.has_collision(&plane, &opts()).unwrap();
    assert!(!result.collision());
    assert_eq!(count(&result, "negative"), 8);
    assert!(result.value("polygon").is_none());
}

#[test]
fn test_box_plane_is_order_independent() {
    let cube = centered_cube();
    let plane = Plane::yz(0.5);

    let bp = cube.has_collision(&plane, &opts()).unwrap();
    let pb = plane.has_collision(&cube, &opts()).unwrap();
    assert!(bp.collision());
    assert_eq!(bp, pb);
}

#[test]
fn test_rotated_box_against_plane() {
    let mut cube = centered_cube();
    cube.set_rotation(&Mat3::rotation_z(45.0));

    // corners now reach out to x = sqrt(2)
    assert!(cube.has_collision(&Plane::yz(1.2), &opts()).unwrap().collision());
    assert!(!cube.has_collision(&Plane::yz(1.5), &opts()).unwrap().collision());
}

#[test]
fn test_box_against_translated_plane() {
    let cube = centered_cube();
    let mut plane = Plane::xy(0.0);
    assert!(cube.has_collision(&plane, &opts()).unwrap().collision());

    plane.set_translation(&shifted(5.0, 5.0, 3.0));
    let result = cube.has_collision(&plane, &opts()).unwrap();
    assert_relative_eq!(plane.distance(), 3.0, epsilon = EPSILON);
    assert!(!result.collision());
}
