use super::*;
use crate::foundation::math::{Mat3, Mat3Ext};
use crate::physics::collision::{Collider, Plane, Transformable};
use approx::assert_relative_eq;

#[test]
fn test_touching_spheres_collide() {
    let a = unit_sphere_at(0.0, 0.0, 0.0);
    let b = unit_sphere_at(2.0, 0.0, 0.0);

    let result = a.has_collision(&b, &opts()).unwrap();
    assert!(result.collision());
    assert_relative_eq!(result.float("distance").unwrap(), 2.0, epsilon = EPSILON);
    assert_relative_eq!(result.float("outerdistance").unwrap(), 0.0, epsilon = EPSILON);
}

#[test]
fn test_overlapping_spheres_collide() {
    let a = unit_sphere_at(0.0, 0.0, 0.0);
    let b = unit_sphere_at(1.0, 0.0, 0.0);

    let result = a.has_collision(&b, &opts()).unwrap();
    assert!(result.collision());
    assert_relative_eq!(result.float("outerdistance").unwrap(), -1.0, epsilon = EPSILON);
}

#[test]
fn test_separated_spheres() {
    let a = unit_sphere_at(0.0, 0.0, 0.0);
    let b = unit_sphere_at(3.0, 0.0, 0.0);

    let result = a.has_collision(&b, &opts()).unwrap();
    assert!(!result.collision());
    assert_relative_eq!(result.float("outerdistance").unwrap(), 1.0, epsilon = EPSILON);
}

#[test]
fn test_sphere_sphere_is_symmetric() {
    let a = Sphere::new([0.5, -1.0, 2.0], 0.7).unwrap();
    let b = Sphere::new([1.5, 0.0, 2.5], 1.2).unwrap();

    let ab = a.has_collision(&b, &opts()).unwrap();
    let ba = b.has_collision(&a, &opts()).unwrap();
    assert_eq!(ab.collision(), ba.collision());
    assert_relative_eq!(ab.float("distance").unwrap(), ba.float("distance").unwrap());
}

#[test]
fn test_sphere_sphere_tolerance() {
    let a = unit_sphere_at(0.0, 0.0, 0.0);
    let mut b = unit_sphere_at(0.0, 0.0, 0.0);
    b.set_translation(&shifted(2.0 + 1e-4, 0.0, 0.0));

    assert!(a.has_collision(&b, &opts().with_atol(1e-3)).unwrap().collision());
    assert!(!a.has_collision(&b, &opts().with_atol(1e-5)).unwrap().collision());
}

#[test]
fn test_sphere_follows_rotation() {
    let a = unit_sphere_at(1.0, 0.0, 0.0);
    let mut b = unit_sphere_at(1.0, 0.0, 0.0);
    assert!(a.has_collision(&b, &opts()).unwrap().collision());

    // a quarter turn moves the center to (0, 1, 0)
    b.set_rotation(&Mat3::rotation_z(90.0));
    let result = a.has_collision(&b, &opts()).unwrap();
    assert_relative_eq!(result.float("distance").unwrap(), 2.0_f64.sqrt(), epsilon = EPSILON);
    assert!(result.collision());

    // a half turn in total moves it to (-1, 0, 0)
    b.set_rotation(&Mat3::rotation_z(90.0));
    let result = a.has_collision(&b, &opts()).unwrap();
    assert_relative_eq!(result.float("distance").unwrap(), 2.0, epsilon = EPSILON);
}

#[test]
fn test_sphere_touching_plane() {
    let sphere = unit_sphere_at(0.0, 0.0, 0.0);
    let plane = Plane::xy(1.0);

    let result = sphere.has_collision(&plane, &opts()).unwrap();
    assert!(result.collision());
    assert_relative_eq!(result.float("distance").unwrap(), 1.0, epsilon = EPSILON);
    assert_relative_eq!(result.float("outerdistance").unwrap(), 0.0, epsilon = EPSILON);
}

#[test]
fn test_sphere_plane_is_order_independent() {
    let sphere = unit_sphere_at(0.0, 0.0, 3.0);
    let plane = Plane::xy(2.0);

    let sp = sphere.has_collision(&plane, &opts()).unwrap();
    let ps = plane.has_collision(&sphere, &opts()).unwrap();
    assert!(sp.collision());
    assert_eq!(sp, ps);
}

#[test]
fn test_sphere_far_from_plane() {
    let sphere = unit_sphere_at(0.0, 0.0, 5.0);
    let plane = Plane::xy(0.0);

    let result = sphere.has_collision(&plane, &opts()).unwrap();
    assert!(!result.collision());
    assert_relative_eq!(result.float("outerdistance").unwrap(), 4.0, epsilon = EPSILON);
}

#[test]
fn test_sphere_plane_tolerance() {
    let sphere = unit_sphere_at(0.0, 0.0, 0.0);
    let mut plane = Plane::xy(1.0);
    plane.set_translation(&shifted(0.0, 0.0, 1e-5));

    assert!(sphere.has_collision(&plane, &opts().with_atol(1e-4)).unwrap().collision());
    assert!(!sphere.has_collision(&plane, &opts().with_atol(1e-6)).unwrap().collision());
}

#[test]
fn test_sphere_below_plane_uses_absolute_distance() {
    let sphere = unit_sphere_at(0.0, 0.0, -1.0);
    let plane = Plane::xy(0.0);

    let result = sphere.has_collision(&plane, &opts()).unwrap();
    assert!(result.collision());
    assert_relative_eq!(result.float("distance").unwrap(), 1.0, epsilon = EPSILON);
}

#[test]
fn test_deep_penetration_needs_opt_in() {
    let sphere = Sphere::new([0.0, 0.0, 0.0], 2.0).unwrap();
    let plane = Plane::xy(0.0);

    let strict = sphere.has_collision(&plane, &opts()).unwrap();
    assert!(!strict.collision());
    assert_relative_eq!(strict.float("outerdistance").unwrap(), -2.0, epsilon = EPSILON);

    let lenient = sphere
        .has_collision(&plane, &opts().with_sphere_plane_penetration(true))
        .unwrap();
    assert!(lenient.collision());
}

#[test]
fn test_sphere_against_rotated_plane() {
    let sphere = unit_sphere_at(0.0, -3.0, 0.0);
    let mut plane = Plane::xy(2.0);
    let result = sphere.has_collision(&plane, &opts()).unwrap();
    assert!(!result.collision());
    assert_relative_eq!(result.float("outerdistance").unwrap(), 1.0, epsilon = EPSILON);

    // normal (0, 0, 1) turns into (0, -1, 0): the plane y = -2
    plane.set_rotation(&Mat3::rotation_x(90.0));
    let result = sphere.has_collision(&plane, &opts()).unwrap();
    assert!(result.collision());
    assert_relative_eq!(result.float("distance").unwrap(), 1.0, epsilon = EPSILON);
}
