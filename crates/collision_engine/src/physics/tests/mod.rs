//! Scenario tests for the collision queries

mod sphere_tests;
mod box_tests;

use crate::config::CollisionOptions;
use crate::foundation::math::Vec3;
use crate::physics::collision::{Cuboid, Sphere};

const EPSILON: f64 = 1e-10;

fn opts() -> CollisionOptions {
    CollisionOptions::default()
}

fn unit_sphere_at(x: f64, y: f64, z: f64) -> Sphere {
    Sphere::new([x, y, z], 1.0).unwrap()
}

/// The cube `[-1, 1]^3`
fn centered_cube() -> Cuboid {
    Cuboid::new([-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]).unwrap()
}

/// The cube `[0, 1]^3`
fn unit_cube() -> Cuboid {
    Cuboid::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]).unwrap()
}

fn shifted(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}
