//! Physics module for collision detection
//!
//! Pairwise collision queries between spheres, boxes and planes.

pub mod collision;

#[cfg(test)]
mod tests;

pub use collision::{
    collide,
    Collider,
    CollisionError,
    CollisionResult,
    Cuboid,
    Plane,
    ResultValue,
    Shape,
    ShapeKind,
    Sphere,
    Transformable,
};
