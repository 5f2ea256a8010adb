//! Routing of collider pairs to the matching predicate
//!
//! The full cross product of the three variants is spelled out in
//! [`route`]. Pairs without a predicate (sphere with box, or anything that
//! is not a primitive) are reported as [`CollisionError::UnsupportedPair`],
//! never as "no collision".

use super::predicates;
use super::result::CollisionResult;
use super::shape::{Collider, ShapeRef};
use crate::config::CollisionOptions;
use crate::foundation::validation::ValidationError;
use thiserror::Error;

/// Errors raised by collision queries
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// Degenerate geometry detected while evaluating a predicate
    #[error("invalid geometry: {0}")]
    Validation(#[from] ValidationError),

    /// No predicate exists for this pair of operands
    #[error("cannot find any collision procedure for given types {first} and {second}")]
    UnsupportedPair {
        /// Kind of the first operand
        first: String,
        /// Kind of the second operand
        second: String,
    },
}

/// Test two colliders against each other
pub fn collide(
    first: &dyn Collider,
    second: &dyn Collider,
    opts: &CollisionOptions,
) -> Result<CollisionResult, CollisionError> {
    route(
        (first.as_shape(), first.kind_name()),
        (second.as_shape(), second.kind_name()),
        opts,
    )
}

/// Select and run the predicate for a pair of operands
///
/// Plane-first pairs are reordered so that the sphere or box is always the
/// first argument of the predicate.
pub(crate) fn route(
    first: (Option<ShapeRef<'_>>, &str),
    second: (Option<ShapeRef<'_>>, &str),
    opts: &CollisionOptions,
) -> Result<CollisionResult, CollisionError> {
    let unsupported = || CollisionError::UnsupportedPair {
        first: first.1.to_string(),
        second: second.1.to_string(),
    };

    let (Some(a), Some(b)) = (first.0, second.0) else {
        log::warn!("collision query with a non-primitive operand: {} and {}", first.1, second.1);
        return Err(unsupported());
    };

    match (a, b) {
        (ShapeRef::Sphere(a), ShapeRef::Sphere(b)) => Ok(predicates::sphere_sphere(a, b, opts)),
        (ShapeRef::Sphere(sphere), ShapeRef::Plane(plane))
        | (ShapeRef::Plane(plane), ShapeRef::Sphere(sphere)) => {
            predicates::sphere_plane(sphere, plane, opts)
        }
        (ShapeRef::Box(a), ShapeRef::Box(b)) => Ok(predicates::box_box(a, b, opts)),
        (ShapeRef::Box(cuboid), ShapeRef::Plane(plane))
        | (ShapeRef::Plane(plane), ShapeRef::Box(cuboid)) => {
            predicates::box_plane(cuboid, plane, opts)
        }
        (ShapeRef::Plane(a), ShapeRef::Plane(b)) => predicates::plane_plane(a, b, opts),
        (ShapeRef::Sphere(_), ShapeRef::Box(_)) | (ShapeRef::Box(_), ShapeRef::Sphere(_)) => {
            Err(unsupported())
        }
    }
}
