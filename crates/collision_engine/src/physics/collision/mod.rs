//! Collision detection between primitive shapes
//!
//! Provides spheres, boxes and planes under an accumulating affine
//! transform, a dispatcher selecting the predicate for a pair of shapes, and
//! the structured result every query produces.

pub mod primitives;
pub mod shape;
pub mod result;
pub mod dispatch;
pub mod predicates;

pub use primitives::{Cuboid, Plane, Sphere, Transformable, CUBOID_EDGES, CUBOID_FACES};
pub use shape::{Collider, Shape, ShapeKind, ShapeRef};
pub use result::{CollisionResult, ResultValue, COLLISION_KEY};
pub use dispatch::{collide, CollisionError};
