//! # Collision Engine
//!
//! Pairwise collision detection between spheres, boxes and infinite planes
//! placed in 3D space by an accumulating affine transform.
//!
//! ## Features
//!
//! - **Accumulating transforms**: rotations compose, translations add up
//! - **Structured results**: every query reports its collision flag together
//!   with the distances, counts and intersection geometry it computed
//! - **Tolerance control**: one absolute tolerance per query via
//!   [`config::CollisionOptions`]
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sphere = Sphere::new([0.0, 0.0, 0.0], 1.0)?;
//!     let mut plane = Plane::xy(0.5);
//!     plane.set_translation(&Vec3::new(0.0, 0.0, 0.5));
//!
//!     let result = sphere.has_collision(&plane, &CollisionOptions::default())?;
//!     assert!(result.collision());
//!     println!("{result}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::many_single_char_names)]

pub mod foundation;
pub mod config;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{CollisionOptions, Config},
        foundation::{
            math::{Mat3, Mat3Ext, Transform, Vec3},
            validation::ValidationError,
        },
        physics::collision::{
            collide, Collider, CollisionError, CollisionResult, Cuboid, Plane, ResultValue, Shape,
            ShapeKind, Sphere, Transformable,
        },
    };
}
