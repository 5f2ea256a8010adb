//! Tagged variants over the primitive set
//!
//! The dispatcher works on [`ShapeRef`], a borrowed view of one of the three
//! primitives. Anything implementing [`Collider`] can take part in a query;
//! types that are not primitives return `None` from [`Collider::as_shape`]
//! and are rejected by the dispatcher.

use super::dispatch::{self, CollisionError};
use super::primitives::{Cuboid, Plane, Sphere, Transformable};
use super::result::CollisionResult;
use crate::config::CollisionOptions;
use crate::foundation::math::Transform;
use std::fmt;

/// The primitive variants known to the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// [`Sphere`]
    Sphere,
    /// [`Cuboid`]
    Box,
    /// [`Plane`]
    Plane,
}

impl ShapeKind {
    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            Self::Sphere => "Sphere",
            Self::Box => "Box",
            Self::Plane => "Plane",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Borrowed view of a primitive
#[derive(Debug, Clone, Copy)]
pub enum ShapeRef<'a> {
    /// A sphere
    Sphere(&'a Sphere),
    /// A box
    Box(&'a Cuboid),
    /// A plane
    Plane(&'a Plane),
}

impl ShapeRef<'_> {
    /// The variant tag
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::Box(_) => ShapeKind::Box,
            Self::Plane(_) => ShapeKind::Plane,
        }
    }
}

/// Anything that can be passed to a collision query
pub trait Collider {
    /// Name used in error messages
    fn kind_name(&self) -> &'static str;

    /// The primitive behind this value, if any
    fn as_shape(&self) -> Option<ShapeRef<'_>>;

    /// Test this collider against another one
    fn has_collision(
        &self,
        other: &dyn Collider,
        opts: &CollisionOptions,
    ) -> Result<CollisionResult, CollisionError> {
        dispatch::route(
            (self.as_shape(), self.kind_name()),
            (other.as_shape(), other.kind_name()),
            opts,
        )
    }
}

impl Collider for Sphere {
    fn kind_name(&self) -> &'static str {
        ShapeKind::Sphere.name()
    }

    fn as_shape(&self) -> Option<ShapeRef<'_>> {
        Some(ShapeRef::Sphere(self))
    }
}

impl Collider for Cuboid {
    fn kind_name(&self) -> &'static str {
        ShapeKind::Box.name()
    }

    fn as_shape(&self) -> Option<ShapeRef<'_>> {
        Some(ShapeRef::Box(self))
    }
}

impl Collider for Plane {
    fn kind_name(&self) -> &'static str {
        ShapeKind::Plane.name()
    }

    fn as_shape(&self) -> Option<ShapeRef<'_>> {
        Some(ShapeRef::Plane(self))
    }
}

/// Owned primitive of any variant, for heterogeneous collections
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A sphere
    Sphere(Sphere),
    /// A box
    Box(Cuboid),
    /// A plane
    Plane(Plane),
}

impl Shape {
    /// Borrow as a tagged view
    pub fn as_view(&self) -> ShapeRef<'_> {
        match self {
            Self::Sphere(s) => ShapeRef::Sphere(s),
            Self::Box(b) => ShapeRef::Box(b),
            Self::Plane(p) => ShapeRef::Plane(p),
        }
    }

    /// The variant tag
    pub fn kind(&self) -> ShapeKind {
        self.as_view().kind()
    }
}

impl Collider for Shape {
    fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    fn as_shape(&self) -> Option<ShapeRef<'_>> {
        Some(self.as_view())
    }
}

impl Transformable for Shape {
    fn transform(&self) -> &Transform {
        match self {
            Self::Sphere(s) => s.transform(),
            Self::Box(b) => b.transform(),
            Self::Plane(p) => p.transform(),
        }
    }

    fn transform_mut(&mut self) -> &mut Transform {
        match self {
            Self::Sphere(s) => s.transform_mut(),
            Self::Box(b) => b.transform_mut(),
            Self::Plane(p) => p.transform_mut(),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Self::Sphere(sphere)
    }
}

impl From<Cuboid> for Shape {
    fn from(cuboid: Cuboid) -> Self {
        Self::Box(cuboid)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Self::Plane(plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    #[test]
    fn test_kinds() {
        let shapes: Vec<Shape> = vec![
            Sphere::new([0.0, 0.0, 0.0], 1.0).unwrap().into(),
            Cuboid::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]).unwrap().into(),
            Plane::xy(0.0).into(),
        ];
        let kinds: Vec<_> = shapes.iter().map(Shape::kind).collect();
        assert_eq!(kinds, vec![ShapeKind::Sphere, ShapeKind::Box, ShapeKind::Plane]);
        assert_eq!(shapes[1].kind_name(), "Box");
        assert_eq!(ShapeKind::Plane.to_string(), "Plane");
    }

    #[test]
    fn test_shape_transform_delegates() {
        let mut shape: Shape = Sphere::new([0.0, 0.0, 0.0], 1.0).unwrap().into();
        shape.set_translation(&Vec3::new(1.0, 2.0, 3.0));

        match &shape {
            Shape::Sphere(s) => assert_eq!(s.position(), Vec3::new(1.0, 2.0, 3.0)),
            other => panic!("unexpected variant {:?}", other.kind()),
        }
    }
}
