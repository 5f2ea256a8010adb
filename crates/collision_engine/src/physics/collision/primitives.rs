//! Primitive collision shapes
//!
//! Every primitive stores its construction geometry in its local frame and
//! owns a [`Transform`]. World-space geometry (positions, corners, faces,
//! edges, plane normals) is recomputed from the current transform on every
//! access and never cached.

use crate::foundation::geometry;
use crate::foundation::math::{Mat3, Transform, Vec3};
use crate::foundation::validation::{self, IntoScalar, IntoVector3, ValidationError};

/// Access to the accumulating transform of a primitive
///
/// The provided setters are the only way to move a primitive; they
/// accumulate onto the existing transform instead of replacing it.
pub trait Transformable {
    /// The current transform
    fn transform(&self) -> &Transform;

    /// Mutable access for the accumulating setters
    fn transform_mut(&mut self) -> &mut Transform;

    /// Compose a rotation on top of the existing transform
    fn set_rotation(&mut self, rotation: &Mat3) {
        self.transform_mut().set_rotation(rotation);
    }

    /// Compose a rotation given as nine row-major values
    fn set_rotation_values(&mut self, values: &[f64]) -> Result<(), ValidationError> {
        let rotation = validation::matrix3("rotation", values)?;
        self.set_rotation(&rotation);
        Ok(())
    }

    /// Compose a rotation given as three rows of three values
    fn set_rotation_rows(&mut self, rows: &[&[f64]]) -> Result<(), ValidationError> {
        let rotation = validation::matrix3_from_rows("rotation", rows)?;
        self.set_rotation(&rotation);
        Ok(())
    }

    /// Add a translation
    fn set_translation(&mut self, translation: &Vec3) {
        self.transform_mut().set_translation(translation);
    }

    /// Add a translation applied after the rotated frame
    fn set_post_translation(&mut self, translation: &Vec3) {
        self.transform_mut().set_post_translation(translation);
    }

    /// Transform a local point into world space
    fn calculate_position(&self, point: &Vec3) -> Vec3 {
        self.transform().transform_point(point)
    }
}

/// A sphere given by its local center and a constant radius
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    transform: Transform,
}

impl Sphere {
    /// Create a sphere; the radius must be strictly positive
    pub fn new(center: impl IntoVector3, radius: impl IntoScalar) -> Result<Self, ValidationError> {
        let center = validation::vector3("center", center)?;
        let radius = validation::positive("radius", validation::scalar("radius", radius)?)?;
        Ok(Self {
            center,
            radius,
            transform: Transform::identity(),
        })
    }

    /// World-space center
    pub fn position(&self) -> Vec3 {
        self.calculate_position(&self.center)
    }

    /// Local center as given at construction
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// The radius
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Transformable for Sphere {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}

/// Corner index pairs forming the 12 edges of a cuboid
pub const CUBOID_EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0),
    (4, 5), (5, 6), (6, 7), (7, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// Corner indices of the 6 faces, each a cyclic quadrilateral
pub const CUBOID_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [3, 2, 6, 7],
    [0, 3, 7, 4],
    [1, 2, 6, 5],
];

/// A box spanned by two opposite corners
///
/// The corners do not have to be sorted. The reference volume is computed
/// once from the local geometry by pyramid decomposition around the local
/// center.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    x1: Vec3,
    x2: Vec3,
    center: Vec3,
    corners: [Vec3; 8],
    volume: f64,
    transform: Transform,
}

impl Cuboid {
    /// Create a box from two opposite corners
    pub fn new(x1: impl IntoVector3, x2: impl IntoVector3) -> Result<Self, ValidationError> {
        let x1 = validation::vector3("x1", x1)?;
        let x2 = validation::vector3("x2", x2)?;

        let center = (x1 + x2) * 0.5;
        let corners = [
            Vec3::new(x1.x, x1.y, x1.z),
            Vec3::new(x2.x, x1.y, x1.z),
            Vec3::new(x2.x, x2.y, x1.z),
            Vec3::new(x1.x, x2.y, x1.z),
            Vec3::new(x1.x, x1.y, x2.z),
            Vec3::new(x2.x, x1.y, x2.z),
            Vec3::new(x2.x, x2.y, x2.z),
            Vec3::new(x1.x, x2.y, x2.z),
        ];
        let volume = decomposed_volume(&faces_of(&corners), &center);
        log::debug!("reference volume: {}", volume);

        Ok(Self {
            x1,
            x2,
            center,
            corners,
            volume,
            transform: Transform::identity(),
        })
    }

    /// World-space positions of the two construction corners
    pub fn position(&self) -> (Vec3, Vec3) {
        (self.calculate_position(&self.x1), self.calculate_position(&self.x2))
    }

    /// World-space center
    pub fn center(&self) -> Vec3 {
        self.calculate_position(&self.center)
    }

    /// World-space corners
    pub fn corners(&self) -> [Vec3; 8] {
        self.corners.map(|c| self.calculate_position(&c))
    }

    /// World-space faces
    pub fn faces(&self) -> [[Vec3; 4]; 6] {
        faces_of(&self.corners())
    }

    /// World-space edges as point pairs
    pub fn edges(&self) -> [(Vec3, Vec3); 12] {
        let corners = self.corners();
        CUBOID_EDGES.map(|(a, b)| (corners[a], corners[b]))
    }

    /// The reference volume
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Local corners as constructed
    pub fn local_corners(&self) -> &[Vec3; 8] {
        &self.corners
    }

    /// Sum of the pyramid volumes from `apex` to every world-space face
    ///
    /// Equals [`Cuboid::volume`] for points inside or on the box and is
    /// strictly larger for points outside.
    pub fn volume_at(&self, apex: &Vec3) -> f64 {
        decomposed_volume(&self.faces(), apex)
    }

    /// Containment test by pyramid decomposition with `rtol = atol`
    pub fn contains_point(&self, point: &Vec3, atol: f64) -> bool {
        crate::foundation::math::utils::is_close_rel(self.volume_at(point), self.volume, atol, atol)
    }
}

impl Transformable for Cuboid {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}

fn faces_of(corners: &[Vec3; 8]) -> [[Vec3; 4]; 6] {
    CUBOID_FACES.map(|face| face.map(|i| corners[i]))
}

fn decomposed_volume(faces: &[[Vec3; 4]; 6], apex: &Vec3) -> f64 {
    faces.iter().map(|face| geometry::pyramid_volume(face, apex)).sum()
}

/// An infinite plane `x · n̂ = d`
///
/// Rotations turn the normal vector; translations only shift the plane by
/// their component along the (rotated) normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vec3,
    offset: f64,
    transform: Transform,
}

impl Plane {
    /// Create a plane from a normal vector and its offset from the origin
    pub fn new(normal: impl IntoVector3, offset: impl IntoScalar) -> Result<Self, ValidationError> {
        let normal = validation::vector3("normal", normal)?;
        if normal.norm() <= f64::EPSILON {
            return Err(ValidationError::ZeroVector { field: "normal".to_string() });
        }
        let offset = validation::scalar("offset", offset)?;
        Ok(Self {
            normal,
            offset,
            transform: Transform::identity(),
        })
    }

    /// The xy plane at the given distance (normal `(0, 0, 1)`)
    pub fn xy(distance: f64) -> Self {
        Self::axis_aligned(Vec3::new(0.0, 0.0, 1.0), distance)
    }

    /// The xz plane at the given distance (normal `(0, 1, 0)`)
    pub fn xz(distance: f64) -> Self {
        Self::axis_aligned(Vec3::new(0.0, 1.0, 0.0), distance)
    }

    /// The yz plane at the given distance (normal `(1, 0, 0)`)
    pub fn yz(distance: f64) -> Self {
        Self::axis_aligned(Vec3::new(1.0, 0.0, 0.0), distance)
    }

    fn axis_aligned(normal: Vec3, offset: f64) -> Self {
        Self {
            normal,
            offset,
            transform: Transform::identity(),
        }
    }

    /// The rotated normal vector; translations do not affect it
    pub fn norm_vector(&self) -> Vec3 {
        self.transform.transform_vector(&self.normal)
    }

    /// Offset from the origin, shifted by the length of the total translation
    /// projected onto the normal
    pub fn distance(&self) -> f64 {
        let shift = geometry::projection_vector(&self.transform.total_translation(), &self.norm_vector());
        self.offset + shift.norm()
    }

    /// Local normal as given at construction
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Offset as given at construction
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Signed distance of a world-space point from this plane
    pub fn signed_distance(&self, point: &Vec3) -> f64 {
        geometry::distance_to_plane(point, &self.norm_vector(), self.distance())
    }
}

impl Transformable for Plane {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}
