//! Math utilities and types
//!
//! Provides the double precision vector and matrix types used by the
//! collision engine, the accumulating [`Transform`] owned by every primitive,
//! and rotation matrix constructors.

pub use nalgebra::{Matrix3, Matrix4, Unit, Vector3, Vector4};

use crate::foundation::validation::ValidationError;

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// 4D (homogeneous) vector type
pub type Vec4 = Vector4<f64>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f64>;

/// 4x4 homogeneous matrix type
pub type Mat4 = Matrix4<f64>;

/// Default absolute tolerance for equality and containment comparisons
pub const DEFAULT_ATOL: f64 = 1e-8;

/// Accumulated rigid-body transform of a collision primitive
///
/// Rotations are pre-multiplied onto the homogeneous matrix, translations are
/// summed into its translation column, and the post-translation is added to
/// every transformed point after the homogeneous transform has been applied.
/// The transform is only ever mutated through the three setters; there is no
/// way to reset it.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Composed homogeneous matrix (rotation block + translation column)
    matrix: Mat4,

    /// Offset applied outside the rotated frame
    post_translation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            matrix: Mat4::identity(),
            post_translation: Vec3::zeros(),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// The composed 3x3 rotation block
    pub fn rotation(&self) -> Mat3 {
        self.matrix.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// The accumulated translation column
    pub fn translation(&self) -> Vec3 {
        self.matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// The accumulated post-translation
    pub fn post_translation(&self) -> Vec3 {
        self.post_translation
    }

    /// The full homogeneous matrix
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Compose a new rotation on top of the existing transform
    ///
    /// The newest rotation acts on the current world frame:
    /// `matrix = embed(rotation) * matrix`. Orthonormality is not checked.
    pub fn set_rotation(&mut self, rotation: &Mat3) {
        let mut embedded = Mat4::identity();
        embedded.fixed_view_mut::<3, 3>(0, 0).copy_from(rotation);
        self.matrix = embedded * self.matrix;
    }

    /// Add a translation to the translation column
    ///
    /// Successive translations sum; they are not warped by rotations set in
    /// between.
    pub fn set_translation(&mut self, translation: &Vec3) {
        let mut column = self.matrix.fixed_view_mut::<3, 1>(0, 3);
        column += translation;
    }

    /// Add to the post-translation applied after the homogeneous transform
    pub fn set_post_translation(&mut self, translation: &Vec3) {
        self.post_translation += translation;
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let lifted = self.matrix * point.push(1.0);
        lifted.xyz() + self.post_translation
    }

    /// Apply only the rotation block to a direction vector
    pub fn transform_vector(&self, vector: &Vec3) -> Vec3 {
        self.rotation() * vector
    }

    /// Sum of the translation column and the post-translation
    pub fn total_translation(&self) -> Vec3 {
        self.translation() + self.post_translation
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f64 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f64 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * constants::RAD_TO_DEG
    }

    /// Absolute tolerance comparison, `|a - b| <= atol`
    pub fn is_close(a: f64, b: f64, atol: f64) -> bool {
        approx::abs_diff_eq!(a, b, epsilon = atol)
    }

    /// Combined tolerance comparison, `|a - b| <= atol + rtol * |b|`
    ///
    /// Asymmetric in `a` and `b`: `b` is the reference value.
    pub fn is_close_rel(a: f64, b: f64, rtol: f64, atol: f64) -> bool {
        (a - b).abs() <= atol + rtol * b.abs()
    }

    /// Sign of a value, with `sign(0) == 0`
    pub fn sign(value: f64) -> f64 {
        if value > 0.0 {
            1.0
        } else if value < 0.0 {
            -1.0
        } else {
            0.0
        }
    }
}

/// Extension trait for Mat3 with rotation constructors (angles in degrees)
pub trait Mat3Ext: Sized {
    /// Rotation about an arbitrary axis
    ///
    /// The axis is normalized first; a zero-length axis is rejected.
    fn rotation_about(axis: &Vec3, degrees: f64) -> Result<Self, ValidationError>;

    /// Create a rotation matrix around the X axis
    fn rotation_x(degrees: f64) -> Self;

    /// Create a rotation matrix around the Y axis
    fn rotation_y(degrees: f64) -> Self;

    /// Create a rotation matrix around the Z axis
    fn rotation_z(degrees: f64) -> Self;
}

impl Mat3Ext for Mat3 {
    fn rotation_about(axis: &Vec3, degrees: f64) -> Result<Self, ValidationError> {
        let axis = Unit::try_new(*axis, f64::EPSILON).ok_or(ValidationError::ZeroVector {
            field: "axis".to_string(),
        })?;
        Ok(nalgebra::Rotation3::from_axis_angle(&axis, utils::deg_to_rad(degrees)).into_inner())
    }

    fn rotation_x(degrees: f64) -> Self {
        nalgebra::Rotation3::from_axis_angle(&Vec3::x_axis(), utils::deg_to_rad(degrees))
            .into_inner()
    }

    fn rotation_y(degrees: f64) -> Self {
        nalgebra::Rotation3::from_axis_angle(&Vec3::y_axis(), utils::deg_to_rad(degrees))
            .into_inner()
    }

    fn rotation_z(degrees: f64) -> Self {
        nalgebra::Rotation3::from_axis_angle(&Vec3::z_axis(), utils::deg_to_rad(degrees))
            .into_inner()
    }
}
