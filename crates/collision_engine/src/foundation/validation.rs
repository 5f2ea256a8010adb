//! Input coercion for constructor and mutator arguments
//!
//! Loosely typed inputs (slices, tuples, comma separated strings) are turned
//! into fixed-size vectors and matrices here, so the collision core only ever
//! sees validated `Vec3`/`Mat3` values.

use crate::foundation::math::{Mat3, Vec3};
use thiserror::Error;

/// Errors raised while validating construction or mutation inputs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Wrong number of components
    #[error("{field}: expected {expected} values, found {found}")]
    WrongLength {
        /// Name of the offending field
        field: String,
        /// Required number of components
        expected: usize,
        /// Number of components supplied
        found: usize,
    },

    /// A component could not be parsed as a number
    #[error("{field}: '{value}' is not a number")]
    NotANumber {
        /// Name of the offending field
        field: String,
        /// The raw text that failed to parse
        value: String,
    },

    /// A value that must be strictly positive was not
    #[error("{field}: value {value} must be positive")]
    NonPositive {
        /// Name of the offending field
        field: String,
        /// The rejected value
        value: f64,
    },

    /// NaN or infinite component
    #[error("{field}: value is not finite")]
    NotFinite {
        /// Name of the offending field
        field: String,
    },

    /// A direction vector of zero length
    #[error("{field}: vector has zero length")]
    ZeroVector {
        /// Name of the offending field
        field: String,
    },
}

/// Conversion into a validated 3D vector
pub trait IntoVector3 {
    /// Convert, naming `field` in any error
    fn into_vector3(self, field: &str) -> Result<Vec3, ValidationError>;
}

/// Conversion into a validated scalar
pub trait IntoScalar {
    /// Convert, naming `field` in any error
    fn into_scalar(self, field: &str) -> Result<f64, ValidationError>;
}

/// Coerce `input` into a finite `Vec3`
pub fn vector3(field: &str, input: impl IntoVector3) -> Result<Vec3, ValidationError> {
    let v = input.into_vector3(field)?;
    if v.iter().all(|c| c.is_finite()) {
        Ok(v)
    } else {
        Err(ValidationError::NotFinite { field: field.to_string() })
    }
}

/// Coerce `input` into a finite scalar
pub fn scalar(field: &str, input: impl IntoScalar) -> Result<f64, ValidationError> {
    let value = input.into_scalar(field)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field: field.to_string() })
    }
}

/// Require a strictly positive value
pub fn positive(field: &str, value: f64) -> Result<f64, ValidationError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NonPositive { field: field.to_string(), value })
    }
}

/// Build a 3x3 matrix from nine row-major values
pub fn matrix3(field: &str, values: &[f64]) -> Result<Mat3, ValidationError> {
    if values.len() != 9 {
        return Err(ValidationError::WrongLength {
            field: field.to_string(),
            expected: 9,
            found: values.len(),
        });
    }
    if !values.iter().all(|c| c.is_finite()) {
        return Err(ValidationError::NotFinite { field: field.to_string() });
    }
    Ok(Mat3::from_row_slice(values))
}

/// Build a 3x3 matrix from three rows of three values
pub fn matrix3_from_rows(field: &str, rows: &[&[f64]]) -> Result<Mat3, ValidationError> {
    if rows.len() != 3 {
        return Err(ValidationError::WrongLength {
            field: field.to_string(),
            expected: 3,
            found: rows.len(),
        });
    }
    let mut flat = Vec::with_capacity(9);
    for row in rows {
        if row.len() != 3 {
            return Err(ValidationError::WrongLength {
                field: field.to_string(),
                expected: 3,
                found: row.len(),
            });
        }
        flat.extend_from_slice(row);
    }
    matrix3(field, &flat)
}

fn parse_component(field: &str, text: &str) -> Result<f64, ValidationError> {
    text.trim().parse::<f64>().map_err(|_| ValidationError::NotANumber {
        field: field.to_string(),
        value: text.trim().to_string(),
    })
}

impl IntoVector3 for Vec3 {
    fn into_vector3(self, _field: &str) -> Result<Vec3, ValidationError> {
        Ok(self)
    }
}

impl IntoVector3 for &Vec3 {
    fn into_vector3(self, _field: &str) -> Result<Vec3, ValidationError> {
        Ok(*self)
    }
}

impl IntoVector3 for [f64; 3] {
    fn into_vector3(self, _field: &str) -> Result<Vec3, ValidationError> {
        Ok(Vec3::from(self))
    }
}

impl IntoVector3 for (f64, f64, f64) {
    fn into_vector3(self, _field: &str) -> Result<Vec3, ValidationError> {
        Ok(Vec3::new(self.0, self.1, self.2))
    }
}

impl IntoVector3 for &[f64] {
    fn into_vector3(self, field: &str) -> Result<Vec3, ValidationError> {
        if self.len() == 3 {
            Ok(Vec3::from_column_slice(self))
        } else {
            Err(ValidationError::WrongLength {
                field: field.to_string(),
                expected: 3,
                found: self.len(),
            })
        }
    }
}

impl IntoVector3 for Vec<f64> {
    fn into_vector3(self, field: &str) -> Result<Vec3, ValidationError> {
        self.as_slice().into_vector3(field)
    }
}

impl IntoVector3 for &[&str] {
    fn into_vector3(self, field: &str) -> Result<Vec3, ValidationError> {
        if self.len() != 3 {
            return Err(ValidationError::WrongLength {
                field: field.to_string(),
                expected: 3,
                found: self.len(),
            });
        }
        Ok(Vec3::new(
            parse_component(field, self[0])?,
            parse_component(field, self[1])?,
            parse_component(field, self[2])?,
        ))
    }
}

/// Comma separated components, e.g. `"1, 2, 3"`
impl IntoVector3 for &str {
    fn into_vector3(self, field: &str) -> Result<Vec3, ValidationError> {
        let parts: Vec<&str> = self.split(',').collect();
        parts.as_slice().into_vector3(field)
    }
}

impl IntoVector3 for String {
    fn into_vector3(self, field: &str) -> Result<Vec3, ValidationError> {
        self.as_str().into_vector3(field)
    }
}

impl IntoScalar for f64 {
    fn into_scalar(self, _field: &str) -> Result<f64, ValidationError> {
        Ok(self)
    }
}

impl IntoScalar for f32 {
    fn into_scalar(self, _field: &str) -> Result<f64, ValidationError> {
        Ok(f64::from(self))
    }
}

impl IntoScalar for i32 {
    fn into_scalar(self, _field: &str) -> Result<f64, ValidationError> {
        Ok(f64::from(self))
    }
}

impl IntoScalar for &str {
    fn into_scalar(self, field: &str) -> Result<f64, ValidationError> {
        parse_component(field, self)
    }
}
