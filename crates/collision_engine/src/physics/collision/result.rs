//! Structured outcome of a collision query

use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key of the collision flag
pub const COLLISION_KEY: &str = "collision";

/// A diagnostic value stored in a [`CollisionResult`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultValue {
    /// Boolean flag
    Bool(bool),
    /// Integer count
    Int(i64),
    /// Scalar measurement
    Float(f64),
    /// Classification tag
    Text(String),
    /// A point or direction
    Vector(Vec3),
    /// An ordered list of points, e.g. an intersection polygon
    Points(Vec<Vec3>),
}

impl ResultValue {
    /// The scalar, if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// The text, if this is a tag
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The vector, if this is a point or direction
    pub fn as_vector(&self) -> Option<&Vec3> {
        match self {
            Self::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// The points, if this is a point list
    pub fn as_points(&self) -> Option<&[Vec3]> {
        match self {
            Self::Points(p) => Some(p),
            _ => None,
        }
    }

    /// The count, if this is an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// The flag, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for ResultValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ResultValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<usize> for ResultValue {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for ResultValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ResultValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ResultValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec3> for ResultValue {
    fn from(value: Vec3) -> Self {
        Self::Vector(value)
    }
}

impl From<Vec<Vec3>> for ResultValue {
    fn from(value: Vec<Vec3>) -> Self {
        Self::Points(value)
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "'{s}'"),
            Self::Vector(v) => write!(f, "[{}, {}, {}]", v.x, v.y, v.z),
            Self::Points(points) => {
                write!(f, "[")?;
                for (i, v) in points.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[{}, {}, {}]", v.x, v.y, v.z)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Outcome of a collision query
///
/// Holds the collision flag (false until a predicate sets it) plus the
/// diagnostic data the predicate produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollisionResult {
    collision: bool,
    data: BTreeMap<String, ResultValue>,
}

impl CollisionResult {
    /// Create an empty, non-colliding result
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the query found a collision
    pub fn collision(&self) -> bool {
        self.collision
    }

    /// Alias of [`CollisionResult::collision`]
    pub fn is_collision(&self) -> bool {
        self.collision
    }

    /// Set the collision flag
    pub fn set_collision(&mut self, collision: bool) {
        self.collision = collision;
    }

    /// Store a value; a boolean under `"collision"` sets the flag
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ResultValue>) {
        let key = key.into();
        let value = value.into();
        match (key.as_str(), &value) {
            (COLLISION_KEY, ResultValue::Bool(flag)) => self.collision = *flag,
            _ => {
                self.data.insert(key, value);
            }
        }
    }

    /// Look up a value; `"collision"` returns the flag
    pub fn get(&self, key: &str) -> Option<ResultValue> {
        if key == COLLISION_KEY {
            Some(ResultValue::Bool(self.collision))
        } else {
            self.data.get(key).cloned()
        }
    }

    /// Borrow a diagnostic value
    pub fn value(&self, key: &str) -> Option<&ResultValue> {
        self.data.get(key)
    }

    /// Shorthand for a float diagnostic
    pub fn float(&self, key: &str) -> Option<f64> {
        self.data.get(key).and_then(ResultValue::as_float)
    }

    /// Iterate over all entries except the collision flag
    pub fn items(&self) -> impl Iterator<Item = (&str, &ResultValue)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of diagnostic entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether there are no diagnostic entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<&CollisionResult> for bool {
    fn from(result: &CollisionResult) -> Self {
        result.collision
    }
}

impl fmt::Display for CollisionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{collision: {}, data: {{", self.collision)?;
        for (i, (key, value)) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{key}': {value}")?;
        }
        write!(f, "}}}}")
    }
}
