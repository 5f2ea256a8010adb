//! Configuration system
//!
//! Collision queries are tuned through [`CollisionOptions`], which can be
//! built in code or loaded from TOML/RON files via the [`Config`] trait.
//! Unknown keys in a configuration file are ignored.

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::DEFAULT_ATOL;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            Self::from_toml_str(&contents)
        } else if path.ends_with(".ron") {
            Self::from_ron_str(&contents)
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Parse configuration from TOML text
    fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse configuration from RON text
    fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Options recognized by collision queries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionOptions {
    /// Tolerance for equality and containment comparisons
    pub atol: f64,

    /// Emit a diagnostic trace of every predicate step
    pub verbose: bool,

    /// Also report a sphere that penetrates a plane deeper than `atol`
    ///
    /// Off by default: the sphere-plane test then only reports surface
    /// contact (`|outer distance| <= atol`).
    pub sphere_plane_penetration: bool,
}

impl Default for CollisionOptions {
    fn default() -> Self {
        Self {
            atol: DEFAULT_ATOL,
            verbose: false,
            sphere_plane_penetration: false,
        }
    }
}

impl Config for CollisionOptions {}

impl CollisionOptions {
    /// Builder pattern: Set the comparison tolerance
    pub fn with_atol(mut self, atol: f64) -> Self {
        self.atol = atol;
        self
    }

    /// Builder pattern: Enable or disable the diagnostic trace
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builder pattern: Count deep sphere-plane penetration as a collision
    pub fn with_sphere_plane_penetration(mut self, enabled: bool) -> Self {
        self.sphere_plane_penetration = enabled;
        self
    }
}
