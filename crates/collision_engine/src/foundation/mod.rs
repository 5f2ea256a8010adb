//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types, the accumulating transform and rotation constructors
//! - Stateless vector and plane geometry
//! - Input coercion and validation
//! - Logging utilities

pub mod math;
pub mod geometry;
pub mod validation;
pub mod logging;
