//! # Mesh Errors
//!
//! Error types for mesh generation. All failures are explicit; a builder
//! that fails produces no mesh at all.
//!
//! ## Error Policy
//!
//! - Precondition violations (counts, radii) fail fast, never clamp
//! - Degenerate tangents inside a sweep are recovered by the sweep itself
//! - Errors carry a message with the offending values

use thiserror::Error;

/// Errors that can occur during mesh generation.
///
/// ## Example
///
/// ```rust
/// use spring_mesh::{MeshError, math::normalize};
/// use glam::DVec3;
///
/// match normalize(DVec3::ZERO) {
///     Ok(_) => unreachable!(),
///     Err(MeshError::DegenerateVector { message }) => assert!(message.contains("zero")),
///     Err(other) => panic!("unexpected error: {other}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum MeshError {
    /// A zero-length vector was normalized.
    #[error("Degenerate vector: {message}")]
    DegenerateVector {
        /// Description of the vector and where it came from
        message: String,
    },

    /// A builder received a count or radius outside its domain.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the offending parameter
        message: String,
    },

    /// Index stitching was asked to reference vertices that do not exist.
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// Description of the violated lattice contract
        message: String,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Requested vertex count
        count: usize,
        /// Configured limit
        max: usize,
    },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles {
        /// Requested triangle count
        count: usize,
        /// Configured limit
        max: usize,
    },
}

impl MeshError {
    /// Creates a degenerate vector error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateVector {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Returns true for errors a sweep may recover from with a fallback axis.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DegenerateVector { .. })
    }
}

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// PARAMETER CHECKS
// =============================================================================

/// Fails unless `count >= min`.
pub(crate) fn require_count(name: &str, count: u32, min: u32) -> MeshResult<()> {
    if count < min {
        return Err(MeshError::invalid_parameter(format!(
            "{name} must be at least {min}: {count}"
        )));
    }
    Ok(())
}

/// Fails unless `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &str, value: f64) -> MeshResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "{name} must be positive: {value}"
        )));
    }
    Ok(())
}

/// Fails unless `value` is finite and not negative.
pub(crate) fn require_non_negative(name: &str, value: f64) -> MeshResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "{name} must be non-negative: {value}"
        )));
    }
    Ok(())
}

/// Fails unless every component of `point` is finite.
pub(crate) fn require_finite(name: &str, point: glam::DVec3) -> MeshResult<()> {
    if !point.is_finite() {
        return Err(MeshError::invalid_parameter(format!(
            "{name} must be finite: {point:?}"
        )));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_parameter("splits must be at least 3: 2");
        assert!(err.to_string().contains("Invalid parameter"));
        assert!(err.to_string().contains("splits"));

        let err = MeshError::TooManyVertices { count: 11, max: 10 };
        assert_eq!(err.to_string(), "Too many vertices: 11 (max: 10)");
    }

    #[test]
    fn test_only_degenerate_vectors_are_recoverable() {
        assert!(MeshError::degenerate("tangent").is_recoverable());
        assert!(!MeshError::invalid_parameter("radius").is_recoverable());
        assert!(!MeshError::invalid_topology("rings").is_recoverable());
    }

    #[test]
    fn test_parameter_checks() {
        assert!(require_count("splits", 3, 3).is_ok());
        assert!(require_count("splits", 2, 3).is_err());
        assert!(require_positive("radius", 0.0).is_err());
        assert!(require_positive("radius", f64::NAN).is_err());
        assert!(require_non_negative("radius", 0.0).is_ok());
        assert!(require_non_negative("radius", -1.0).is_err());
        assert!(require_finite("center", glam::DVec3::new(0.0, f64::INFINITY, 0.0)).is_err());
    }

    /// Test error types are Send + Sync for async compatibility.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
