//! Validation errors.
//!
//! Every tree builder validates its inputs before any level is computed, so a
//! returned error never accompanies a partially built tree.

use thiserror::Error;

/// Error type for tree construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrthoError {
    /// Standardization identifier not known for the polynomial family.
    #[error("Unknown {family} standardization '{name}' (expected one of: {expected})")]
    UnknownStandardization {
        family: &'static str,
        name: String,
        expected: &'static str,
    },

    /// Negative degree requested.
    #[error("Degree must be non-negative, got {0}")]
    NegativeDegree(i64),

    /// Degree above the configured limit.
    #[error("Degree {degree} exceeds the configured maximum of {max}")]
    DegreeTooLarge { degree: usize, max: usize },

    /// Wrong number of coordinate axes for the domain.
    #[error("Expected {expected} coordinate axes, got {found}")]
    AxisCount { expected: usize, found: usize },

    /// Coordinate arrays cannot be broadcast to a common shape.
    #[error("Coordinate arrays are not broadcastable: shapes {0:?}")]
    ShapeMismatch(Vec<Vec<usize>>),

    /// No coordinate axes were supplied.
    #[error("No coordinate axes supplied")]
    EmptyPoints,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OrthoError>;
