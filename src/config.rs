//! Per-call limits for tree construction.

use crate::error::{OrthoError, Result};

/// Default upper bound on the requested degree.
pub const DEFAULT_MAX_DEGREE: usize = 1024;

/// Limits applied before a tree is built.
///
/// The cost of a tree grows like `n^2` (triangle) or `n^d` (product domain), so
/// an accidental huge degree is rejected up front rather than attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeLimits {
    /// Largest degree accepted by the builders
    pub max_degree: usize,
}

impl Default for TreeLimits {
    fn default() -> Self {
        Self {
            max_degree: DEFAULT_MAX_DEGREE,
        }
    }
}

impl TreeLimits {
    /// Create limits with the default maximum degree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom maximum degree.
    pub fn with_max_degree(mut self, max_degree: usize) -> Self {
        self.max_degree = max_degree;
        self
    }

    /// Check a requested degree against the limit.
    pub fn check_degree(&self, degree: usize) -> Result<usize> {
        if degree > self.max_degree {
            return Err(OrthoError::DegreeTooLarge {
                degree,
                max: self.max_degree,
            });
        }
        Ok(degree)
    }

    /// Convert a degree from a signed source (bindings, parsed input) and check it.
    pub fn signed_degree(&self, degree: i64) -> Result<usize> {
        let degree = usize::try_from(degree).map_err(|_| OrthoError::NegativeDegree(degree))?;
        self.check_degree(degree)
    }
}
