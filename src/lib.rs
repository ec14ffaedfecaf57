//! # orthotree
//!
//! Recurrence-based evaluation of orthogonal polynomial trees.
//!
//! A *tree* holds the values of every polynomial up to a total degree `n`,
//! grouped into levels by degree, at a batch of evaluation points. Each level
//! is computed from the two before it, so the cost per point is linear in the
//! number of polynomials.
//!
//! This crate provides:
//! - Triangle trees in barycentric coordinates, unit or orthonormal
//!   ([`polynomial::triangle`])
//! - Orthonormal Hermite product trees on `ℝ^d` ([`polynomial::enr2`])
//! - 1D Hermite trees in monic, classical or normal scaling
//!   ([`polynomial::hermite`])
//! - Floating-point (`f64`) or exact ([`Exact`]) arithmetic through one
//!   generic [`Scalar`] interface
//! - Lazy level iterators and Vandermonde/Gram matrices of finished trees
//!
//! ## Example
//! ```
//! use ndarray::{ArrayD, IxDyn};
//! use orthotree::{HermiteStandardization, polynomial::enr2};
//!
//! // 5 points in ℝ², stacked as [axis, point]
//! let x = ArrayD::from_elem(IxDyn(&[2, 5]), 0.5);
//! let tree = enr2::tree(3, x.view(), HermiteStandardization::Physicists)?;
//! assert_eq!(tree.level(3).map(<[_]>::len), Some(4));
//! # Ok::<(), orthotree::OrthoError>(())
//! ```

pub mod basis;
pub mod config;
pub mod error;
pub mod points;
pub mod polynomial;
pub mod recurrence;
pub mod scalar;
pub mod tree;

// Re-export main types for convenience
pub use basis::Vandermonde;
pub use config::{DEFAULT_MAX_DEGREE, TreeLimits};
pub use error::{OrthoError, Result};
pub use points::EvaluationPoints;
pub use polynomial::{ProductLevels, TriangleLevels, count_multi_indices, multi_indices};
pub use recurrence::{HermiteKind, HermiteScaling, HermiteStandardization, TriangleStandardization};
pub use scalar::{ArithmeticMode, Exact, Scalar};
pub use tree::{Level, Tree};
