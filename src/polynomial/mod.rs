//! Polynomial tree builders.
//!
//! This module provides:
//! - Orthogonal polynomials on the triangle, in barycentric coordinates
//! - Orthonormal products of Hermite polynomials on `ℝ^d` (enr2)
//! - 1D Hermite polynomials
//! - Multi-index ordering of product-domain levels

pub mod enr2;
pub mod hermite;
mod kernels;
pub mod multi_index;
pub mod triangle;

pub use enr2::ProductLevels;
pub use multi_index::{count_multi_indices, multi_indices};
pub use triangle::{TRIANGLE_AXES, TriangleLevels};
