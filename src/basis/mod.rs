//! Matrix views of polynomial trees.
//!
//! This module provides the Vandermonde matrix of a tree, with Gram matrices
//! and weighted projections built on it.

mod vandermonde;

pub use vandermonde::Vandermonde;
