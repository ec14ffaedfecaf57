//! Vandermonde matrix of a polynomial tree.
//!
//! The Vandermonde matrix V connects point values and modal coefficients:
//! - V[i,j] = φ_j(x_i) where φ_j is the j-th polynomial of the tree and x_i is
//!   the i-th point of the batch (row-major flattening)
//! - values = V * coeffs
//! - G = V^T W V is the discrete Gram matrix under quadrature weights W
//!
//! Columns run level by level: all of degree 0, then degree 1, and so on, so
//! the column of `(degree, entry)` is the number of modes below `degree` plus
//! `entry`. For an orthonormal tree and an exact quadrature, G is the identity.

use faer::{Mat, linalg::solvers::Solve};

use crate::error::{OrthoError, Result};
use crate::tree::Tree;

/// Point-by-mode matrix of tree values.
#[derive(Clone)]
pub struct Vandermonde {
    /// V[i,j] = φ_j(x_i)
    pub v: Mat<f64>,
    /// First column of every level
    level_offsets: Vec<usize>,
}

impl Vandermonde {
    /// Flatten a tree into its Vandermonde matrix.
    pub fn from_tree(tree: &Tree<f64>) -> Self {
        let n_points: usize = tree.batch_shape().iter().product();
        let mut v = Mat::zeros(n_points, tree.n_modes());
        let mut level_offsets = Vec::with_capacity(tree.n_levels());

        let mut j = 0;
        for level in tree {
            level_offsets.push(j);
            for values in level {
                for (i, &value) in values.iter().enumerate() {
                    v[(i, j)] = value;
                }
                j += 1;
            }
        }

        Self { v, level_offsets }
    }

    /// Number of points (rows).
    pub fn n_points(&self) -> usize {
        self.v.nrows()
    }

    /// Number of polynomials (columns).
    pub fn n_modes(&self) -> usize {
        self.v.ncols()
    }

    /// Column of entry `entry` of level `degree`.
    pub fn mode_index(&self, degree: usize, entry: usize) -> usize {
        self.level_offsets[degree] + entry
    }

    /// Gram matrix `V^T diag(weights) V`.
    pub fn gram(&self, weights: &[f64]) -> Result<Mat<f64>> {
        self.check_points(weights.len())?;

        let m = self.n_modes();
        let mut g = Mat::<f64>::zeros(m, m);
        for a in 0..m {
            for b in a..m {
                let mut sum = 0.0;
                for (i, &w) in weights.iter().enumerate() {
                    sum += w * self.v[(i, a)] * self.v[(i, b)];
                }
                g[(a, b)] = sum;
                g[(b, a)] = sum;
            }
        }
        Ok(g)
    }

    /// Point values `V * coeffs` of a modal expansion.
    pub fn evaluate(&self, coeffs: &[f64]) -> Result<Vec<f64>> {
        if coeffs.len() != self.n_modes() {
            return Err(OrthoError::ShapeMismatch(vec![
                vec![self.n_modes()],
                vec![coeffs.len()],
            ]));
        }

        Ok((0..self.n_points())
            .map(|i| {
                coeffs
                    .iter()
                    .enumerate()
                    .map(|(j, &c)| self.v[(i, j)] * c)
                    .sum()
            })
            .collect())
    }

    /// Weighted least-squares coefficients of `values`.
    ///
    /// Solves `G c = V^T W f`; with an exact quadrature and an orthonormal tree
    /// this is the discrete projection onto the tree's span.
    pub fn project(&self, values: &[f64], weights: &[f64]) -> Result<Vec<f64>> {
        self.check_points(values.len())?;
        let g = self.gram(weights)?;

        let m = self.n_modes();
        let mut rhs = Mat::<f64>::zeros(m, 1);
        for j in 0..m {
            let mut sum = 0.0;
            for i in 0..self.n_points() {
                sum += weights[i] * self.v[(i, j)] * values[i];
            }
            rhs[(j, 0)] = sum;
        }

        let lu = g.as_ref().full_piv_lu();
        let coeffs = lu.solve(&rhs);
        Ok((0..m).map(|j| coeffs[(j, 0)]).collect())
    }

    fn check_points(&self, len: usize) -> Result<()> {
        if len == self.n_points() {
            Ok(())
        } else {
            Err(OrthoError::ShapeMismatch(vec![
                vec![self.n_points()],
                vec![len],
            ]))
        }
    }
}
