//! Orthonormal polynomial trees on `ℝ^d` with Gaussian weight.
//!
//! The polynomials are products of 1-D orthonormal Hermite polynomials,
//! `P_α(x) = Π_i h_{α_i}(x_i)`, orthonormal with respect to `exp(-|x|²)`
//! (physicists) or `exp(-|x|²/2)` (probabilists). Level `D` holds every
//! multi-index with `|α| = D`, flat, in the order of
//! [`multi_indices`](super::multi_index::multi_indices).
//!
//! Level `D + 1` is assembled axis by axis. For axis `i < d - 1` and each
//! remaining degree `k`, one block of level `D` (first `i` exponents zero, axis
//! `i` exponent `D - k`) is raised by one in axis `i` with the 1-D recurrence
//! of step `D - k`; the matching block of level `D - 1` supplies the
//! `c`-term. The last axis contributes the single entry `(0, ..., 0, D + 1)`.

use ndarray::{ArrayD, ArrayViewD, IxDyn};
use tracing::{debug, trace};

use super::kernels::{three_term, two_term};
use super::multi_index::{block_window, count_multi_indices, multi_indices, tail_window};
use crate::config::TreeLimits;
use crate::error::Result;
use crate::points::EvaluationPoints;
use crate::recurrence::{HermiteKind, HermiteStandardization, RecurrenceCoefficients, hermite};
use crate::scalar::Scalar;
use crate::tree::{Level, RecurrenceWindow, Tree};

/// Evaluate the product tree up to degree `n` at stacked coordinates of shape
/// `[d, ...batch]`.
pub fn tree<T: Scalar>(
    n: usize,
    x: ArrayViewD<'_, T>,
    standardization: HermiteStandardization,
) -> Result<Tree<T>> {
    let points = EvaluationPoints::from_stacked(x)?;
    tree_at(n, &points, standardization, &TreeLimits::default())
}

/// Evaluate the product tree at an existing point set.
pub fn tree_at<T: Scalar>(
    n: usize,
    points: &EvaluationPoints<T>,
    standardization: HermiteStandardization,
    limits: &TreeLimits,
) -> Result<Tree<T>> {
    limits.check_degree(n)?;

    debug!(
        degree = n,
        dim = points.n_axes(),
        standardization = %standardization,
        mode = ?T::MODE,
        batch_shape = ?points.batch_shape(),
        "building product tree"
    );

    let rc = hermite(n + 1, HermiteKind::normal(standardization));
    let mut tree = Tree::with_root(root_level(points, &rc), points.batch_shape());

    for degree in 0..n {
        let level = next_level(degree, &tree.window(), points, &rc);
        trace!(degree = degree + 1, entries = level.len(), "product level");
        tree.push(level);
    }

    Ok(tree)
}

/// `p_0^d` broadcast to the batch shape.
fn root_level<T: Scalar>(
    points: &EvaluationPoints<T>,
    rc: &RecurrenceCoefficients<T>,
) -> Level<T> {
    let p0 = (0..points.n_axes()).fold(T::one(), |acc, _| acc * rc.p0.clone());
    vec![ArrayD::from_elem(IxDyn(points.batch_shape()), p0)]
}

/// Level `degree + 1` from the window over levels `degree` and `degree - 1`.
///
/// `rc` must hold at least `degree + 1` steps.
fn next_level<T: Scalar>(
    degree: usize,
    window: &RecurrenceWindow<'_, T>,
    points: &EvaluationPoints<T>,
    rc: &RecurrenceCoefficients<T>,
) -> Level<T> {
    let dim = points.n_axes();
    let mut level = Vec::with_capacity(count_multi_indices(degree + 1, dim));

    for axis in 0..dim - 1 {
        let x = points.axis(axis);
        let tail = tail_window(degree, axis, dim);
        let older_tail = degree
            .checked_sub(1)
            .map(|lower| tail_window(lower, axis, dim));

        for k in 0..=degree {
            let block = block_window(k, axis, dim);
            let step = degree - k;
            let (a, b, c) = (&rc.a[step], &rc.b[step], &rc.c[step]);
            let newer = &window.newer[block.shifted(tail.offset).range()];

            match (step, window.older, older_tail) {
                (1.., Some(older), Some(older_tail)) => {
                    let older = &older[block.shifted(older_tail.offset).range()];
                    level.extend(
                        newer
                            .iter()
                            .zip(older)
                            .map(|(p, q)| three_term(a, b, c, x, p, q)),
                    );
                }
                _ => {
                    debug_assert_eq!(step, 0);
                    level.extend(newer.iter().map(|p| two_term(a, b, x, p)));
                }
            }
        }
    }

    // Pure power of the last axis.
    let x = points.axis(dim - 1);
    let (a, b, c) = (&rc.a[degree], &rc.b[degree], &rc.c[degree]);
    let p = last_entry(window.newer);
    level.push(match window.older {
        Some(older) => three_term(a, b, c, x, p, last_entry(older)),
        None => two_term(a, b, x, p),
    });

    level
}

fn last_entry<T>(level: &[ArrayD<T>]) -> &ArrayD<T> {
    &level[level.len() - 1]
}

/// Lazy iterator over the levels of a product tree.
///
/// Yields level 0, 1, 2, ... without bound, keeping only the two most recent
/// levels and extending the 1-D recurrence coefficients one step at a time.
#[derive(Debug, Clone)]
pub struct ProductLevels<T> {
    points: EvaluationPoints<T>,
    kind: HermiteKind,
    rc: RecurrenceCoefficients<T>,
    older: Option<Level<T>>,
    newer: Option<Level<T>>,
    degree: usize,
}

impl<T: Scalar> ProductLevels<T> {
    /// Iterator over the levels at `points`.
    ///
    /// Same signature as [`TriangleLevels::new`](super::triangle::TriangleLevels::new);
    /// any number of axes is accepted, so this currently never fails.
    pub fn new(
        points: &EvaluationPoints<T>,
        standardization: HermiteStandardization,
    ) -> Result<Self> {
        let kind = HermiteKind::normal(standardization);
        Ok(Self {
            points: points.clone(),
            kind,
            rc: hermite(0, kind),
            older: None,
            newer: None,
            degree: 0,
        })
    }

    /// Pair every level with its multi-degree labels.
    pub fn with_degrees(self) -> impl Iterator<Item = (Vec<Vec<usize>>, Level<T>)> {
        let dim = self.points.n_axes();
        self.enumerate()
            .map(move |(degree, level)| (multi_indices(degree, dim), level))
    }
}

impl<T: Scalar> Iterator for ProductLevels<T> {
    type Item = Level<T>;

    fn next(&mut self) -> Option<Level<T>> {
        let level = match &self.newer {
            None => root_level(&self.points, &self.rc),
            Some(newer) => {
                // `newer` has degree `self.degree - 1`.
                let degree = self.degree - 1;
                self.rc.extend_to(degree + 1, self.kind);
                let window = RecurrenceWindow::new(self.older.as_deref(), newer);
                next_level(degree, &window, &self.points, &self.rc)
            }
        };
        self.older = self.newer.replace(level.clone());
        self.degree += 1;
        Some(level)
    }
}
