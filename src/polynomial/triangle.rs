//! Orthogonal polynomial trees on the triangle.
//!
//! Evaluates all polynomials `P_{n,r}`, `0 <= r <= n <= N`, at points given in
//! barycentric coordinates `(u, v, w)`. Level `n` of the tree holds the `n + 1`
//! values
//!
//! ```text
//!   (0,0)
//!   (1,0)  (1,1)
//!   (2,0)  (2,1)  (2,2)
//!    ...    ...    ...
//! ```
//!
//! Each level blends three recurrence regimes (see
//! [`recurrence::triangle`](crate::recurrence::triangle)): interior entries use
//! both previous levels, the sub-diagonal entry only the previous one, and the
//! diagonal entry a separate relation in `u - v` and `(u + v)²`.
//!
//! ## Example
//! ```
//! use ndarray::{ArrayD, IxDyn};
//! use orthotree::polynomial::triangle;
//! use orthotree::recurrence::TriangleStandardization;
//!
//! let centroid = ArrayD::from_elem(IxDyn(&[3]), 1.0 / 3.0);
//! let tree = triangle::tree(2, centroid.view(), TriangleStandardization::One)?;
//! assert_eq!(tree.level(1).unwrap()[1].first(), Some(&0.0));
//! # Ok::<(), orthotree::OrthoError>(())
//! ```

use ndarray::{ArrayD, ArrayViewD, IxDyn, Zip};
use tracing::{debug, trace};

use super::kernels::{cross_term, scaled_product, three_term, two_term};
use crate::config::TreeLimits;
use crate::error::Result;
use crate::points::EvaluationPoints;
use crate::recurrence::{
    NormalCoefficients, TriangleCoefficients, TriangleStandardization, UnitCoefficients,
};
use crate::scalar::Scalar;
use crate::tree::{Level, RecurrenceWindow, Tree};

/// Number of barycentric coordinates.
pub const TRIANGLE_AXES: usize = 3;

/// Per-point factors shared by every level.
#[derive(Debug, Clone)]
struct TriangleFactors<T> {
    /// `1 - 2w`
    one_minus_2w: ArrayD<T>,
    /// `u - v`
    u_minus_v: ArrayD<T>,
    /// `(u + v)²`
    u_plus_v_sq: ArrayD<T>,
}

impl<T: Scalar> TriangleFactors<T> {
    fn new(points: &EvaluationPoints<T>) -> Self {
        let (u, v, w) = (points.axis(0), points.axis(1), points.axis(2));
        Self {
            one_minus_2w: w.mapv(|w| T::one() - (w.clone() + w)),
            u_minus_v: Zip::from(u).and(v).map_collect(|u, v| u.clone() - v.clone()),
            u_plus_v_sq: Zip::from(u).and(v).map_collect(|u, v| {
                let s = u.clone() + v.clone();
                s.clone() * s
            }),
        }
    }
}

/// Evaluate the triangle tree up to degree `n` at stacked barycentric
/// coordinates of shape `[3, ...batch]`.
pub fn tree<T: Scalar>(
    n: usize,
    bary: ArrayViewD<'_, T>,
    standardization: TriangleStandardization,
) -> Result<Tree<T>> {
    let points = EvaluationPoints::from_stacked(bary)?;
    tree_at(n, &points, standardization, &TreeLimits::default())
}

/// Evaluate the triangle tree at an existing point set.
pub fn tree_at<T: Scalar>(
    n: usize,
    points: &EvaluationPoints<T>,
    standardization: TriangleStandardization,
    limits: &TreeLimits,
) -> Result<Tree<T>> {
    limits.check_degree(n)?;
    points.expect_axes(TRIANGLE_AXES)?;

    debug!(
        degree = n,
        standardization = %standardization,
        mode = ?T::MODE,
        batch_shape = ?points.batch_shape(),
        "building triangle tree"
    );

    let tree = match standardization {
        TriangleStandardization::One => build(n, points, &UnitCoefficients),
        TriangleStandardization::Normal => build(n, points, &NormalCoefficients),
    };
    Ok(tree)
}

fn build<T, C>(n: usize, points: &EvaluationPoints<T>, coeffs: &C) -> Tree<T>
where
    T: Scalar,
    C: TriangleCoefficients<T>,
{
    let factors = TriangleFactors::new(points);
    let mut tree = Tree::with_root(root_level(points, coeffs), points.batch_shape());

    for degree in 1..=n {
        let level = next_level(degree, &tree.window(), &factors, coeffs);
        trace!(degree, entries = level.len(), "triangle level");
        tree.push(level);
    }

    tree
}

fn root_level<T: Scalar, C: TriangleCoefficients<T>>(
    points: &EvaluationPoints<T>,
    coeffs: &C,
) -> Level<T> {
    vec![ArrayD::from_elem(IxDyn(points.batch_shape()), coeffs.root())]
}

/// Level `degree` from the window over levels `degree - 1` and `degree - 2`.
fn next_level<T, C>(
    degree: usize,
    window: &RecurrenceWindow<'_, T>,
    factors: &TriangleFactors<T>,
    coeffs: &C,
) -> Level<T>
where
    T: Scalar,
    C: TriangleCoefficients<T>,
{
    let prev = window.newer;
    let mut level = Vec::with_capacity(degree + 1);

    match window.older {
        // Level 1 has no level -1: sub-diagonal and diagonal only.
        None => {
            debug_assert_eq!(degree, 1);
            level.push(two_term(
                &coeffs.alpha(1, 0),
                &coeffs.beta(1, 0),
                &factors.one_minus_2w,
                &prev[0],
            ));
            level.push(scaled_product(
                &coeffs.delta(1),
                &factors.u_minus_v,
                &prev[0],
            ));
        }
        Some(prev2) => {
            let l = degree;
            for r in 0..l - 1 {
                level.push(three_term(
                    &coeffs.alpha(l, r),
                    &coeffs.beta(l, r),
                    &coeffs.gamma(l, r),
                    &factors.one_minus_2w,
                    &prev[r],
                    &prev2[r],
                ));
            }
            level.push(two_term(
                &coeffs.alpha(l, l - 1),
                &coeffs.beta(l, l - 1),
                &factors.one_minus_2w,
                &prev[l - 1],
            ));
            level.push(cross_term(
                &coeffs.delta(l),
                &coeffs.epsilon(l),
                &factors.u_minus_v,
                &factors.u_plus_v_sq,
                &prev[l - 1],
                &prev2[l - 2],
            ));
        }
    }

    level
}

/// Lazy iterator over the levels of a triangle tree.
///
/// Yields level 0, 1, 2, ... without bound, keeping only the two most recent
/// levels. Use [`Iterator::take`] to stop at a degree.
#[derive(Debug, Clone)]
pub struct TriangleLevels<T> {
    factors: TriangleFactors<T>,
    batch_shape: Vec<usize>,
    standardization: TriangleStandardization,
    older: Option<Level<T>>,
    newer: Option<Level<T>>,
    degree: usize,
}

impl<T: Scalar> TriangleLevels<T> {
    /// Iterator over the levels at the given barycentric points.
    pub fn new(
        points: &EvaluationPoints<T>,
        standardization: TriangleStandardization,
    ) -> Result<Self> {
        points.expect_axes(TRIANGLE_AXES)?;
        Ok(Self {
            factors: TriangleFactors::new(points),
            batch_shape: points.batch_shape().to_vec(),
            standardization,
            older: None,
            newer: None,
            degree: 0,
        })
    }

    fn advance<C: TriangleCoefficients<T>>(&self, coeffs: &C) -> Level<T> {
        match &self.newer {
            None => vec![ArrayD::from_elem(
                IxDyn(&self.batch_shape),
                coeffs.root(),
            )],
            Some(newer) => {
                let window = RecurrenceWindow::new(self.older.as_deref(), newer);
                next_level(self.degree, &window, &self.factors, coeffs)
            }
        }
    }
}

impl<T: Scalar> Iterator for TriangleLevels<T> {
    type Item = Level<T>;

    fn next(&mut self) -> Option<Level<T>> {
        let level = match self.standardization {
            TriangleStandardization::One => self.advance(&UnitCoefficients),
            TriangleStandardization::Normal => self.advance(&NormalCoefficients),
        };
        self.older = self.newer.replace(level.clone());
        self.degree += 1;
        Some(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrthoError;
    use crate::scalar::Exact;
    use ndarray::Array;

    fn bary_points(points: &[(f64, f64)]) -> ArrayD<f64> {
        let mut data = Vec::with_capacity(3 * points.len());
        data.extend(points.iter().map(|p| p.0));
        data.extend(points.iter().map(|p| p.1));
        data.extend(points.iter().map(|p| 1.0 - p.0 - p.1));
        Array::from_shape_vec(IxDyn(&[3, points.len()]), data).unwrap()
    }

    #[test]
    fn test_level_one_closed_form() {
        let bary = bary_points(&[(0.2, 0.3), (0.6, 0.1)]);
        let tree = tree(1, bary.view(), TriangleStandardization::One).unwrap();
        let level = tree.level(1).unwrap();

        for j in 0..2 {
            let (u, v, w) = (bary[[0, j]], bary[[1, j]], bary[[2, j]]);
            // P_{1,0} = 3/2 (1-2w) - 1/2,  P_{1,1} = u - v
            assert!((level[0][[j]] - (1.5 * (1.0 - 2.0 * w) - 0.5)).abs() < 1e-14);
            assert!((level[1][[j]] - (u - v)).abs() < 1e-14);
        }
    }

    #[test]
    fn test_level_sizes() {
        let bary = bary_points(&[(0.1, 0.1)]);
        let tree = tree(6, bary.view(), TriangleStandardization::Normal).unwrap();
        assert_eq!(tree.n_levels(), 7);
        for (l, level) in tree.iter().enumerate() {
            assert_eq!(level.len(), l + 1);
        }
    }

    #[test]
    fn test_normal_is_scaled_unit() {
        // normal P_{n,r} = √((2r+1)(2n+2)) · unit P_{n,r}
        let bary = bary_points(&[(0.15, 0.35), (0.7, 0.05), (0.0, 1.0)]);
        let unit = tree(5, bary.view(), TriangleStandardization::One).unwrap();
        let normal = tree(5, bary.view(), TriangleStandardization::Normal).unwrap();

        for n in 0..=5 {
            for r in 0..=n {
                let scale = (((2 * r + 1) * (2 * n + 2)) as f64).sqrt();
                let a = &unit.level(n).unwrap()[r];
                let b = &normal.level(n).unwrap()[r];
                for (x, y) in a.iter().zip(b.iter()) {
                    assert!((scale * x - y).abs() < 1e-11, "n={}, r={}", n, r);
                }
            }
        }
    }

    #[test]
    fn test_iterator_matches_tree() {
        let bary = bary_points(&[(0.25, 0.5), (0.3, 0.3)]);
        let points = EvaluationPoints::from_stacked(bary.view()).unwrap();
        let tree = tree_at(
            4,
            &points,
            TriangleStandardization::Normal,
            &TreeLimits::default(),
        )
        .unwrap();
        let levels: Vec<_> = TriangleLevels::new(&points, TriangleStandardization::Normal)
            .unwrap()
            .take(5)
            .collect();
        assert_eq!(levels, tree.into_levels());
    }

    #[test]
    fn test_exact_level_two_at_rational_point() {
        let third = Exact::from_ratio(1, 3);
        let bary = Array::from_shape_vec(
            IxDyn(&[3]),
            vec![Exact::from_ratio(1, 2), Exact::from_ratio(1, 6), third],
        )
        .unwrap();
        let tree = tree(2, bary.view(), TriangleStandardization::One).unwrap();
        let level = tree.level(2).unwrap();

        // P_{2,2} = 3/2 (u-v) P_{1,1} - 1/2 (u+v)² = 3/2·1/9 - 1/2·4/9 = -1/18
        assert_eq!(level[2].first(), Some(&Exact::from_ratio(-1, 18)));
    }

    #[test]
    fn test_rejects_wrong_axis_count() {
        let coords = ArrayD::from_elem(IxDyn(&[2, 4]), 0.25);
        assert_eq!(
            tree(3, coords.view(), TriangleStandardization::One),
            Err(OrthoError::AxisCount {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_rejects_degree_over_limit() {
        let bary = bary_points(&[(0.2, 0.2)]);
        let points = EvaluationPoints::from_stacked(bary.view()).unwrap();
        let limits = TreeLimits::new().with_max_degree(3);
        assert!(matches!(
            tree_at(4, &points, TriangleStandardization::One, &limits),
            Err(OrthoError::DegreeTooLarge { degree: 4, max: 3 })
        ));
    }
}
