//! 1-D Hermite polynomial trees.
//!
//! A 1-D tree has a single entry per level, `p_k(x)` for `k = 0..=n`,
//! computed with the three-term recurrence of the chosen [`HermiteKind`].

use ndarray::{ArrayD, ArrayViewD};
use tracing::debug;

use super::kernels::{three_term, two_term};
use crate::config::TreeLimits;
use crate::error::Result;
use crate::recurrence::{HermiteKind, hermite};
use crate::scalar::Scalar;
use crate::tree::Tree;

/// Evaluate `p_0, ..., p_n` at every entry of `x`.
///
/// The batch shape of the tree is the shape of `x`.
pub fn tree<T: Scalar>(n: usize, x: ArrayViewD<'_, T>, kind: HermiteKind) -> Result<Tree<T>> {
    tree_at(n, x, kind, &TreeLimits::default())
}

/// Evaluate the 1-D tree under custom limits.
pub fn tree_at<T: Scalar>(
    n: usize,
    x: ArrayViewD<'_, T>,
    kind: HermiteKind,
    limits: &TreeLimits,
) -> Result<Tree<T>> {
    limits.check_degree(n)?;

    debug!(
        degree = n,
        standardization = %kind.standardization,
        scaling = ?kind.scaling,
        mode = ?T::MODE,
        batch_shape = ?x.shape(),
        "building hermite tree"
    );

    let rc = hermite::<T>(n, kind);
    let x = x.to_owned();
    let mut tree = Tree::with_root(
        vec![ArrayD::from_elem(x.raw_dim(), rc.p0.clone())],
        x.shape(),
    );

    for k in 0..n {
        let window = tree.window();
        let p = &window.newer[0];
        let next = match window.older {
            Some(older) => three_term(&rc.a[k], &rc.b[k], &rc.c[k], &x, p, &older[0]),
            None => two_term(&rc.a[k], &rc.b[k], &x, p),
        };
        tree.push(vec![next]);
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrthoError;
    use crate::recurrence::{HermiteScaling, HermiteStandardization};
    use crate::scalar::Exact;
    use ndarray::arr1;
    use std::f64::consts::PI;

    fn values(tree: &Tree<f64>, k: usize) -> Vec<f64> {
        tree.level(k).unwrap()[0].iter().copied().collect()
    }

    #[test]
    fn test_classical_physicists() {
        let x = arr1(&[-1.0, 0.0, 0.5, 2.0]).into_dyn();
        let kind = HermiteKind::new(HermiteStandardization::Physicists, HermiteScaling::Classical);
        let tree = tree(3, x.view(), kind).unwrap();

        for (j, &xj) in x.iter().enumerate() {
            assert_eq!(values(&tree, 0)[j], 1.0);
            assert!((values(&tree, 1)[j] - 2.0 * xj).abs() < 1e-14);
            assert!((values(&tree, 2)[j] - (4.0 * xj * xj - 2.0)).abs() < 1e-14);
            assert!((values(&tree, 3)[j] - (8.0 * xj.powi(3) - 12.0 * xj)).abs() < 1e-13);
        }
    }

    #[test]
    fn test_classical_probabilists() {
        let x = arr1(&[-1.5, 0.3, 1.0]).into_dyn();
        let kind = HermiteKind::new(HermiteStandardization::Probabilists, HermiteScaling::Classical);
        let tree = tree(3, x.view(), kind).unwrap();

        for (j, &xj) in x.iter().enumerate() {
            assert!((values(&tree, 2)[j] - (xj * xj - 1.0)).abs() < 1e-14);
            assert!((values(&tree, 3)[j] - (xj.powi(3) - 3.0 * xj)).abs() < 1e-13);
        }
    }

    #[test]
    fn test_normal_is_scaled_classical() {
        // h_k = H_k / sqrt(2^k k! sqrt(π))
        let x = arr1(&[-0.7, 0.2, 1.3]).into_dyn();
        let classical = tree(
            6,
            x.view(),
            HermiteKind::new(HermiteStandardization::Physicists, HermiteScaling::Classical),
        )
        .unwrap();
        let normal = tree(
            6,
            x.view(),
            HermiteKind::normal(HermiteStandardization::Physicists),
        )
        .unwrap();

        let mut norm_sq = PI.sqrt();
        for k in 0..=6 {
            if k > 0 {
                norm_sq *= 2.0 * k as f64;
            }
            for j in 0..3 {
                let expected = values(&classical, k)[j] / norm_sq.sqrt();
                assert!((values(&normal, k)[j] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_batch_shape_preserved() {
        let x = ArrayD::from_elem(ndarray::IxDyn(&[2, 3, 4]), 0.5);
        let tree = tree(4, x.view(), HermiteKind::default()).unwrap();
        assert_eq!(tree.batch_shape(), &[2, 3, 4]);
        assert_eq!(tree.n_modes(), 5);
        assert!(tree.iter().all(|level| level.len() == 1));
    }

    #[test]
    fn test_degree_limits() {
        let x = arr1(&[0.25]).into_dyn();
        let kind = HermiteKind::normal(HermiteStandardization::Physicists);

        assert_eq!(
            tree(1100, x.view(), kind),
            Err(OrthoError::DegreeTooLarge {
                degree: 1100,
                max: 1024
            })
        );

        let limits = TreeLimits::new().with_max_degree(2000);
        let high = tree_at(1100, x.view(), kind, &limits).unwrap();
        assert_eq!(high.n_levels(), 1101);
        assert!(high.iter().all(|level| level[0][[0]].is_finite()));

        let low = TreeLimits::new().with_max_degree(2);
        assert!(tree_at(3, x.view(), kind, &low).is_err());
    }

    #[test]
    fn test_exact_matches_float() {
        let kind = HermiteKind::normal(HermiteStandardization::Probabilists);
        let x = arr1(&[Exact::from(1_i64), Exact::from(-2_i64)]).into_dyn();
        let exact = tree(5, x.view(), kind).unwrap().to_f64();
        let float = tree(5, arr1(&[1.0, -2.0]).into_dyn().view(), kind).unwrap();

        for k in 0..=5 {
            for j in 0..2 {
                let (e, f) = (values(&exact, k)[j], values(&float, k)[j]);
                assert!((e - f).abs() <= 1e-12 * f.abs().max(1.0));
            }
        }
    }
}
