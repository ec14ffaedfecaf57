//! Elementwise recurrence kernels over batch-shaped arrays.
//!
//! All operands share the batch shape; the tree builders guarantee this by
//! construction from one [`EvaluationPoints`](crate::points::EvaluationPoints).

use ndarray::{ArrayD, Zip};

use crate::scalar::Scalar;

/// `(a s - b) p`
pub(crate) fn two_term<T: Scalar>(a: &T, b: &T, s: &ArrayD<T>, p: &ArrayD<T>) -> ArrayD<T> {
    Zip::from(s)
        .and(p)
        .map_collect(|s, p| (a.clone() * s.clone() - b.clone()) * p.clone())
}

/// `(a s - b) p - c q`
pub(crate) fn three_term<T: Scalar>(
    a: &T,
    b: &T,
    c: &T,
    s: &ArrayD<T>,
    p: &ArrayD<T>,
    q: &ArrayD<T>,
) -> ArrayD<T> {
    Zip::from(s).and(p).and(q).map_collect(|s, p, q| {
        (a.clone() * s.clone() - b.clone()) * p.clone() - c.clone() * q.clone()
    })
}

/// `d s p`
pub(crate) fn scaled_product<T: Scalar>(d: &T, s: &ArrayD<T>, p: &ArrayD<T>) -> ArrayD<T> {
    Zip::from(s)
        .and(p)
        .map_collect(|s, p| d.clone() * s.clone() * p.clone())
}

/// `d s p - e t q`
pub(crate) fn cross_term<T: Scalar>(
    d: &T,
    e: &T,
    s: &ArrayD<T>,
    t: &ArrayD<T>,
    p: &ArrayD<T>,
    q: &ArrayD<T>,
) -> ArrayD<T> {
    Zip::from(s)
        .and(t)
        .and(p)
        .and(q)
        .map_collect(|s, t, p, q| {
            d.clone() * s.clone() * p.clone() - e.clone() * t.clone() * q.clone()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn test_kernels() {
        let s = arr1(&[1.0, 2.0]).into_dyn();
        let t = arr1(&[3.0, -1.0]).into_dyn();
        let p = arr1(&[0.5, 4.0]).into_dyn();
        let q = arr1(&[2.0, 1.0]).into_dyn();

        assert_eq!(two_term(&2.0, &1.0, &s, &p), arr1(&[0.5, 12.0]).into_dyn());
        assert_eq!(
            three_term(&2.0, &1.0, &3.0, &s, &p, &q),
            arr1(&[-5.5, 9.0]).into_dyn()
        );
        assert_eq!(scaled_product(&2.0, &s, &p), arr1(&[1.0, 16.0]).into_dyn());
        assert_eq!(
            cross_term(&2.0, &1.0, &s, &t, &p, &q),
            arr1(&[-5.0, 17.0]).into_dyn()
        );
    }
}
