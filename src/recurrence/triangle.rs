//! Recurrence coefficients for orthogonal polynomials on the triangle.
//!
//! With barycentric coordinates `(u, v, w)` the polynomials `P_{n,r}` of level
//! `n` satisfy (Rababah, *Recurrence Relations for Orthogonal Polynomials on
//! Triangular Domains*, Mathematics 4(2), 2016):
//!
//! ```text
//! P_{n,r}   = (α(n,r)(1-2w) - β(n,r)) P_{n-1,r} - γ(n,r) P_{n-2,r}    r < n-1
//! P_{n,n-1} = (α(n,n-1)(1-2w) - β(n,n-1)) P_{n-1,n-1}
//! P_{n,n}   = δ(n)(u-v) P_{n-1,n-1} - ε(n)(u+v)² P_{n-2,n-2}
//! ```
//!
//! Two standardizations share this structure:
//! - `"1"`: `P_{0,0} = 1`, with `∫_T P_{n,r}² = 1 / ((2r+1)(2n+2))`
//! - `"normal"`: orthonormal on the reference triangle of area 1/2,
//!   `P_{0,0} = √2`, i.e. `"1"` scaled by `√((2r+1)(2n+2))`

use std::fmt;
use std::str::FromStr;

use crate::error::OrthoError;
use crate::scalar::Scalar;

/// Standardization of the triangle family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriangleStandardization {
    /// `P_{0,0} = 1`
    #[default]
    One,
    /// Orthonormal with respect to the area measure
    Normal,
}

impl TriangleStandardization {
    /// Identifier accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            TriangleStandardization::One => "1",
            TriangleStandardization::Normal => "normal",
        }
    }
}

impl fmt::Display for TriangleStandardization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriangleStandardization {
    type Err = OrthoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(TriangleStandardization::One),
            "normal" => Ok(TriangleStandardization::Normal),
            _ => Err(OrthoError::UnknownStandardization {
                family: "triangle",
                name: s.to_string(),
                expected: "1, normal",
            }),
        }
    }
}

/// Coefficient functions of one triangle standardization.
///
/// `alpha`, `beta` and `gamma` are defined for `0 <= r < n`; `gamma` needs
/// `n >= 2` and `r <= n - 2`, `epsilon` needs `n >= 2`. The builders never
/// call outside these ranges.
pub trait TriangleCoefficients<T: Scalar> {
    /// Value of the constant polynomial `P_{0,0}`.
    fn root(&self) -> T;
    fn alpha(&self, n: usize, r: usize) -> T;
    fn beta(&self, n: usize, r: usize) -> T;
    fn gamma(&self, n: usize, r: usize) -> T;
    fn delta(&self, n: usize) -> T;
    fn epsilon(&self, n: usize) -> T;
}

/// Coefficients of the `"1"` standardization.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitCoefficients;

/// Coefficients of the `"normal"` standardization.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalCoefficients;

#[inline]
fn ratio<T: Scalar>(num: usize, den: usize) -> T {
    T::from_ratio(num as i64, den as i64)
}

#[inline]
fn sqrt<T: Scalar>(num: usize, den: usize) -> T {
    T::sqrt_ratio(num as u64, den as u64)
}

impl<T: Scalar> TriangleCoefficients<T> for UnitCoefficients {
    fn root(&self) -> T {
        T::one()
    }

    fn alpha(&self, n: usize, r: usize) -> T {
        debug_assert!(r < n);
        ratio(n * (2 * n + 1), (n - r) * (n + r + 1))
    }

    fn beta(&self, n: usize, r: usize) -> T {
        debug_assert!(r < n);
        ratio(
            n * (2 * r + 1) * (2 * r + 1),
            (n - r) * (n + r + 1) * (2 * n - 1),
        )
    }

    fn gamma(&self, n: usize, r: usize) -> T {
        debug_assert!(n >= 2 && r + 1 < n);
        ratio(
            (n - r - 1) * (n + r) * (2 * n + 1),
            (n - r) * (n + r + 1) * (2 * n - 1),
        )
    }

    fn delta(&self, n: usize) -> T {
        debug_assert!(n >= 1);
        ratio(2 * n - 1, n)
    }

    fn epsilon(&self, n: usize) -> T {
        debug_assert!(n >= 2);
        ratio(n - 1, n)
    }
}

impl<T: Scalar> TriangleCoefficients<T> for NormalCoefficients {
    fn root(&self) -> T {
        sqrt(2, 1)
    }

    fn alpha(&self, n: usize, r: usize) -> T {
        debug_assert!(r < n);
        ratio::<T>(2 * n + 1, (n - r) * (n + r + 1)) * sqrt(n * (n + 1), 1)
    }

    fn beta(&self, n: usize, r: usize) -> T {
        debug_assert!(r < n);
        ratio::<T>((2 * r + 1) * (2 * r + 1), (n - r) * (n + r + 1) * (2 * n - 1))
            * sqrt(n * (n + 1), 1)
    }

    fn gamma(&self, n: usize, r: usize) -> T {
        debug_assert!(n >= 2 && r + 1 < n);
        ratio::<T>(
            (n - r - 1) * (n + r) * (2 * n + 1),
            (n - r) * (n + r + 1) * (2 * n - 1),
        ) * sqrt(n + 1, n - 1)
    }

    fn delta(&self, n: usize) -> T {
        debug_assert!(n >= 1);
        sqrt((2 * n + 1) * (n + 1) * (2 * n - 1), n * n * n)
    }

    fn epsilon(&self, n: usize) -> T {
        debug_assert!(n >= 2);
        sqrt((2 * n + 1) * (n + 1) * (n - 1), (2 * n - 3) * n * n)
    }
}
