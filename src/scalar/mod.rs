//! Scalar types for tree evaluation.
//!
//! All coefficient formulas and recurrence kernels are written once against the
//! [`Scalar`] trait. The arithmetic mode of a computation is the scalar type:
//! - `f64`: finite-precision floating point
//! - [`Exact`]: rationals times radicals of primes and powers of π, no rounding
//!
//! A tree holds a single scalar type, so modes cannot be mixed inside one call.

mod exact;

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

pub use exact::Exact;

/// Arithmetic mode of a scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticMode {
    /// Floating-point arithmetic
    Float,
    /// Exact rational/algebraic arithmetic
    Exact,
}

/// Numeric interface shared by floating and exact evaluation.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Arithmetic mode represented by this type.
    const MODE: ArithmeticMode;

    /// The rational `num / den`.
    fn from_ratio(num: i64, den: i64) -> Self;

    /// The real root `(num / den)^(1 / index)`.
    fn root_ratio(num: u64, den: u64, index: u32) -> Self;

    /// Square root of `num / den`.
    fn sqrt_ratio(num: u64, den: u64) -> Self {
        Self::root_ratio(num, den, 2)
    }

    /// `π^(num / den)`.
    fn pi_pow(num: i64, den: i64) -> Self;

    /// Nearest floating-point value.
    fn to_f64(&self) -> f64;
}

impl Scalar for f64 {
    const MODE: ArithmeticMode = ArithmeticMode::Float;

    #[inline]
    fn from_ratio(num: i64, den: i64) -> Self {
        num as f64 / den as f64
    }

    #[inline]
    fn root_ratio(num: u64, den: u64, index: u32) -> Self {
        let x = num as f64 / den as f64;
        match index {
            1 => x,
            2 => x.sqrt(),
            3 => x.cbrt(),
            4 => x.sqrt().sqrt(),
            _ => x.powf(1.0 / index as f64),
        }
    }

    #[inline]
    fn pi_pow(num: i64, den: i64) -> Self {
        std::f64::consts::PI.powf(num as f64 / den as f64)
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_constructors() {
        assert_eq!(<f64 as Scalar>::from_ratio(3, 4), 0.75);
        assert!((f64::sqrt_ratio(2, 1) - 2f64.sqrt()).abs() < 1e-15);
        assert!((f64::root_ratio(16, 1, 4) - 2.0).abs() < 1e-15);
        assert!((f64::root_ratio(27, 8, 3) - 1.5).abs() < 1e-15);
        assert!((f64::pi_pow(1, 2) - std::f64::consts::PI.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_modes() {
        assert_eq!(<f64 as Scalar>::MODE, ArithmeticMode::Float);
        assert_eq!(<Exact as Scalar>::MODE, ArithmeticMode::Exact);
    }
}
