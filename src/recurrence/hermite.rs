//! Three-term recurrence coefficients for Hermite polynomials.
//!
//! The polynomials satisfy
//!
//! ```text
//! p_{-1} = 0,  p_0 = const
//! p_{k+1}(x) = (a_k x - b_k) p_k(x) - c_k p_{k-1}(x)
//! ```
//!
//! Probabilists' Hermite polynomials are orthogonal with weight `exp(-x²/2)`,
//! physicists' with weight `exp(-x²)`. The scaling fixes the leading
//! coefficient (monic / classical) or the norm (normal).

use std::fmt;
use std::str::FromStr;

use crate::error::OrthoError;
use crate::scalar::Scalar;

/// Weight convention of the Hermite family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HermiteStandardization {
    /// Weight `exp(-x²/2)`
    Probabilists,
    /// Weight `exp(-x²)`
    #[default]
    Physicists,
}

impl HermiteStandardization {
    /// Identifier accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            HermiteStandardization::Probabilists => "probabilists",
            HermiteStandardization::Physicists => "physicists",
        }
    }
}

impl fmt::Display for HermiteStandardization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HermiteStandardization {
    type Err = OrthoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "probabilists" => Ok(HermiteStandardization::Probabilists),
            "physicists" => Ok(HermiteStandardization::Physicists),
            _ => Err(OrthoError::UnknownStandardization {
                family: "hermite",
                name: s.to_string(),
                expected: "probabilists, physicists",
            }),
        }
    }
}

/// Scaling of the individual polynomials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HermiteScaling {
    /// Leading coefficient 1
    Monic,
    /// Textbook scaling: `He_n` (monic) or `H_n` (leading coefficient `2^n`)
    Classical,
    /// Unit norm under the weight
    #[default]
    Normal,
}

impl FromStr for HermiteScaling {
    type Err = OrthoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monic" => Ok(HermiteScaling::Monic),
            "classical" => Ok(HermiteScaling::Classical),
            "normal" => Ok(HermiteScaling::Normal),
            _ => Err(OrthoError::UnknownStandardization {
                family: "hermite scaling",
                name: s.to_string(),
                expected: "monic, classical, normal",
            }),
        }
    }
}

/// A complete choice of Hermite family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HermiteKind {
    pub standardization: HermiteStandardization,
    pub scaling: HermiteScaling,
}

impl HermiteKind {
    pub fn new(standardization: HermiteStandardization, scaling: HermiteScaling) -> Self {
        Self {
            standardization,
            scaling,
        }
    }

    /// Orthonormal family of the given standardization.
    pub fn normal(standardization: HermiteStandardization) -> Self {
        Self::new(standardization, HermiteScaling::Normal)
    }

    /// Value of the constant polynomial `p_0`.
    pub fn p0<T: Scalar>(&self) -> T {
        use HermiteScaling::*;
        use HermiteStandardization::*;

        match (self.standardization, self.scaling) {
            (_, Monic) | (_, Classical) => T::one(),
            // (2π)^(-1/4)
            (Probabilists, Normal) => T::root_ratio(1, 2, 4) * T::pi_pow(-1, 4),
            // π^(-1/4)
            (Physicists, Normal) => T::pi_pow(-1, 4),
        }
    }

    /// Coefficients `(a_k, b_k, c_k)` of step `k`.
    pub fn step<T: Scalar>(&self, k: usize) -> (T, T, T) {
        use HermiteScaling::*;
        use HermiteStandardization::*;

        let k = k as i64;
        let (a, c) = match (self.standardization, self.scaling) {
            (Probabilists, Monic) | (Probabilists, Classical) => (T::one(), T::from_ratio(k, 1)),
            (Physicists, Monic) => (T::one(), T::from_ratio(k, 2)),
            (Physicists, Classical) => (T::from_ratio(2, 1), T::from_ratio(2 * k, 1)),
            (Probabilists, Normal) => (
                T::sqrt_ratio(1, k as u64 + 1),
                T::sqrt_ratio(k as u64, k as u64 + 1),
            ),
            (Physicists, Normal) => (
                T::sqrt_ratio(2, k as u64 + 1),
                T::sqrt_ratio(k as u64, k as u64 + 1),
            ),
        };
        (a, T::zero(), c)
    }
}

/// Recurrence data for a fixed number of steps.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrenceCoefficients<T> {
    /// Value of `p_0`
    pub p0: T,
    /// `a_k`
    pub a: Vec<T>,
    /// `b_k`
    pub b: Vec<T>,
    /// `c_k`
    pub c: Vec<T>,
}

impl<T: Scalar> RecurrenceCoefficients<T> {
    /// Number of available steps.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Append steps until `n_steps` are available.
    pub fn extend_to(&mut self, n_steps: usize, kind: HermiteKind) {
        for k in self.len()..n_steps {
            let (a, b, c) = kind.step(k);
            self.a.push(a);
            self.b.push(b);
            self.c.push(c);
        }
    }
}

/// Recurrence coefficients for `n_steps` steps of the given Hermite family.
pub fn hermite<T: Scalar>(n_steps: usize, kind: HermiteKind) -> RecurrenceCoefficients<T> {
    let mut rc = RecurrenceCoefficients {
        p0: kind.p0(),
        a: Vec::with_capacity(n_steps),
        b: Vec::with_capacity(n_steps),
        c: Vec::with_capacity(n_steps),
    };
    rc.extend_to(n_steps, kind);
    rc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Exact;
    use std::f64::consts::PI;

    #[test]
    fn test_parse() {
        assert_eq!(
            "probabilists".parse(),
            Ok(HermiteStandardization::Probabilists)
        );
        assert_eq!("physicists".parse(), Ok(HermiteStandardization::Physicists));
        assert!("chebyshev".parse::<HermiteStandardization>().is_err());
        assert_eq!("monic".parse(), Ok(HermiteScaling::Monic));
        assert!("unit".parse::<HermiteScaling>().is_err());
    }

    #[test]
    fn test_classical_physicists() {
        let rc: RecurrenceCoefficients<f64> = hermite(
            4,
            HermiteKind::new(HermiteStandardization::Physicists, HermiteScaling::Classical),
        );
        assert_eq!(rc.p0, 1.0);
        assert_eq!(rc.a, vec![2.0; 4]);
        assert_eq!(rc.b, vec![0.0; 4]);
        assert_eq!(rc.c, vec![0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_normal_p0() {
        let prob: f64 = HermiteKind::normal(HermiteStandardization::Probabilists).p0();
        let phys: f64 = HermiteKind::normal(HermiteStandardization::Physicists).p0();
        assert!((prob - (2.0 * PI).powf(-0.25)).abs() < 1e-15);
        assert!((phys - PI.powf(-0.25)).abs() < 1e-15);
    }

    #[test]
    fn test_exact_matches_float() {
        for standardization in [
            HermiteStandardization::Probabilists,
            HermiteStandardization::Physicists,
        ] {
            let kind = HermiteKind::normal(standardization);
            let exact: RecurrenceCoefficients<Exact> = hermite(10, kind);
            let float: RecurrenceCoefficients<f64> = hermite(10, kind);

            assert!((exact.p0.to_f64() - float.p0).abs() < 1e-15);
            for k in 0..10 {
                assert!((exact.a[k].to_f64() - float.a[k]).abs() < 1e-15);
                assert!((exact.c[k].to_f64() - float.c[k]).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn test_extend_to() {
        let kind = HermiteKind::default();
        let mut rc: RecurrenceCoefficients<f64> = hermite(2, kind);
        rc.extend_to(5, kind);
        assert_eq!(rc, hermite(5, kind));
        assert_eq!(rc.len(), 5);
    }
}
