//! Exact algebraic scalars.
//!
//! An [`Exact`] value is a finite sum
//!
//! ```text
//! Σ q_k · Π_p p^(e_{k,p}) · π^(f_k)
//! ```
//!
//! with rational coefficients `q_k`, prime bases `p` carrying exponents in the
//! open interval (0, 1), and a rational exponent `f_k` on π. Integer parts of
//! prime exponents are always folded into the coefficient, so each value has a
//! single canonical representation and equality is structural.
//!
//! This covers every coefficient of the triangle and Hermite recurrences
//! (rationals, square roots of rationals, `(2π)^(-1/4)`) and every tree value
//! at rational evaluation points.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::{BigRational, Rational64};
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::{ArithmeticMode, Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Base {
    Prime(u64),
    Pi,
}

impl Base {
    fn value(self) -> f64 {
        match self {
            Base::Prime(p) => p as f64,
            Base::Pi => PI,
        }
    }
}

/// Product of prime roots and a power of π.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Radical(BTreeMap<Base, Rational64>);

impl Radical {
    /// Canonicalize raw exponents, returning the rational factor split off.
    fn from_exponents(exponents: BTreeMap<Base, Rational64>) -> (BigRational, Radical) {
        let mut scale = BigRational::one();
        let mut factors = BTreeMap::new();

        for (base, exponent) in exponents {
            match base {
                Base::Prime(p) => {
                    let whole = exponent.floor();
                    scale *= integer_power(p, whole.to_integer());
                    let fraction = exponent - whole;
                    if !fraction.is_zero() {
                        factors.insert(base, fraction);
                    }
                }
                Base::Pi => {
                    if !exponent.is_zero() {
                        factors.insert(base, exponent);
                    }
                }
            }
        }

        (scale, Radical(factors))
    }

    fn mul(&self, other: &Radical) -> (BigRational, Radical) {
        let mut exponents = self.0.clone();
        for (base, exponent) in &other.0 {
            *exponents.entry(*base).or_insert_with(Rational64::zero) += *exponent;
        }
        Radical::from_exponents(exponents)
    }

    fn is_one(&self) -> bool {
        self.0.is_empty()
    }

    fn to_f64(&self) -> f64 {
        self.0
            .iter()
            .map(|(base, exponent)| {
                base.value()
                    .powf(*exponent.numer() as f64 / *exponent.denom() as f64)
            })
            .product()
    }
}

impl fmt::Display for Radical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (base, exponent) in &self.0 {
            if !first {
                write!(f, "*")?;
            }
            first = false;
            match base {
                Base::Prime(p) => write!(f, "{}^({})", p, exponent)?,
                Base::Pi => write!(f, "pi^({})", exponent)?,
            }
        }
        Ok(())
    }
}

/// Exact real number: a rational combination of radical monomials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Exact {
    terms: BTreeMap<Radical, BigRational>,
}

impl Exact {
    /// Exact rational value.
    pub fn rational(value: BigRational) -> Self {
        let mut out = Self::default();
        out.accumulate(Radical::default(), value);
        out
    }

    /// Rational value if the number has no radical part.
    pub fn as_rational(&self) -> Option<BigRational> {
        match self.terms.len() {
            0 => Some(BigRational::zero()),
            1 => self
                .terms
                .iter()
                .next()
                .filter(|(radical, _)| radical.is_one())
                .map(|(_, coefficient)| coefficient.clone()),
            _ => None,
        }
    }

    /// Number of distinct radical monomials.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    fn accumulate(&mut self, radical: Radical, coefficient: BigRational) {
        if coefficient.is_zero() {
            return;
        }
        match self.terms.entry(radical) {
            Entry::Vacant(entry) => {
                entry.insert(coefficient);
            }
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += coefficient;
                if entry.get().is_zero() {
                    entry.remove();
                }
            }
        }
    }

    fn from_exponents(exponents: BTreeMap<Base, Rational64>) -> Self {
        let (scale, radical) = Radical::from_exponents(exponents);
        let mut out = Self::default();
        out.accumulate(radical, scale);
        out
    }
}

impl Zero for Exact {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl One for Exact {
    fn one() -> Self {
        Self::rational(BigRational::one())
    }
}

impl From<i64> for Exact {
    fn from(value: i64) -> Self {
        Self::rational(BigRational::from_integer(BigInt::from(value)))
    }
}

impl From<BigRational> for Exact {
    fn from(value: BigRational) -> Self {
        Self::rational(value)
    }
}

impl Add for Exact {
    type Output = Exact;

    fn add(mut self, rhs: Exact) -> Exact {
        for (radical, coefficient) in rhs.terms {
            self.accumulate(radical, coefficient);
        }
        self
    }
}

impl Neg for Exact {
    type Output = Exact;

    fn neg(self) -> Exact {
        Exact {
            terms: self
                .terms
                .into_iter()
                .map(|(radical, coefficient)| (radical, -coefficient))
                .collect(),
        }
    }
}

impl Sub for Exact {
    type Output = Exact;

    fn sub(self, rhs: Exact) -> Exact {
        self + (-rhs)
    }
}

impl Mul for Exact {
    type Output = Exact;

    fn mul(self, rhs: Exact) -> Exact {
        let mut out = Exact::default();
        for (r1, c1) in &self.terms {
            for (r2, c2) in &rhs.terms {
                let (scale, radical) = r1.mul(r2);
                out.accumulate(radical, c1 * c2 * scale);
            }
        }
        out
    }
}

impl Scalar for Exact {
    const MODE: ArithmeticMode = ArithmeticMode::Exact;

    fn from_ratio(num: i64, den: i64) -> Self {
        debug_assert!(den != 0, "zero denominator in exact ratio");
        Self::rational(BigRational::new(BigInt::from(num), BigInt::from(den)))
    }

    fn root_ratio(num: u64, den: u64, index: u32) -> Self {
        debug_assert!(den != 0 && index != 0, "invalid exact root");
        if num == 0 {
            return Self::zero();
        }

        let g = gcd(num, den);
        let index = i64::from(index);
        let mut exponents = BTreeMap::new();
        for (p, e) in factorize(num / g) {
            exponents.insert(Base::Prime(p), Rational64::new(e, index));
        }
        for (p, e) in factorize(den / g) {
            exponents.insert(Base::Prime(p), Rational64::new(-e, index));
        }
        Self::from_exponents(exponents)
    }

    fn pi_pow(num: i64, den: i64) -> Self {
        let mut exponents = BTreeMap::new();
        exponents.insert(Base::Pi, Rational64::new(num, den));
        Self::from_exponents(exponents)
    }

    fn to_f64(&self) -> f64 {
        self.terms
            .iter()
            .map(|(radical, coefficient)| big_ratio_to_f64(coefficient) * radical.to_f64())
            .sum()
    }
}

impl fmt::Display for Exact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (k, (radical, coefficient)) in self.terms.iter().enumerate() {
            if k > 0 {
                write!(f, " {} ", if coefficient.is_negative() { '-' } else { '+' })?;
            } else if coefficient.is_negative() {
                write!(f, "-")?;
            }
            let magnitude = coefficient.abs();
            if radical.is_one() {
                write!(f, "{}", magnitude)?;
            } else if magnitude.is_one() {
                write!(f, "{}", radical)?;
            } else {
                write!(f, "{}*{}", magnitude, radical)?;
            }
        }
        Ok(())
    }
}

/// `p^k` as a rational, `k` possibly negative.
fn integer_power(p: u64, k: i64) -> BigRational {
    let magnitude = num_traits::pow(BigInt::from(p), k.unsigned_abs() as usize);
    if k >= 0 {
        BigRational::from_integer(magnitude)
    } else {
        BigRational::new(BigInt::one(), magnitude)
    }
}

fn big_ratio_to_f64(value: &BigRational) -> f64 {
    // Keep both parts inside the f64 exponent range before dividing.
    let shift = value.numer().bits().max(value.denom().bits()).saturating_sub(1000);
    let numer = (value.numer() >> shift).to_f64().unwrap_or(f64::NAN);
    let denom = (value.denom() >> shift).to_f64().unwrap_or(f64::NAN);
    numer / denom
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Prime factorization, ascending.
///
/// Small factors are removed by trial division; the cofactor is split with
/// Pollard's rho and certified with Miller-Rabin, so every `u64` is handled.
fn factorize(mut n: u64) -> Vec<(u64, i64)> {
    let mut factors = BTreeMap::new();
    let mut p = 2;
    while p < TRIAL_DIVISION_LIMIT && p <= n / p {
        while n % p == 0 {
            n /= p;
            *factors.entry(p).or_insert(0) += 1;
        }
        p += 1;
    }

    let mut pending = vec![n];
    while let Some(m) = pending.pop() {
        if m == 1 {
            continue;
        }
        if is_prime(m) {
            *factors.entry(m).or_insert(0) += 1;
        } else {
            let d = pollard_rho(m);
            pending.push(d);
            pending.push(m / d);
        }
    }

    factors.into_iter().collect()
}

const TRIAL_DIVISION_LIMIT: u64 = 1000;

/// Bases that make Miller-Rabin deterministic below 2^64.
const MILLER_RABIN_BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut acc = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    acc
}

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &MILLER_RABIN_BASES {
        if n % p == 0 {
            return n == p;
        }
    }

    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;
    MILLER_RABIN_BASES.iter().all(|&a| {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            return true;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                return true;
            }
        }
        false
    })
}

/// A nontrivial divisor of the composite `n`.
fn pollard_rho(n: u64) -> u64 {
    if n % 2 == 0 {
        return 2;
    }
    let mut c = 1;
    loop {
        let step = |x: u64| ((mul_mod(x, x, n) as u128 + c as u128) % n as u128) as u64;
        let (mut x, mut y, mut d) = (2, 2, 1);
        while d == 1 {
            x = step(x);
            y = step(step(y));
            d = gcd(x.abs_diff(y), n);
        }
        if d != n {
            return d;
        }
        c += 1;
    }
}
