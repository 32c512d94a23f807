//! Arbitrary precision rational numbers with a NaN state.
//!
//! This module provides exact rational arithmetic for polynomial coefficients.

use dashu::base::{Abs, Inverse, Signed as DashuSigned, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::ParseRationalError;

/// An arbitrary precision rational number, or NaN.
///
/// Finite rationals are always stored in lowest terms with a positive
/// denominator. `None` is the NaN value; every NaN equals every other NaN.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational(Option<RBig>);

impl Rational {
    /// The rational zero.
    pub const ZERO: Self = Self(Some(RBig::ZERO));

    /// The rational one.
    pub const ONE: Self = Self(Some(RBig::ONE));

    /// The not-a-number rational.
    pub const NAN: Self = Self(None);

    /// Creates a new rational from numerator and denominator.
    ///
    /// A zero denominator produces [`Rational::NAN`].
    #[must_use]
    pub fn new(numerator: IBig, denominator: IBig) -> Self {
        if denominator == IBig::ZERO {
            return Self::NAN;
        }
        let num = if DashuSigned::is_negative(&denominator) {
            -numerator
        } else {
            numerator
        };
        Self(Some(RBig::from_parts(num, denominator.unsigned_abs())))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// A zero denominator produces [`Rational::NAN`].
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(IBig::from(numerator), IBig::from(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: IBig) -> Self {
        Self(Some(RBig::from(n)))
    }

    /// Returns true if this is the NaN value.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the numerator, or `None` for NaN.
    #[must_use]
    pub fn numerator(&self) -> Option<&IBig> {
        self.0.as_ref().map(RBig::numerator)
    }

    /// Returns the denominator, or `None` for NaN.
    #[must_use]
    pub fn denominator(&self) -> Option<&UBig> {
        self.0.as_ref().map(RBig::denominator)
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator().map_or(false, |d| *d == UBig::ONE)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().map(Abs::abs))
    }

    /// Returns the reciprocal (1/x).
    ///
    /// The reciprocal of zero is NaN.
    #[must_use]
    pub fn recip(&self) -> Self {
        match &self.0 {
            Some(r) if !r.is_zero() => Self(Some(r.clone().inv())),
            _ => Self::NAN,
        }
    }

    /// Returns the sign: -1, 0, or 1. NaN reports 0.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match &self.0 {
            Some(r) if DashuSigned::is_positive(r) => 1,
            Some(r) if DashuSigned::is_negative(r) => -1,
            _ => 0,
        }
    }

    /// Returns true if negative. NaN is not negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.as_ref().map_or(false, DashuSigned::is_negative)
    }

    /// Converts to the nearest `f64`; NaN maps to `f64::NAN`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match &self.0 {
            Some(r) => r.to_f64().value(),
            None => f64::NAN,
        }
    }

    /// Returns a reference to the inner `dashu::RBig`, or `None` for NaN.
    #[must_use]
    pub fn as_inner(&self) -> Option<&RBig> {
        self.0.as_ref()
    }

    fn zip_with(&self, rhs: &Self, f: impl FnOnce(&RBig, &RBig) -> RBig) -> Self {
        match (&self.0, &rhs.0) {
            (Some(a), Some(b)) => Self(Some(f(a, b))),
            _ => Self::NAN,
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0.as_ref().map_or(false, RBig::is_zero)
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        self.0.as_ref().map_or(false, RBig::is_one)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => write!(f, "NaN"),
            Some(r) if *r.denominator() == UBig::ONE => write!(f, "{}", r.numerator()),
            Some(r) => write!(f, "{}/{}", r.numerator(), r.denominator()),
        }
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Parses `N`, `-N`, `N/D`, `-N/D` or `NaN`. A zero denominator gives NaN.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseRationalError::Empty);
        }
        if s == "NaN" {
            return Ok(Self::NAN);
        }

        let (num_str, den_str) = match s.split_once('/') {
            Some((n, d)) => (n, Some(d)),
            None => (s, None),
        };

        let digits = num_str.strip_prefix('-').unwrap_or(num_str);
        if !is_decimal(digits) {
            return Err(ParseRationalError::InvalidNumerator(num_str.to_string()));
        }
        let numerator = IBig::from_str_radix(num_str, 10)
            .map_err(|_| ParseRationalError::InvalidNumerator(num_str.to_string()))?;

        let denominator = match den_str {
            Some(d) if is_decimal(d) => IBig::from_str_radix(d, 10)
                .map_err(|_| ParseRationalError::InvalidDenominator(d.to_string()))?,
            Some(d) => return Err(ParseRationalError::InvalidDenominator(d.to_string())),
            None => IBig::ONE,
        };

        Ok(Self::new(numerator, denominator))
    }
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, |a, b| a * b)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;

    fn div(self, rhs: &Rational) -> Self::Output {
        &self / rhs
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        if rhs.is_zero() {
            return Rational::NAN;
        }
        self.zip_with(rhs, |a, b| a / b)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.map(|r| -r))
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(self.0.as_ref().map(|r| -r))
    }
}

impl From<IBig> for Rational {
    fn from(n: IBig) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(IBig::from(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(IBig::from(n))
    }
}

impl From<u32> for Rational {
    fn from(n: u32) -> Self {
        Self::from_integer(IBig::from(n))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Rational;
    use serde::de::{Deserialize, Deserializer, Error};
    use serde::ser::{Serialize, Serializer};

    impl Serialize for Rational {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Rational {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(D::Error::custom)
        }
    }
}
