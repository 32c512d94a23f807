//! Single polynomial terms `c*x^e`.
//!
//! A term pairs an exact rational coefficient with a non-negative exponent.
//! Terms are immutable; every transformation returns a new term.

use log::debug;
use num_traits::{One, Zero};
use ratpoly_integers::Rational;
use std::fmt;
use std::str::FromStr;

use crate::ParseTermError;

/// An immutable term `coeff * x^expt`.
///
/// A zero or NaN coefficient always carries exponent 0, so every zero term
/// equals [`Term::ZERO`] and every NaN term equals [`Term::NAN`].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Term {
    coeff: Rational,
    expt: u32,
}

impl Term {
    /// The zero term.
    pub const ZERO: Self = Self {
        coeff: Rational::ZERO,
        expt: 0,
    };

    /// The NaN term.
    pub const NAN: Self = Self {
        coeff: Rational::NAN,
        expt: 0,
    };

    /// Creates the term `coeff * x^expt`.
    #[must_use]
    pub fn new(coeff: Rational, expt: u32) -> Self {
        if coeff.is_zero() || coeff.is_nan() {
            Self { coeff, expt: 0 }
        } else {
            Self { coeff, expt }
        }
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coeff(&self) -> &Rational {
        &self.coeff
    }

    /// Returns the exponent.
    #[must_use]
    pub fn expt(&self) -> u32 {
        self.expt
    }

    /// Returns true if the coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Returns true if the coefficient is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.coeff.is_nan()
    }

    /// Adds two terms of the same exponent.
    ///
    /// A zero operand yields the other term and a NaN operand yields NaN.
    /// Returns `None` when both terms are non-zero with different exponents,
    /// since the sum is not a single term.
    #[must_use]
    pub fn add(&self, other: &Self) -> Option<Self> {
        if self.is_nan() || other.is_nan() {
            return Some(Self::NAN);
        }
        if self.is_zero() {
            return Some(other.clone());
        }
        if other.is_zero() {
            return Some(self.clone());
        }
        if self.expt != other.expt {
            return None;
        }
        Some(Self::new(&self.coeff + &other.coeff, self.expt))
    }

    /// Returns the additive inverse.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(-&self.coeff, self.expt)
    }

    /// Multiplies the coefficient by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: &Rational) -> Self {
        Self::new(&self.coeff * scalar, self.expt)
    }

    /// Returns this coefficient paired with a different exponent.
    #[must_use]
    pub fn with_expt(&self, expt: u32) -> Self {
        Self::new(self.coeff.clone(), expt)
    }

    /// Computes the derivative: `c*x^e` becomes `c*e*x^(e-1)`.
    #[must_use]
    pub fn differentiate(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.expt == 0 {
            return Self::ZERO;
        }
        Self::new(&self.coeff * &Rational::from(self.expt), self.expt - 1)
    }

    /// Computes the antiderivative: `c*x^e` becomes `c/(e+1)*x^(e+1)`.
    ///
    /// Returns NaN if the new exponent does not fit in a `u32`.
    #[must_use]
    pub fn anti_differentiate(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        let Some(next) = self.expt.checked_add(1) else {
            debug!("antiderivative of {self} overflows the exponent");
            return Self::NAN;
        };
        Self::new(&self.coeff / &Rational::from(next), next)
    }

    /// Evaluates the term at `x`. `x^0` is 1 for every `x`, including 0.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }
        let power = if self.expt == 0 {
            1.0
        } else {
            x.powf(f64::from(self.expt))
        };
        self.coeff.to_f64() * power
    }
}

impl From<Rational> for Term {
    fn from(coeff: Rational) -> Self {
        Self::new(coeff, 0)
    }
}

impl fmt::Display for Term {
    /// Renders `C*x^E`, collapsing to `x^E`/`x` when `|C| = 1` and to `C`
    /// when `E = 0`. The exponent-zero form wins when both apply.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return write!(f, "NaN");
        }
        if self.coeff.is_negative() {
            write!(f, "-")?;
        }
        let magnitude = self.coeff.abs();
        match (self.expt, magnitude.is_one()) {
            (0, _) => write!(f, "{magnitude}"),
            (1, true) => write!(f, "x"),
            (e, true) => write!(f, "x^{e}"),
            (1, false) => write!(f, "{magnitude}*x"),
            (e, false) => write!(f, "{magnitude}*x^{e}"),
        }
    }
}

impl FromStr for Term {
    type Err = ParseTermError;

    /// Parses `[-][C][*]x[^E]`, `[-]C` or `NaN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseTermError::Empty);
        }

        let Some((coeff_part, expt_part)) = s.split_once('x') else {
            return Ok(Self::from(s.parse::<Rational>()?));
        };

        let coeff = match coeff_part {
            "" => Rational::ONE,
            "-" => -Rational::ONE,
            text => text.strip_suffix('*').unwrap_or(text).parse::<Rational>()?,
        };

        let expt = match expt_part {
            "" => 1,
            text => {
                let digits = text
                    .strip_prefix('^')
                    .ok_or_else(|| ParseTermError::Malformed(s.to_string()))?;
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseTermError::Exponent(digits.to_string()));
                }
                digits
                    .parse::<u32>()
                    .map_err(|_| ParseTermError::Exponent(digits.to_string()))?
            }
        };

        Ok(Self::new(coeff, expt))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Term;
    use serde::de::{Deserialize, Deserializer, Error};
    use serde::ser::{Serialize, Serializer};

    impl Serialize for Term {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Term {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(D::Error::custom)
        }
    }
}
