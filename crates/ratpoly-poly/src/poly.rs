//! Canonical sparse polynomials over the rationals.
//!
//! A `RatPoly` is a sum of [`Term`]s stored by strictly decreasing exponent
//! with no zero coefficients. The empty list is the zero polynomial. Any
//! NaN coefficient makes the whole polynomial NaN.

use log::{debug, trace};
use num_traits::Zero;
use ratpoly_integers::Rational;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::canonical::{scale_coeffs, shift_exponents, sorted_insert};
use crate::error::{InvariantViolation, ParsePolyError};
use crate::term::Term;

/// An immutable single-variable polynomial with rational coefficients.
///
/// Operations never mutate `self`; each returns a freshly built polynomial.
#[derive(Clone, Debug)]
pub struct RatPoly {
    /// Terms in strictly decreasing exponent order.
    terms: Vec<Term>,
}

impl RatPoly {
    /// The zero polynomial.
    pub const ZERO: Self = Self { terms: Vec::new() };

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Creates the NaN polynomial.
    #[must_use]
    pub fn nan() -> Self {
        Self {
            terms: vec![Term::NAN],
        }
    }

    /// Creates the monomial `c * x^e` from an integer coefficient.
    #[must_use]
    pub fn from_int(c: i64, e: u32) -> Self {
        Self::from(Term::new(Rational::from(c), e))
    }

    /// Freezes a list the caller has already made canonical.
    fn from_canonical(terms: Vec<Term>) -> Self {
        let poly = Self { terms };
        debug_assert!(
            poly.check_invariants().is_ok(),
            "non-canonical polynomial: {:?}",
            poly.check_invariants()
        );
        poly
    }

    /// Checks the representation invariants.
    ///
    /// NaN polynomials are exempt. Every other polynomial must list its terms
    /// by strictly decreasing exponent with no zero coefficients.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.is_nan() {
            return Ok(());
        }
        for (index, term) in self.terms.iter().enumerate() {
            if term.is_zero() {
                return Err(InvariantViolation::ZeroCoefficient { index });
            }
        }
        for (index, pair) in self.terms.windows(2).enumerate() {
            let (hi, lo) = (pair[0].expt(), pair[1].expt());
            if hi == lo {
                return Err(InvariantViolation::DuplicateExponent { index, expt: hi });
            }
            if hi < lo {
                return Err(InvariantViolation::OutOfOrder { index });
            }
        }
        Ok(())
    }

    /// Returns the terms, highest exponent first.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if any coefficient is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.terms.iter().any(Term::is_nan)
    }

    /// Returns the largest exponent, or 0 for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.terms.first().map_or(0, Term::expt)
    }

    /// Returns the leading term, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Returns the term of exponent `deg`, or the zero term if absent.
    #[must_use]
    pub fn term(&self, deg: u32) -> Term {
        self.terms
            .iter()
            .take_while(|t| t.expt() >= deg)
            .find(|t| t.expt() == deg)
            .cloned()
            .unwrap_or(Term::ZERO)
    }

    /// Returns the additive inverse.
    #[must_use]
    pub fn negate(&self) -> Self {
        if self.is_nan() {
            debug!("negating a NaN polynomial");
            return Self::nan();
        }
        let mut terms = self.terms.clone();
        scale_coeffs(&mut terms, &-Rational::ONE);
        Self::from_canonical(terms)
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.is_nan() || other.is_nan() {
            debug!("addition with a NaN operand");
            return Self::nan();
        }
        let mut terms = self.terms.clone();
        for term in &other.terms {
            sorted_insert(&mut terms, term.clone());
        }
        Self::from_canonical(terms)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    /// Multiplies every term by the single term `t`.
    fn mul_term(&self, t: &Term) -> Self {
        let mut terms = self.terms.clone();
        scale_coeffs(&mut terms, t.coeff());
        shift_exponents(&mut terms, i64::from(t.expt()));
        Self::from_canonical(terms)
    }

    /// Multiplies two polynomials.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_nan() || other.is_nan() {
            debug!("multiplication with a NaN operand");
            return Self::nan();
        }
        self.terms
            .iter()
            .fold(Self::zero(), |product, t| product.add(&other.mul_term(t)))
    }

    /// Truncating division: the quotient of `self / other`.
    ///
    /// Returns NaN if `other` is zero or either operand is NaN.
    #[must_use]
    pub fn div(&self, other: &Self) -> Self {
        self.div_rem(other).0
    }

    /// Polynomial long division, returning `(quotient, remainder)`.
    ///
    /// For dividend `u` and divisor `v` this finds `q` and `r` with
    /// `u = q*v + r` and `deg(r) < deg(v)` (or `r = 0`). Both are NaN if
    /// `other` is zero or either operand is NaN.
    #[must_use]
    pub fn div_rem(&self, other: &Self) -> (Self, Self) {
        if self.is_nan() || other.is_nan() {
            debug!("division with a NaN operand");
            return (Self::nan(), Self::nan());
        }
        let Some(lead) = other.leading_term() else {
            debug!("division by the zero polynomial");
            return (Self::nan(), Self::nan());
        };

        let mut quotient = Vec::new();
        let mut remainder = self.clone();

        // Each step cancels the remainder's leading term exactly, so its
        // degree strictly drops until it falls below deg(v) or hits zero.
        while let Some(r_lead) = remainder.leading_term() {
            if r_lead.expt() < lead.expt() {
                break;
            }
            let step = Term::new(r_lead.coeff() / lead.coeff(), r_lead.expt() - lead.expt());
            trace!("quotient term {step}");
            remainder = remainder.sub(&other.mul_term(&step));
            quotient.push(step);
        }

        (Self::from_canonical(quotient), remainder)
    }

    /// Returns the derivative.
    #[must_use]
    pub fn differentiate(&self) -> Self {
        if self.is_nan() {
            debug!("differentiating a NaN polynomial");
            return Self::nan();
        }
        let terms = self
            .terms
            .iter()
            .map(Term::differentiate)
            .filter(|t| !t.is_zero())
            .collect();
        Self::from_canonical(terms)
    }

    /// Returns the antiderivative with integration constant `constant`.
    ///
    /// Returns NaN if `self` or `constant` is NaN, or if the degree is
    /// `u32::MAX`.
    #[must_use]
    pub fn anti_differentiate(&self, constant: &Rational) -> Self {
        if self.is_nan() || constant.is_nan() {
            debug!("antiderivative with a NaN operand");
            return Self::nan();
        }
        let mut terms: Vec<Term> = self.terms.iter().map(Term::anti_differentiate).collect();
        if terms.iter().any(Term::is_nan) {
            return Self::nan();
        }
        if !constant.is_zero() {
            terms.push(Term::from(constant.clone()));
        }
        Self::from_canonical(terms)
    }

    /// Returns the definite integral from `lower` to `upper`.
    ///
    /// `lower` may exceed `upper`. Returns `f64::NAN` if a bound is NaN or
    /// `self` is NaN.
    #[must_use]
    pub fn integrate(&self, lower: f64, upper: f64) -> f64 {
        if lower.is_nan() || upper.is_nan() || self.is_nan() {
            debug!("integration with a NaN operand");
            return f64::NAN;
        }
        let antiderivative = self.anti_differentiate(&Rational::ZERO);
        antiderivative.eval(upper) - antiderivative.eval(lower)
    }

    /// Evaluates the polynomial at `x`. Returns `f64::NAN` if `self` is NaN.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        if self.is_nan() {
            debug!("evaluating a NaN polynomial");
            return f64::NAN;
        }
        self.terms.iter().map(|t| t.eval(x)).sum()
    }

    /// Parses the text form produced by `Display`, e.g. `x^3-2*x^2+5/3*x+3`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, ends in a sign, or contains a
    /// term the term grammar rejects.
    pub fn value_of(text: &str) -> Result<Self, ParsePolyError> {
        if text.is_empty() {
            return Err(ParsePolyError::Empty);
        }

        let mut terms = Vec::new();
        let mut negative = false;
        let mut start = 0;
        let mut push_body =
            |start: usize, end: usize, negative: bool| -> Result<(), ParsePolyError> {
                let term = text[start..end].parse::<Term>().map_err(|source| {
                    debug!("rejecting polynomial {text:?}");
                    ParsePolyError::Term {
                        position: start,
                        source,
                    }
                })?;
                sorted_insert(&mut terms, if negative { term.negate() } else { term });
                Ok(())
            };

        for (i, ch) in text.char_indices() {
            if ch == '+' || ch == '-' {
                if i > start {
                    push_body(start, i, negative)?;
                }
                negative = ch == '-';
                start = i + 1;
            }
        }
        if start == text.len() {
            return Err(ParsePolyError::DanglingSign(start - 1));
        }
        push_body(start, text.len(), negative)?;

        if terms.iter().any(Term::is_nan) {
            return Ok(Self::nan());
        }
        Ok(Self::from_canonical(terms))
    }
}

impl Default for RatPoly {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Term> for RatPoly {
    fn from(term: Term) -> Self {
        if term.is_zero() {
            Self::ZERO
        } else {
            Self { terms: vec![term] }
        }
    }
}

impl PartialEq for RatPoly {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => true,
            (false, false) => self.terms == other.terms,
            _ => false,
        }
    }
}

impl Eq for RatPoly {}

impl Hash for RatPoly {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_nan() {
            0u8.hash(state);
        } else {
            1u8.hash(state);
            self.terms.hash(state);
        }
    }
}

impl fmt::Display for RatPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        if self.is_nan() {
            return write!(f, "NaN");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 && !term.coeff().is_negative() {
                write!(f, "+")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

impl FromStr for RatPoly {
    type Err = ParsePolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::value_of(s)
    }
}

// Operators forward to the inherent methods. The traits stay out of scope so
// `p.add(&q)` keeps resolving to the by-reference inherent method.
macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl std::ops::$trait for RatPoly {
            type Output = RatPoly;

            fn $method(self, rhs: Self) -> Self::Output {
                RatPoly::$method(&self, &rhs)
            }
        }

        impl std::ops::$trait<&RatPoly> for &RatPoly {
            type Output = RatPoly;

            fn $method(self, rhs: &RatPoly) -> Self::Output {
                RatPoly::$method(self, rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl std::ops::Neg for RatPoly {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::ops::Neg for &RatPoly {
    type Output = RatPoly;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::RatPoly;
    use serde::de::{Deserialize, Deserializer, Error};
    use serde::ser::{Serialize, Serializer};

    impl Serialize for RatPoly {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for RatPoly {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(D::Error::custom)
        }
    }
}
