//! Errors raised while reading rationals from text.

use thiserror::Error;

/// Errors that can occur while parsing a [`Rational`](crate::Rational).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRationalError {
    /// The input was empty.
    #[error("empty rational literal")]
    Empty,

    /// The numerator was not an optionally signed run of decimal digits.
    #[error("invalid numerator `{0}`")]
    InvalidNumerator(String),

    /// The denominator was not a run of decimal digits.
    #[error("invalid denominator `{0}`")]
    InvalidDenominator(String),
}
