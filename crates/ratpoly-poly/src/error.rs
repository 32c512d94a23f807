//! Error types for term and polynomial parsing and validation.

use ratpoly_integers::ParseRationalError;
use thiserror::Error;

/// Errors that can occur while parsing a single [`Term`](crate::Term).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseTermError {
    /// The term text was empty.
    #[error("empty term")]
    Empty,

    /// The coefficient part was not a valid rational.
    #[error("invalid coefficient: {0}")]
    Coefficient(#[from] ParseRationalError),

    /// The exponent after `^` was not a non-negative integer.
    #[error("invalid exponent `{0}`")]
    Exponent(String),

    /// The text did not match `[C][*]x[^E]` or `C`.
    #[error("malformed term `{0}`")]
    Malformed(String),
}

/// Errors that can occur while parsing a [`RatPoly`](crate::RatPoly).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParsePolyError {
    /// The input was empty.
    #[error("empty polynomial")]
    Empty,

    /// A `+` or `-` was not followed by a term.
    #[error("sign at byte {0} is not followed by a term")]
    DanglingSign(usize),

    /// A term body failed to parse.
    #[error("bad term at byte {position}: {source}")]
    Term {
        /// Byte offset of the term body in the input.
        position: usize,
        /// The underlying term error.
        source: ParseTermError,
    },
}

/// A broken representation invariant inside a [`RatPoly`](crate::RatPoly).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A stored term has a zero coefficient.
    #[error("term {index} has a zero coefficient")]
    ZeroCoefficient {
        /// Index of the offending term.
        index: usize,
    },

    /// Two adjacent terms share an exponent.
    #[error("terms {index} and {} share exponent {expt}", .index + 1)]
    DuplicateExponent {
        /// Index of the first of the two terms.
        index: usize,
        /// The shared exponent.
        expt: u32,
    },

    /// Exponents are not strictly decreasing.
    #[error("term {} has a larger exponent than term {index}", .index + 1)]
    OutOfOrder {
        /// Index of the term preceding the offending one.
        index: usize,
    },
}
