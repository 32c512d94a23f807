//! # ratpoly-poly
//!
//! Exact single-variable polynomials with rational coefficients.
//!
//! This crate provides:
//! - `Term`, an immutable `c*x^e` pair
//! - `RatPoly`, a canonical sparse polynomial (descending exponents,
//!   no zero coefficients, no duplicate exponents)
//! - Truncating long division, differentiation and antidifferentiation
//! - A whitespace-free text form and a matching parser
//!
//! ## NaN Propagation
//!
//! Undefined results (division by the zero polynomial, NaN coefficients)
//! are represented by `RatPoly::nan()` rather than errors. NaN is
//! infectious: every operation with a NaN operand returns NaN.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canonical;
pub mod error;
pub mod poly;
pub mod term;

#[cfg(test)]
mod proptests;

pub use error::{InvariantViolation, ParsePolyError, ParseTermError};
pub use poly::RatPoly;
pub use term::Term;
