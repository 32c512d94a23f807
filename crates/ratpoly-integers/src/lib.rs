//! # ratpoly-integers
//!
//! Exact rational arithmetic for the ratpoly engine.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision rationals (`Rational`) kept in lowest terms
//! - A distinguished NaN value that absorbs every arithmetic operation
//! - A canonical `N` / `N/D` text form with a matching parser
//!
//! ## NaN Semantics
//!
//! Division by zero never panics. It yields `Rational::NAN`, and any
//! operation with a NaN operand yields NaN again. All NaN values compare
//! equal to each other.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ParseRationalError;
pub use rational::Rational;
