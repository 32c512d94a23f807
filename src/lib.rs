//! # ratpoly
//!
//! Exact single-variable polynomial algebra over the rationals.
//!
//! ## Features
//!
//! - **Exact Coefficients**: arbitrary precision rationals via `dashu`
//! - **Canonical Form**: sorted, merged, zero-free sparse term lists
//! - **Arithmetic**: negation, addition, subtraction, multiplication,
//!   truncating long division
//! - **Calculus**: derivatives, antiderivatives, definite integrals
//! - **Infectious NaN**: undefined results propagate instead of panicking
//!
//! ## Quick Start
//!
//! ```rust
//! use ratpoly::prelude::*;
//!
//! let p: RatPoly = "x^3+x-1".parse().unwrap();
//! let q: RatPoly = "x+1".parse().unwrap();
//! assert_eq!(p.div(&q).to_string(), "x^2-x+2");
//! assert_eq!(p.differentiate().to_string(), "3*x^2+1");
//! assert!(p.div(&RatPoly::ZERO).is_nan());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ratpoly_integers as integers;
pub use ratpoly_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ratpoly_integers::Rational;
    pub use ratpoly_poly::{RatPoly, Term};
}
