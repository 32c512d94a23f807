//! Working-list helpers that keep a term list in canonical form.
//!
//! A canonical list is sorted by strictly decreasing exponent and holds no
//! zero coefficients. Every helper here takes a canonical list and leaves
//! it canonical. The lists are scratch space; `RatPoly` freezes them once
//! an operation is done.

use log::debug;
use num_traits::Zero;
use ratpoly_integers::Rational;

use crate::term::Term;

/// Inserts `term` into a canonical list, merging with an equal exponent.
///
/// A merge that cancels to zero removes the existing term. Inserting a zero
/// term is a no-op.
pub fn sorted_insert(terms: &mut Vec<Term>, term: Term) {
    if term.is_zero() {
        return;
    }

    // Descending order: a larger exponent sorts first.
    match terms.binary_search_by(|probe| term.expt().cmp(&probe.expt())) {
        Ok(i) => match terms[i].add(&term) {
            Some(sum) if sum.is_zero() => {
                terms.remove(i);
            }
            Some(sum) => terms[i] = sum,
            None => terms[i] = Term::NAN,
        },
        Err(i) => terms.insert(i, term),
    }
}

/// Multiplies every coefficient by `scalar`.
///
/// Scaling by exact zero clears the list.
pub fn scale_coeffs(terms: &mut Vec<Term>, scalar: &Rational) {
    if scalar.is_zero() {
        terms.clear();
        return;
    }
    for term in terms.iter_mut() {
        *term = term.scale(scalar);
    }
}

/// Adds `delta` to every exponent.
///
/// Terms whose shifted exponent would be zero or negative fold into the
/// constant term instead of being dropped. If any shifted exponent exceeds
/// `u32::MAX` the list collapses to the single NaN term.
pub fn shift_exponents(terms: &mut Vec<Term>, delta: i64) {
    if delta == 0 {
        return;
    }

    let mut constants = Vec::new();
    let mut shifted = Vec::with_capacity(terms.len());
    for term in std::mem::take(terms) {
        let expt = i64::from(term.expt()) + delta;
        if expt <= 0 {
            constants.push(term.with_expt(0));
            continue;
        }
        let Ok(expt) = u32::try_from(expt) else {
            debug!("exponent {expt} exceeds u32 range");
            *terms = vec![Term::NAN];
            return;
        };
        shifted.push(term.with_expt(expt));
    }

    *terms = shifted;
    for constant in constants {
        sorted_insert(terms, constant);
    }
}
