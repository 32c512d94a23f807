//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use ratpoly_integers::Rational;

    use crate::poly::RatPoly;
    use crate::term::Term;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Rational> {
        (-20i64..20i64, 1i64..6i64).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn small_term() -> impl Strategy<Value = Term> {
        (small_coeff(), 0u32..6u32).prop_map(|(c, e)| Term::new(c, e))
    }

    // Strategy for generating small polynomials (degree 0-5)
    fn small_poly() -> impl Strategy<Value = RatPoly> {
        proptest::collection::vec(small_term(), 0..=5).prop_map(|terms| {
            terms
                .into_iter()
                .fold(RatPoly::zero(), |p, t| p.add(&RatPoly::from(t)))
        })
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = RatPoly> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        // Canonical form

        #[test]
        fn results_are_canonical(a in small_poly(), b in nonzero_poly()) {
            prop_assert_eq!(a.check_invariants(), Ok(()));
            prop_assert_eq!(a.add(&b).check_invariants(), Ok(()));
            prop_assert_eq!(a.mul(&b).check_invariants(), Ok(()));
            let (q, r) = a.div_rem(&b);
            prop_assert_eq!(q.check_invariants(), Ok(()));
            prop_assert_eq!(r.check_invariants(), Ok(()));
            prop_assert_eq!(a.differentiate().check_invariants(), Ok(()));
            prop_assert_eq!(a.anti_differentiate(&Rational::ONE).check_invariants(), Ok(()));
        }

        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_add_then_sub(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).sub(&b), a);
        }

        #[test]
        fn poly_double_negation(a in small_poly()) {
            prop_assert_eq!(a.negate().negate(), a);
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = RatPoly::from_int(1, 0);
            prop_assert_eq!(a.mul(&one), a);
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // deg(a * b) = deg(a) + deg(b) for non-zero polynomials
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        // Division

        #[test]
        fn div_remainder_has_smaller_degree(p in small_poly(), q in nonzero_poly()) {
            let r = p.sub(&q.mul(&p.div(&q)));
            prop_assert!(r.is_zero() || r.degree() < q.degree());
        }

        #[test]
        fn div_rem_reconstructs_dividend(p in small_poly(), q in nonzero_poly()) {
            let (quot, rem) = p.div_rem(&q);
            prop_assert_eq!(quot.mul(&q).add(&rem), p);
        }

        #[test]
        fn div_by_zero_is_nan(p in small_poly()) {
            prop_assert!(p.div(&RatPoly::zero()).is_nan());
        }

        // Calculus

        #[test]
        fn constant_derivative_is_zero(c in small_coeff()) {
            let p = RatPoly::from(Term::new(c, 0));
            prop_assert!(p.differentiate().is_zero());
        }

        #[test]
        fn antiderivative_then_derivative(a in small_poly()) {
            prop_assert_eq!(a.anti_differentiate(&Rational::ZERO).differentiate(), a);
        }

        // Evaluation

        #[test]
        fn eval_is_linear(a in small_poly(), b in small_poly(), x in -4.0f64..4.0f64) {
            let lhs = a.add(&b).eval(x);
            let rhs = a.eval(x) + b.eval(x);
            prop_assert!((lhs - rhs).abs() <= 1e-9 * lhs.abs().max(1.0));
        }

        // Text form

        #[test]
        fn display_parse_round_trip(a in small_poly()) {
            prop_assert_eq!(RatPoly::value_of(&a.to_string()), Ok(a));
        }

        // NaN absorption

        #[test]
        fn nan_absorbs_every_operation(a in small_poly(), x in -4.0f64..4.0f64) {
            let nan = RatPoly::nan();
            prop_assert!(a.add(&nan).is_nan());
            prop_assert!(nan.sub(&a).is_nan());
            prop_assert!(a.mul(&nan).is_nan());
            prop_assert!(a.div(&nan).is_nan());
            prop_assert!(nan.div(&a).is_nan());
            prop_assert!(nan.negate().is_nan());
            prop_assert!(nan.differentiate().is_nan());
            prop_assert!(nan.anti_differentiate(&Rational::ONE).is_nan());
            prop_assert!(a.anti_differentiate(&Rational::NAN).is_nan());
            prop_assert!(nan.eval(x).is_nan());
            prop_assert!(nan.integrate(0.0, x).is_nan());
            prop_assert!(a.integrate(f64::NAN, x).is_nan());
        }
    }
}
