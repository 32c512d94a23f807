//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Rational;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        // Rational field axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_add_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((&a + &b) + &c, a + (&b + &c));
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_additive_inverse(a in rational()) {
            prop_assert!((&a + &(-&a)).is_zero());
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let product = &a * &a.recip();
            prop_assert!(product.is_one());
        }

        #[test]
        fn rational_sub_then_add(a in rational(), b in rational()) {
            prop_assert_eq!((&a - &b) + &b, a);
        }

        // NaN absorption

        #[test]
        fn nan_absorbs_every_operation(a in rational()) {
            let nan = Rational::NAN;
            prop_assert!((&a + &nan).is_nan());
            prop_assert!((&nan - &a).is_nan());
            prop_assert!((&a * &nan).is_nan());
            prop_assert!((&nan / &a).is_nan());
            prop_assert!((&a / &Rational::ZERO).is_nan());
        }

        // Text form

        #[test]
        fn display_parse_round_trip(a in rational()) {
            let text = a.to_string();
            prop_assert_eq!(text.parse::<Rational>(), Ok(a));
        }

        #[test]
        fn to_f64_matches_quotient(num in small_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let expected = num as f64 / den as f64;
            prop_assert!((a.to_f64() - expected).abs() <= 1e-12 * expected.abs().max(1.0));
        }
    }
}
