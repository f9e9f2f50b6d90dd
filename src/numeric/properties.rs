// ============================================================================
// Property Tests
// Algebraic laws of canonical ratios under random operands
// ============================================================================

use super::gcd::binary_gcd;
use super::{Ratio, RatioError};
use proptest::prelude::*;
use quickcheck::quickcheck;
use std::cmp::Ordering;

fn any_ratio() -> impl Strategy<Value = Ratio> {
    (any::<i64>(), any::<i64>().prop_filter("non-zero denominator", |d| *d != 0))
        .prop_filter_map("representable", |(n, d)| Ratio::new(n, d).ok())
}

fn small_ratio() -> impl Strategy<Value = Ratio> {
    (-1_000_000i64..=1_000_000, 1i64..=1_000_000)
        .prop_map(|(n, d)| Ratio::new(n, d).expect("small operands are representable"))
}

fn is_canonical(ratio: Ratio) -> bool {
    let d = ratio.denominator();
    d >= 1
        && binary_gcd(ratio.numerator().unsigned_abs(), d as u64) == 1
        && (ratio.numerator() != 0 || d == 1)
}

proptest! {
    #[test]
    fn new_is_canonical(n in any::<i64>(), d in any::<i64>()) {
        match Ratio::new(n, d) {
            Ok(ratio) => prop_assert!(is_canonical(ratio)),
            Err(RatioError::DivisionByZero) => prop_assert_eq!(d, 0),
            Err(RatioError::Overflow) => {
                // only a reduced magnitude of 2^63 can fail
                let g = binary_gcd(n.unsigned_abs(), d.unsigned_abs());
                let negative = (n < 0) != (d < 0);
                let n_overflows = n.unsigned_abs() / g > i64::MAX as u64
                    && !(negative && n.unsigned_abs() / g == i64::MIN.unsigned_abs());
                let d_overflows = d.unsigned_abs() / g > i64::MAX as u64;
                prop_assert!(n_overflows || d_overflows);
            }
            Err(other) => prop_assert!(false, "unexpected error {other:?}"),
        }
    }

    #[test]
    fn scaling_preserves_value(n in -10_000i64..10_000, d in 1i64..10_000, k in 1i64..10_000) {
        prop_assert_eq!(Ratio::new(n * k, d * k).unwrap(), Ratio::new(n, d).unwrap());
        prop_assert_eq!(Ratio::new(-n * k, -d * k).unwrap(), Ratio::new(n, d).unwrap());
    }

    #[test]
    fn additive_inverse(a in any_ratio()) {
        if let Ok(negated) = a.checked_neg() {
            prop_assert_eq!(a.checked_add(negated), Ok(Ratio::ZERO));
        }
    }

    #[test]
    fn multiplicative_inverse(a in any_ratio()) {
        prop_assume!(!a.is_zero());
        if let Ok(inverse) = a.reciprocal() {
            prop_assert_eq!(a.checked_mul(inverse), Ok(Ratio::ONE));
            prop_assert_eq!(inverse.reciprocal(), Ok(a));
        }
    }

    #[test]
    fn arithmetic_stays_canonical(a in any_ratio(), b in any_ratio()) {
        for result in [a.checked_add(b), a.checked_sub(b), a.checked_mul(b), a.checked_div(b)] {
            if let Ok(value) = result {
                prop_assert!(is_canonical(value));
            }
        }
    }

    #[test]
    fn small_arithmetic_matches_cross_products(a in small_ratio(), b in small_ratio()) {
        let (an, ad) = (a.numerator() as i128, a.denominator() as i128);
        let (bn, bd) = (b.numerator() as i128, b.denominator() as i128);

        let sum = a.checked_add(b).unwrap();
        prop_assert_eq!(sum.numerator() as i128 * ad * bd, (an * bd + bn * ad) * sum.denominator() as i128);

        let product = a.checked_mul(b).unwrap();
        prop_assert_eq!(product.numerator() as i128 * ad * bd, an * bn * product.denominator() as i128);
    }

    #[test]
    fn ordering_matches_subtraction_sign(a in any_ratio(), b in any_ratio()) {
        if let Ok(difference) = a.checked_sub(b) {
            prop_assert_eq!(a.cmp(&b), difference.numerator().cmp(&0));
            prop_assert_eq!(a.checked_cmp(b), Ok(a.cmp(&b)));
            prop_assert_eq!(a == b, a.cmp(&b) == Ordering::Equal);
        }
    }

    #[test]
    fn ordering_is_antisymmetric(a in any_ratio(), b in any_ratio()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn float_approximation_is_close(a in any_ratio()) {
        let expected = a.numerator() as f64 / a.denominator() as f64;
        let approx = a.to_f64();
        prop_assert!((approx - expected).abs() <= expected.abs() * f64::EPSILON);
    }
}

fn binary_gcd_divides_both(a: u64, b: u64) -> bool {
    let g = binary_gcd(a, b);
    if g == 0 {
        return a == 0 && b == 0;
    }
    a % g == 0 && b % g == 0 && binary_gcd(a / g, b / g) == 1
}

fn default_hash_matches_zero(n: i8) -> bool {
    use std::collections::HashSet;
    let set: HashSet<Ratio> = [Ratio::default(), Ratio::ZERO, Ratio::from(n)].into_iter().collect();
    set.len() == if n == 0 { 1 } else { 2 }
}

quickcheck! {
    fn qc_binary_gcd_divides_both(a: u64, b: u64) -> bool {
        binary_gcd_divides_both(a, b)
    }

    fn qc_default_hash_matches_zero(n: i8) -> bool {
        default_hash_matches_zero(n)
    }
}
