use num::{BigInt, BigRational, Signed, Zero};
use proptest::prelude::*;

use qfixed::FixedPoint;

use super::{fixed_point, round_half_even};

proptest! {
    #[test]
    fn exact_construction((value, rational) in fixed_point()) {
        prop_assert_eq!(value.to_rational(), rational.clone());
        prop_assert_eq!(value.numerator(), rational.numer().clone());
        prop_assert_eq!(value.denominator(), rational.denom().clone());
        prop_assert_eq!(value.to_string().parse::<FixedPoint>().unwrap(), value);
    }

    #[test]
    fn float_construction(float in prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO) {
        let value = FixedPoint::new(float).unwrap();
        prop_assert_eq!(f64::from(&value), float);
        prop_assert_eq!(value, float);
    }

    #[test]
    fn exact_addition((a, x) in fixed_point(), (b, y) in fixed_point()) {
        prop_assert_eq!((&a + &b).to_rational(), &x + &y);
        prop_assert_eq!((&a - &b).to_rational(), &x - &y);
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&(&a - &b) + &b, a);
    }

    #[test]
    fn exact_multiplication((a, x) in fixed_point(), (b, y) in fixed_point()) {
        prop_assert_eq!((&a * &b).to_rational(), &x * &y);
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn multiplication_then_division((a, _) in fixed_point(), (b, _) in fixed_point()) {
        prop_assume!(!b.is_zero());

        prop_assert_eq!(&(&a * &b) / &b, a);
    }

    #[test]
    fn rounded_division((a, x) in fixed_point(), (b, y) in fixed_point()) {
        prop_assume!(!b.is_zero());

        let quotient = &a / &b;
        let result_bits = quotient.qformat().fraction_bits();
        let working_bits = [a.qformat(), b.qformat(), quotient.qformat()].iter()
            .map(|qformat| qformat.fraction_bits())
            .max()
            .unwrap();

        // Nearest in the working format, then nearest of that in the result format
        let scale = |bits: u32| BigRational::from_integer(BigInt::from(1) << bits);
        let working = round_half_even(&(&x / &y * scale(working_bits)));
        let expected = round_half_even(&BigRational::new(working, BigInt::from(1) << (working_bits - result_bits)));

        prop_assert_eq!(quotient.raw_numerator(), &expected);
        let unit = BigRational::new(BigInt::from(1), BigInt::from(1) << result_bits);
        prop_assert!((quotient.to_rational() - &x / &y).abs() < unit);
    }

    #[test]
    fn integer_rounding((value, rational) in fixed_point()) {
        prop_assert_eq!(value.floor(), rational.floor().to_integer());
        prop_assert_eq!(value.ceil(), rational.ceil().to_integer());
        prop_assert_eq!(value.trunc(), rational.trunc().to_integer());
        prop_assert!(value.floor() <= value.round() && value.round() <= value.ceil());
    }

    #[test]
    fn floor_division_and_modulo((a, x) in fixed_point(), (b, y) in fixed_point()) {
        prop_assume!(!b.is_zero());

        let quotient = a.floor_div(&b).unwrap();
        // Computed from the rounded quotient, so at most one off
        let exact = (&x / &y).floor().to_integer();
        prop_assert!((&quotient - &exact).abs() <= BigInt::from(1));

        let remainder = &a % &b;
        prop_assert_eq!(remainder.to_rational(), &x - &y * BigRational::from_integer(quotient));
    }

    #[test]
    fn ordering((a, x) in fixed_point(), (b, y) in fixed_point()) {
        prop_assert_eq!(a.cmp(&b), x.cmp(&y));
        prop_assert_eq!(a == b, x == y);
        prop_assert_eq!(a.partial_cmp(&y), x.partial_cmp(&y));
        prop_assert!(x.is_integer() == a.is_integer());
    }
}
