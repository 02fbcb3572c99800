use approx::assert_relative_eq;
use num::complex::Complex64;
use num::{BigInt, BigRational, Zero};

use qfixed::{Error, FixedPoint, Kind, Number, FP, Q};

use super::ratio;

fn complex(re: f64, im: f64) -> Number {
    Number::Complex(Complex64::new(re, im))
}

fn assert_complex_eq(value: Number, re: f64, im: f64) {
    match value {
        Number::Complex(value) => {
            assert_relative_eq!(value.re, re, epsilon = 1e-12);
            assert_relative_eq!(value.im, im, epsilon = 1e-12);
        },
        other => panic!("expected a complex number, got {other:?}"),
    }
}

#[test]
fn addition() {
    let value = FP!(12.1875);

    let sum = value.checked_add(3).unwrap();
    assert_eq!(sum.kind(), Kind::FixedPoint);
    assert_eq!(sum, Number::from(FP!(15.1875)));
    assert_eq!(Number::from(3).checked_add(&Number::from(&value)), Ok(Number::from(FP!(15.1875))));

    assert_eq!(value.checked_add(FP!(0.8125)), Ok(Number::from(FP!(13))));
    assert_eq!(value.checked_add(ratio(1, 3)), Ok(Number::Rational(ratio(601, 48))));
    assert_eq!(Number::from(ratio(1, 3)).checked_add(&Number::from(&value)), Ok(Number::Rational(ratio(601, 48))));
    assert_eq!(value.checked_add(0.5), Ok(Number::Real(12.6875)));
    assert_eq!(Number::from(0.5).checked_add(&Number::from(&value)), Ok(Number::Real(12.6875)));
    assert_eq!(value.checked_add(Complex64::new(1_f64, 2_f64)), Ok(complex(13.1875, 2_f64)));
    assert_eq!(complex(1_f64, 2_f64).checked_add(&Number::from(&value)), Ok(complex(13.1875, 2_f64)));
}

#[test]
fn subtraction() {
    assert_eq!(FP!(10).checked_sub(FP!(4.5)), Ok(Number::from(FP!(5.5))));
    assert_eq!(Number::from(10).checked_sub(&Number::from(FP!(4.5))), Ok(Number::from(FP!(5.5))));
    assert_eq!(FP!(4.5).checked_sub(10), Ok(Number::from(FP!(-5.5))));

    assert_eq!(Number::from(ratio(7, 2)).checked_sub(&Number::from(FP!(2.25))), Ok(Number::Rational(ratio(5, 4))));
    assert_eq!(FP!(2.25).checked_sub(ratio(7, 2)), Ok(Number::Rational(ratio(-5, 4))));
    assert_eq!(Number::from(6_f64).checked_sub(&Number::from(FP!(2.375))), Ok(Number::Real(3.625)));
    assert_eq!(FP!(2.375).checked_sub(6_f64), Ok(Number::Real(-3.625)));
    assert_eq!(complex(6.125, 1_f64).checked_sub(&Number::from(FP!(3))), Ok(complex(3.125, 1_f64)));
    assert_eq!(FP!(3).checked_sub(Complex64::new(6.125, 1_f64)), Ok(complex(-3.125, -1_f64)));
}

#[test]
fn multiplication() {
    let product = FP!(2.5).checked_mul(4).unwrap();
    assert_eq!(product, Number::from(FP!(10)));
    assert_eq!(Number::from(4).checked_mul(&Number::from(FP!(2.5))), Ok(product));

    assert_eq!(FP!(12.1875).checked_mul(ratio(1, 3)), Ok(Number::Rational(ratio(65, 16))));
    assert_eq!(Number::from(ratio(1, 3)).checked_mul(&Number::from(FP!(12.1875))), Ok(Number::Rational(ratio(65, 16))));
    assert_eq!(FP!(12.1875).checked_mul(2_f64), Ok(Number::Real(24.375)));

    let value = FP!(14.625, 5, 11);
    assert_eq!(value.checked_mul(Complex64::new(3_f64, -2_f64)), Ok(complex(43.875, -29.25)));
    assert_eq!(complex(3_f64, -2_f64).checked_mul(&Number::from(&value)), Ok(complex(43.875, -29.25)));
}

#[test]
fn division() {
    match FP!(10, 8, 8).checked_div(3) {
        Ok(Number::FixedPoint(quotient)) => {
            assert_eq!(quotient.to_string(), "3.33349609375");
            assert_eq!(quotient.qformat(), &Q!(9, 11));
        },
        other => panic!("expected a fixed point quotient, got {other:?}"),
    }
    match Number::from(10).checked_div(&Number::from(FP!(3, 8, 8))) {
        Ok(Number::FixedPoint(quotient)) => {
            assert_eq!(quotient.to_string(), "3.33203125");
            assert_eq!(quotient.qformat(), &Q!(14, 8));
        },
        other => panic!("expected a fixed point quotient, got {other:?}"),
    }

    assert_eq!(FP!(12.1875).checked_div(ratio(1, 16)), Ok(Number::Rational(ratio(195, 1))));
    assert_eq!(Number::from(ratio(1, 2)).checked_div(&Number::from(FP!(0.25))), Ok(Number::Rational(ratio(2, 1))));
    assert_eq!(FP!(12.1875).checked_div(0.5), Ok(Number::Real(24.375)));
    assert_eq!(complex(12_f64, 6_f64).checked_div(&Number::from(FP!(3, 5, 11))), Ok(complex(4_f64, 2_f64)));
    assert_complex_eq(FP!(14.625, 5, 11).checked_div(Complex64::new(3_f64, -1_f64)).unwrap(), 4.3875, 1.4625);

    assert_eq!(FP!(1).checked_div(0), Err(Error::DivisionByZero));
    assert_eq!(Number::from(1).checked_div(&Number::from(FixedPoint::zero())), Err(Error::DivisionByZero));
    assert_eq!(FP!(1).checked_div(ratio(0, 1)), Err(Error::DivisionByZero));
}

#[test]
fn floor_division() {
    assert_eq!(Number::from(8.25).floor_div(&Number::from(FP!(1.5))), Ok(BigInt::from(5)));
    assert_eq!(FP!(7.5).floor_div(2), Ok(BigInt::from(3)));
    assert_eq!(FP!(-7.5).floor_div(2), Ok(BigInt::from(-4)));
    assert_eq!(Number::from(ratio(195, 16)).floor_div(&Number::from(FP!(0.125))), Ok(BigInt::from(97)));
    assert_eq!(FP!(12.1875).floor_div(ratio(1, 3)), Ok(BigInt::from(36)));
    assert!(matches!(
        FP!(14.625).floor_div(Complex64::new(3_f64, -1_f64)),
        Err(Error::UnsupportedOperand { kind: Kind::Complex, .. }),
    ));
}

#[test]
fn modulo() {
    assert_eq!(Number::from(12).modulo(&Number::from(FP!(5, 8, 8))), Ok(Number::from(FP!(2))));
    assert_eq!(FP!(14.5).modulo(3), Ok(Number::from(FP!(2.5))));
    assert_eq!(FP!(-7.5).modulo(2), Ok(Number::from(FP!(0.5))));
    assert_eq!(FP!(7.5).modulo(-2), Ok(Number::from(FP!(-0.5))));

    let rational = BigRational::from_float(2.6).unwrap();
    assert_eq!(
        Number::from(rational).modulo(&Number::from(FP!(0.0625))),
        Ok(Number::Rational(BigRational::new(
            BigInt::from(84_442_493_013_197_i64),
            BigInt::from(2_251_799_813_685_248_i64),
        ))),
    );
    assert_eq!(Number::from(8.25).modulo(&Number::from(FP!(1.5))), Ok(Number::Real(0.75)));
    assert!(matches!(
        complex(12_f64, 6_f64).modulo(&Number::from(FP!(3))),
        Err(Error::UnsupportedOperand { kind: Kind::Complex, .. }),
    ));
}

#[test]
fn power() {
    assert_eq!(FP!(4).checked_pow(-2), Ok(Number::from(FP!(0.0625))));
    assert_eq!(FP!(2.5).checked_pow(FP!(2)), Ok(Number::from(FP!(6.25))));
    assert_eq!(Number::from(2).checked_pow(&Number::from(FP!(3))), Ok(Number::from(FP!(8))));
    assert_eq!(FP!(-1.5).checked_pow(0), Ok(Number::from(FP!(1))));
    assert_eq!(FP!(2).checked_pow(ratio(3, 1)), Ok(Number::Rational(ratio(8, 1))));

    match FP!(4).checked_pow(ratio(1, 2)) {
        Ok(Number::Real(value)) => assert_relative_eq!(value, 2_f64),
        other => panic!("expected a float, got {other:?}"),
    }
    match FP!(2).checked_pow(FP!(0.5)) {
        Ok(Number::Real(value)) => assert_relative_eq!(value, std::f64::consts::SQRT_2),
        other => panic!("expected a float, got {other:?}"),
    }
    match Number::from(2.25).checked_pow(&Number::from(FP!(0.5))) {
        Ok(Number::Real(value)) => assert_relative_eq!(value, 1.5),
        other => panic!("expected a float, got {other:?}"),
    }
    assert_complex_eq(FP!(-4).checked_pow(FP!(0.5)).unwrap(), 0_f64, 2_f64);
    assert_complex_eq(FP!(3).checked_pow(Complex64::new(2_f64, 0_f64)).unwrap(), 9_f64, 0_f64);
}

#[test]
fn comparison() {
    let value = FP!(12.1875);

    assert_eq!(value, ratio(195, 16));
    assert_eq!(ratio(195, 16), value);
    assert_eq!(value, 12.1875_f64);
    assert!(value < 12.2_f64);
    assert!(12_i32 < value);
    assert!(value > BigInt::from(12));
    assert_eq!(value, Complex64::new(12.1875, 0_f64));
    assert_ne!(value, Complex64::new(12.1875, 1_f64));
    assert_eq!(value, Number::from(FP!(12.1875, 10, 10)));
    assert!(value.partial_cmp(&f64::NAN).is_none());
}
