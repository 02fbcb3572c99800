//! # Arithmetic between numbers that aren't fixed point
//!
//! Both operands are promoted to the higher of their two kinds and the operation is evaluated with
//! the arithmetic of that kind. Exact kinds stay exact where possible: integer division yields a
//! rational, as does an integer raised to a negative power.
use num::complex::Complex64;
use num::{BigInt, BigRational};
use num_traits::{ToPrimitive, Zero};

use crate::error::Error;
use crate::fixed_point::promotion::Operation;
use crate::number::{Kind, Number};

/// Complex powers with an integral exponent up to this magnitude are computed by multiplication.
const MAX_MULTIPLIED_EXPONENT: f64 = 100_f64;

/// Apply an operation to two numbers in the arithmetic of the higher of their kinds.
///
/// Fixed point operands are treated as rationals.
pub(crate) fn apply(operation: Operation, lhs: &Number, rhs: &Number) -> Result<Number, Error> {
    let kind = match lhs.kind().max(rhs.kind()) {
        Kind::FixedPoint => Kind::Rational,
        other => other,
    };

    match (lhs.promote(kind), rhs.promote(kind)) {
        (Number::Integer(lhs), Number::Integer(rhs)) => integer(operation, lhs, rhs),
        (Number::Rational(lhs), Number::Rational(rhs)) => rational(operation, lhs, rhs),
        (Number::Real(lhs), Number::Real(rhs)) => real(operation, lhs, rhs),
        (Number::Complex(lhs), Number::Complex(rhs)) => complex(operation, lhs, rhs),
        (_, rhs) => Err(Error::UnsupportedOperand { operation: operation.name(), kind: rhs.kind() }),
    }
}

fn integer(operation: Operation, lhs: BigInt, rhs: BigInt) -> Result<Number, Error> {
    match operation {
        Operation::Add => Ok(Number::Integer(lhs + rhs)),
        Operation::Multiply => Ok(Number::Integer(lhs * rhs)),
        Operation::Divide => rational(operation, BigRational::from_integer(lhs), BigRational::from_integer(rhs)),
        Operation::Power => match rhs.to_u32() {
            Some(exponent) => Ok(Number::Integer(lhs.pow(exponent))),
            None => rational(operation, BigRational::from_integer(lhs), BigRational::from_integer(rhs)),
        },
    }
}

fn rational(operation: Operation, lhs: BigRational, rhs: BigRational) -> Result<Number, Error> {
    match operation {
        Operation::Add => Ok(Number::Rational(lhs + rhs)),
        Operation::Multiply => Ok(Number::Rational(lhs * rhs)),
        Operation::Divide => {
            if rhs.is_zero() {
                return Err(Error::DivisionByZero);
            }
            Ok(Number::Rational(lhs / rhs))
        },
        Operation::Power => {
            if !rhs.is_integer() {
                let as_float = |value: &BigRational| value.to_f64().unwrap_or(f64::NAN);
                return real_power(as_float(&lhs), as_float(&rhs));
            }

            let exponent = rhs.to_integer();
            let exponent = exponent.to_i32().ok_or(Error::ExponentOutOfRange(exponent))?;
            if lhs.is_zero() && exponent < 0 {
                return Err(Error::DivisionByZero);
            }
            Ok(Number::Rational(lhs.pow(exponent)))
        },
    }
}

fn real(operation: Operation, lhs: f64, rhs: f64) -> Result<Number, Error> {
    match operation {
        Operation::Add => Ok(Number::Real(lhs + rhs)),
        Operation::Multiply => Ok(Number::Real(lhs * rhs)),
        Operation::Divide => {
            if rhs == 0_f64 {
                return Err(Error::DivisionByZero);
            }
            Ok(Number::Real(lhs / rhs))
        },
        Operation::Power => real_power(lhs, rhs),
    }
}

fn complex(operation: Operation, lhs: Complex64, rhs: Complex64) -> Result<Number, Error> {
    match operation {
        Operation::Add => Ok(Number::Complex(lhs + rhs)),
        Operation::Multiply => Ok(Number::Complex(lhs * rhs)),
        Operation::Divide => {
            if rhs.is_zero() {
                return Err(Error::DivisionByZero);
            }
            Ok(Number::Complex(lhs / rhs))
        },
        Operation::Power => complex_power(lhs, rhs).map(Number::Complex),
    }
}

/// Raise a float to a float power.
///
/// A negative base with a non-integral exponent has no real result, the complex principal value is
/// returned instead.
pub(crate) fn real_power(base: f64, exponent: f64) -> Result<Number, Error> {
    if base == 0_f64 && exponent < 0_f64 {
        Err(Error::DivisionByZero)
    } else if base < 0_f64 && exponent.fract() != 0_f64 && exponent.is_finite() {
        complex_power(Complex64::new(base, 0_f64), Complex64::new(exponent, 0_f64)).map(Number::Complex)
    } else {
        Ok(Number::Real(base.powf(exponent)))
    }
}

fn complex_power(base: Complex64, exponent: Complex64) -> Result<Complex64, Error> {
    if exponent.is_zero() {
        return Ok(Complex64::new(1_f64, 0_f64));
    }
    if base.is_zero() {
        return if exponent.im != 0_f64 || exponent.re < 0_f64 {
            Err(Error::DivisionByZero)
        } else {
            Ok(Complex64::zero())
        };
    }

    let integral = exponent.im == 0_f64
        && exponent.re.fract() == 0_f64
        && exponent.re.abs() <= MAX_MULTIPLIED_EXPONENT;
    if integral {
        // Exact where the intermediate products are
        Ok(base.powi(exponent.re as i32))
    } else {
        Ok(base.powc(exponent))
    }
}
