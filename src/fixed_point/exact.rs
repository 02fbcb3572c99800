//! # Arithmetic between fixed point values
//!
//! Each operation derives the format of its result from the formats of its operands, such that
//! addition, subtraction and multiplication never lose precision and never overflow. Division
//! rounds to the nearest representable value.
use std::cmp::max;

use num::{BigInt, Integer};
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};

use crate::error::Error;
use crate::fixed_point::FixedPoint;
use crate::fixed_point::construct::from_integer;
use crate::number::Number;
use crate::number::native::real_power;
use crate::qformat::QFormat;
use crate::rounding::div_round_half_even;

/// Sum, in a format with one more integer bit than the widest operand for the carry.
pub(crate) fn add(lhs: &FixedPoint, rhs: &FixedPoint) -> Result<FixedPoint, Error> {
    let (a, b) = (&lhs.qformat, &rhs.qformat);
    let qformat = QFormat::try_new(
        u64::from(max(a.integer_bits(), b.integer_bits())) + 1,
        u64::from(max(a.fraction_bits(), b.fraction_bits())),
    )?;

    // Lossless, the result has at least as many fraction bits as either operand
    let lhs = qformat.rescale(&lhs.numerator, a)?;
    let rhs = qformat.rescale(&rhs.numerator, b)?;

    FixedPoint::from_numerator(lhs + rhs, qformat)
}

/// Difference, the sum with the negated right hand side.
pub(crate) fn subtract(lhs: &FixedPoint, rhs: &FixedPoint) -> Result<FixedPoint, Error> {
    add(lhs, &negate(rhs)?)
}

/// Additive inverse, in a format with one more integer bit such that the most negative value of the
/// operand's format can be negated.
pub(crate) fn negate(value: &FixedPoint) -> Result<FixedPoint, Error> {
    let qformat = QFormat::try_new(
        u64::from(value.qformat.integer_bits()) + 1,
        u64::from(value.qformat.fraction_bits()),
    )?;

    FixedPoint::from_numerator(-&value.numerator, qformat)
}

/// Product, in a format with the sum of the bits of both operands plus one integer bit.
pub(crate) fn multiply(lhs: &FixedPoint, rhs: &FixedPoint) -> Result<FixedPoint, Error> {
    let (a, b) = (&lhs.qformat, &rhs.qformat);
    let qformat = QFormat::try_new(
        u64::from(a.integer_bits()) + u64::from(b.integer_bits()) + 1,
        u64::from(a.fraction_bits()) + u64::from(b.fraction_bits()),
    )?;

    let lhs = qformat.rescale(&lhs.numerator, a)?;
    let rhs = qformat.rescale(&rhs.numerator, b)?;
    // Both factors carry the scale of the result, one of them is removed again. Exact, each factor
    // has at least the other operand's fraction bits as trailing zeros.
    let product = (lhs * rhs).div_floor(qformat.denominator());

    FixedPoint::from_numerator(product, qformat)
}

/// Quotient, rounded twice with ties to even.
///
/// The quotient is first rounded to the nearest value of a working format that is at least as wide
/// as both operands and the result format, and then rounded again when it is rescaled into the
/// result format. The result is therefore not always the value of the result format nearest to the
/// exact quotient.
pub(crate) fn divide(dividend: &FixedPoint, divisor: &FixedPoint) -> Result<FixedPoint, Error> {
    if divisor.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let (a, b) = (&dividend.qformat, &divisor.qformat);
    let target = QFormat::try_new(
        u64::from(a.integer_bits()) + u64::from(b.fraction_bits()) + 1,
        u64::from(b.integer_bits()) + u64::from(a.fraction_bits()),
    )?;
    let Some(working) = QFormat::combine([a, b, &target]) else {
        unreachable!("three formats were combined");
    };

    let lhs = working.rescale(&dividend.numerator, a)?;
    let rhs = working.rescale(&divisor.numerator, b)?;
    let quotient = div_round_half_even(&(lhs * working.denominator()), &rhs);

    FixedPoint::from_numerator(quotient, working)?.rescaled(&target)
}

/// Power, exact when the exponent is an integer.
///
/// A negative integer exponent divides one by the positive power, which rounds. A fractional
/// exponent is evaluated with floats.
pub(crate) fn power(base: &FixedPoint, exponent: &FixedPoint) -> Result<Number, Error> {
    if !exponent.is_integer() {
        return real_power(f64::from(base), f64::from(exponent));
    }

    let integer_exponent = exponent.floor();
    let k = integer_exponent.magnitude().to_u32()
        .ok_or_else(|| Error::ExponentOutOfRange(integer_exponent.clone()))?;
    if k == 0 {
        return Ok(Number::FixedPoint(FixedPoint::one()));
    }

    let qformat = QFormat::try_new(
        u64::from(base.qformat.integer_bits().saturating_sub(1)) * u64::from(k) + 1,
        u64::from(base.qformat.fraction_bits()) * u64::from(k),
    )?;
    let positive = FixedPoint::from_numerator(Pow::pow(&base.numerator, k), qformat)?;

    if integer_exponent.is_negative() {
        divide(&FixedPoint::one(), &positive).map(Number::FixedPoint)
    } else {
        Ok(Number::FixedPoint(positive))
    }
}

/// Remainder of the floor division, `lhs - rhs * floor(lhs / rhs)`.
pub(crate) fn remainder(lhs: &FixedPoint, rhs: &FixedPoint) -> Result<FixedPoint, Error> {
    let quotient = from_integer(divide(lhs, rhs)?.floor())?;
    subtract(lhs, &multiply(rhs, &quotient)?)
}

/// The integer `10^digits` as a fixed point value.
pub(crate) fn power_of_ten(digits: u32) -> Result<FixedPoint, Error> {
    from_integer(Pow::pow(BigInt::from(10), digits))
}
