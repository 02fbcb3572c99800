//! # Creating fixed point values
//!
//! A value is first represented exactly, in the smallest format that can hold it. Only when that is
//! impossible and a format was specified, the value is approximated in that format.
use std::cmp::max;

use num::{BigInt, BigRational};
use num_traits::{Float, Zero};
use tracing::debug;

use crate::error::Error;
use crate::fixed_point::FixedPoint;
use crate::number::{Kind, Number};
use crate::qformat::QFormat;
use crate::radix::has_finite_expansion;
use crate::rounding::div_round_half_even;

/// Outcome of an attempt to represent a value without rounding.
pub(crate) enum Exact {
    /// Represented in the smallest format that holds the value.
    Representable(FixedPoint),
    /// The value has no finite binary expansion.
    NeedsPrecision,
}

/// Represent a value exactly, in the smallest format that can hold it.
///
/// Fails for values that aren't real numbers or aren't finite.
pub(crate) fn try_exact(value: &Number) -> Result<Exact, Error> {
    match value {
        Number::FixedPoint(value) => Ok(Exact::Representable(value.clone())),
        Number::Integer(value) => from_integer(value.clone()).map(Exact::Representable),
        Number::Rational(value) => from_rational(value),
        Number::Real(value) => from_float(*value).map(Exact::Representable),
        Number::Complex(_) => Err(Error::UnsupportedOperand { operation: "construction", kind: Kind::Complex }),
    }
}

/// An integer in `Q(b + 1).0`, where `b` is the number of bits of its magnitude.
pub(crate) fn from_integer(value: BigInt) -> Result<FixedPoint, Error> {
    let qformat = QFormat::try_new(value.bits() + 1, 0)?;
    FixedPoint::from_numerator(value, qformat)
}

fn from_rational(value: &BigRational) -> Result<Exact, Error> {
    // `BigRational` is kept in lowest terms, so the denominator is a power of two or there is no
    // finite binary expansion
    if !has_finite_expansion(value.denom(), 2) {
        return Ok(Exact::NeedsPrecision);
    }

    let fraction_bits = value.denom().trailing_zeros().unwrap_or(0);
    let integer_bits = value.to_integer().bits() + 1;
    let qformat = QFormat::try_new(integer_bits, fraction_bits)?;

    FixedPoint::from_numerator(value.numer().clone(), qformat).map(Exact::Representable)
}

/// The float's own bits, with the binary point placed such that no zero bits are kept on either end.
fn from_float(value: f64) -> Result<FixedPoint, Error> {
    if !value.is_finite() {
        return Err(Error::NotFinite(value));
    }
    if value == 0_f64 {
        return Ok(FixedPoint::zero());
    }

    let (mantissa, exponent, sign) = value.integer_decode();
    let shift = mantissa.trailing_zeros();
    let (mantissa, exponent) = (mantissa >> shift, i64::from(exponent) + i64::from(shift));

    let significant_bits = i64::from(u64::BITS - mantissa.leading_zeros());
    // Both non-negative and small, an `f64` has an 11 bit exponent
    let integer_bits = max(significant_bits + exponent, 0) as u64 + 1;
    let fraction_bits = max(-exponent, 0) as u64;
    let qformat = QFormat::try_new(integer_bits, fraction_bits)?;

    let magnitude = BigInt::from(mantissa) << max(exponent, 0) as u64;
    let numerator = if sign < 0 { -magnitude } else { magnitude };

    FixedPoint::from_numerator(numerator, qformat)
}

/// The value rounded to the nearest numerator of a format, ties to even.
fn approximate(value: &Number, qformat: &QFormat) -> Result<FixedPoint, Error> {
    let rational = value.to_rational()
        .ok_or(Error::UnsupportedOperand { operation: "approximation", kind: value.kind() })?;
    debug!(%value, %qformat, "no exact representation, approximating");

    let numerator = div_round_half_even(&(rational.numer() * qformat.denominator()), rational.denom());
    FixedPoint::from_numerator(numerator, qformat.clone())
}

impl FixedPoint {
    /// Create a fixed point number.
    ///
    /// # Arguments
    ///
    /// * `value`: Any value that converts into a `Number`.
    /// * `qformat`: Precision of the result. If `None`, the value is represented exactly in the
    /// smallest format that can hold it.
    ///
    /// # Return value
    ///
    /// Without a format, the exact value or a `PrecisionUnavailable` error if the value has no
    /// finite binary expansion. With a format, the value in that format, rounded to the nearest
    /// representable value when necessary, or an `Overflow` error if it is out of range.
    ///
    /// Values that are not finite or not real fail in both cases.
    ///
    /// # Example
    ///
    /// ```
    /// use num::{BigInt, BigRational};
    /// use qfixed::{FixedPoint, QFormat};
    ///
    /// let exact = FixedPoint::construct(1.625, None).unwrap();
    /// assert_eq!(exact.qformat(), &QFormat::new(2, 3));
    ///
    /// let third = BigRational::new(BigInt::from(1), BigInt::from(3));
    /// assert!(FixedPoint::construct(third.clone(), None).is_err());
    /// let approximation = FixedPoint::construct(third, Some(&QFormat::new(1, 8))).unwrap();
    /// assert_eq!(approximation.to_string(), "0.33203125");
    /// ```
    pub fn construct(value: impl Into<Number>, qformat: Option<&QFormat>) -> Result<Self, Error> {
        let value = value.into();

        match qformat {
            None => match try_exact(&value) {
                Ok(Exact::Representable(fixed_point)) => Ok(fixed_point),
                Ok(Exact::NeedsPrecision) | Err(Error::Overflow { .. }) => {
                    Err(Error::PrecisionUnavailable(value.to_string()))
                },
                Err(error) => Err(error),
            },
            Some(qformat) => match try_exact(&value)? {
                Exact::Representable(fixed_point) => fixed_point.rescaled(qformat),
                Exact::NeedsPrecision => approximate(&value, qformat),
            },
        }
    }

    /// Represent a value exactly, see `construct`.
    pub fn new(value: impl Into<Number>) -> Result<Self, Error> {
        Self::construct(value, None)
    }

    /// Represent a value in a specific format, see `construct`.
    pub fn with_qformat(value: impl Into<Number>, qformat: &QFormat) -> Result<Self, Error> {
        Self::construct(value, Some(qformat))
    }
}
