//! # Binary fixed point numbers
//!
//! A `FixedPoint` is a signed integer numerator together with a `QFormat` that says where the binary
//! point is. Values are immutable: every operation creates a new value, possibly in a new format.
//!
//! Arithmetic between two fixed point values is exact where it can be (addition, subtraction,
//! multiplication and integer powers) and rounds to the nearest representable value otherwise
//! (division). Mixing with other kinds of numbers follows the promotion rules of the `promotion`
//! module.
use std::fmt;
use std::str::FromStr;

use num::bigint::Sign;
use num::complex::Complex64;
use num::{BigInt, BigRational};
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::Error;
use crate::number::Number;
use crate::qformat::QFormat;
use crate::radix::fraction_with_radix;

mod compare;
pub(crate) mod construct;
pub(crate) mod exact;
mod ops;
pub(crate) mod promotion;
mod protocol;

/// A signed binary fixed point number of arbitrary precision.
///
/// Represents `numerator / 2^n`, where `n` is the number of fraction bits of the format. The
/// numerator is always within the range of the format.
#[derive(Clone)]
pub struct FixedPoint {
    numerator: BigInt,
    qformat: QFormat,
}

impl FixedPoint {
    /// Create a value from a numerator in a given format.
    ///
    /// Fails with an `Overflow` if the numerator is out of range for the format.
    pub(crate) fn from_numerator(numerator: BigInt, qformat: QFormat) -> Result<Self, Error> {
        let numerator = qformat.check(numerator)?;
        Ok(Self { numerator, qformat })
    }

    /// The same value in another format, rounded to the nearest representable value.
    pub(crate) fn rescaled(&self, qformat: &QFormat) -> Result<Self, Error> {
        if &self.qformat == qformat {
            return Ok(self.clone());
        }

        let numerator = qformat.rescale(&self.numerator, &self.qformat)?;
        Ok(Self { numerator, qformat: qformat.clone() })
    }

    /// The numerator as it is stored, relative to the denominator of the format.
    ///
    /// Not necessarily in lowest terms, see `numerator` for that.
    pub fn raw_numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The precision of this value.
    pub fn qformat(&self) -> &QFormat {
        &self.qformat
    }

    /// Number of factors two that can be removed from both the stored numerator and the denominator.
    fn common_twos(&self) -> u32 {
        let fraction_bits = self.qformat.fraction_bits();
        match self.numerator.trailing_zeros() {
            // Fewer than `fraction_bits` so the cast is lossless
            Some(zeros) if zeros < u64::from(fraction_bits) => zeros as u32,
            _ => fraction_bits,
        }
    }

    /// Numerator of the value in lowest terms.
    ///
    /// This is not the stored numerator, see `raw_numerator` for that.
    pub fn numerator(&self) -> BigInt {
        if self.numerator.is_zero() {
            return BigInt::zero();
        }

        &self.numerator >> self.common_twos()
    }

    /// Denominator of the value in lowest terms, always a positive power of two.
    pub fn denominator(&self) -> BigInt {
        if self.numerator.is_zero() {
            return BigInt::one();
        }

        BigInt::one() << (self.qformat.fraction_bits() - self.common_twos())
    }

    /// The exact value as a rational.
    pub fn to_rational(&self) -> BigRational {
        BigRational::new(self.numerator(), self.denominator())
    }

    /// Whether the value is a whole number, that is, all fraction bits are zero.
    pub fn is_integer(&self) -> bool {
        self.common_twos() == self.qformat.fraction_bits()
    }

    /// Whether the value is strictly smaller than zero.
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }
}

impl Zero for FixedPoint {
    /// Zero in `Q1.0`.
    fn zero() -> Self {
        Self { numerator: BigInt::zero(), qformat: QFormat::new(1, 0) }
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for FixedPoint {
    /// One in `Q2.0`, one bit for the magnitude and one for the sign.
    fn one() -> Self {
        Self { numerator: BigInt::one(), qformat: QFormat::new(2, 0) }
    }
}

impl From<&FixedPoint> for BigRational {
    fn from(value: &FixedPoint) -> Self {
        value.to_rational()
    }
}

impl From<FixedPoint> for BigRational {
    fn from(value: FixedPoint) -> Self {
        value.to_rational()
    }
}

/// The nearest float, infinite when the magnitude exceeds the range of `f64`.
impl From<&FixedPoint> for f64 {
    fn from(value: &FixedPoint) -> Self {
        match value.to_rational().to_f64() {
            Some(float) => float,
            None if value.is_negative() => f64::NEG_INFINITY,
            None => f64::INFINITY,
        }
    }
}

impl From<FixedPoint> for f64 {
    fn from(value: FixedPoint) -> Self {
        f64::from(&value)
    }
}

impl From<&FixedPoint> for Complex64 {
    fn from(value: &FixedPoint) -> Self {
        Complex64::new(f64::from(value), 0_f64)
    }
}

impl ToPrimitive for FixedPoint {
    /// Truncated towards zero, `None` if that doesn't fit.
    fn to_i64(&self) -> Option<i64> {
        self.trunc().to_i64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.trunc().to_i128()
    }

    /// Truncated towards zero, `None` if that doesn't fit.
    fn to_u64(&self) -> Option<u64> {
        self.trunc().to_u64()
    }

    fn to_u128(&self) -> Option<u128> {
        self.trunc().to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(f64::from(self))
    }
}

/// Renders the exact decimal expansion, which is always finite for a binary fraction.
impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fraction_bits = self.qformat.fraction_bits();
        let magnitude = self.numerator.magnitude();
        let integer_part = magnitude >> fraction_bits;
        let fraction_part = magnitude - (&integer_part << fraction_bits);

        let mut text = String::new();
        if self.is_negative() {
            text.push('-');
        }
        text.push_str(&integer_part.to_string());

        if !fraction_part.is_zero() {
            let fraction = BigRational::new(
                BigInt::from_biguint(Sign::Plus, fraction_part),
                self.qformat.denominator().clone(),
            );
            let (digits, power) = fraction_with_radix(&fraction, 10).map_err(|_| fmt::Error)?;
            // The power of ten has one more digit than the expansion is wide
            let width = power.to_string().len() - 1;
            text.push_str(&format!(".{digits:0>width$}"));
        }

        f.pad(&text)
    }
}

impl fmt::Debug for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FixedPoint({}, {:?})", self, self.qformat)
    }
}

impl FromStr for FixedPoint {
    type Err = Error;

    /// Parse an integer, a decimal or a fraction and represent it exactly.
    ///
    /// Fails with `PrecisionUnavailable` for values like `0.1` that have no finite binary expansion,
    /// use `FixedPoint::with_qformat` with a parsed `Number` to approximate those.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        FixedPoint::new(input.parse::<Number>()?)
    }
}
