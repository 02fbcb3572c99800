//! # Rounding, conversion and arithmetic with any kind of number
use num::{BigInt, Integer};
use num_traits::Signed;

use crate::error::Error;
use crate::fixed_point::FixedPoint;
use crate::fixed_point::construct::from_integer;
use crate::fixed_point::exact::{divide, multiply, power_of_ten};
use crate::number::Number;
use crate::rounding::div_round_half_even;

impl FixedPoint {
    /// The integer part, rounded towards zero.
    pub fn trunc(&self) -> BigInt {
        let magnitude = BigInt::from(self.numerator.magnitude() >> self.qformat.fraction_bits());
        if self.is_negative() { -magnitude } else { magnitude }
    }

    /// The largest integer smaller than or equal to this value.
    pub fn floor(&self) -> BigInt {
        self.numerator().div_floor(&self.denominator())
    }

    /// The smallest integer larger than or equal to this value.
    pub fn ceil(&self) -> BigInt {
        -(-self.numerator()).div_floor(&self.denominator())
    }

    /// The nearest integer, ties to even.
    pub fn round(&self) -> BigInt {
        div_round_half_even(&self.numerator(), &self.denominator())
    }

    /// Round to a number of decimal digits, ties to even, keeping the format of this value.
    ///
    /// # Arguments
    ///
    /// * `digits`: Number of digits after the decimal point to keep. When negative, rounds to a
    /// multiple of a power of ten (`-1` rounds to tens).
    ///
    /// # Return value
    ///
    /// The rounded value in the format of this value. As a decimal fraction like `31.2` isn't a
    /// binary fraction, the result is the nearest value of the format. This rounds a second time,
    /// so the result is not always the representable value nearest to the original.
    ///
    /// Fails with an `Overflow` when the rounded value is out of range for the format.
    pub fn round_digits(&self, digits: i32) -> Result<FixedPoint, Error> {
        let shift = power_of_ten(digits.unsigned_abs())?;

        let unshifted = if digits > 0 {
            let rounded = from_integer(multiply(self, &shift)?.round())?;
            divide(&rounded, &shift)?
        } else {
            let rounded = from_integer(divide(self, &shift)?.round())?;
            multiply(&rounded, &shift)?
        };

        unshifted.rescaled(&self.qformat)
    }

    /// The absolute value, in the same format.
    ///
    /// Fails with an `Overflow` for the most negative value of the format. Use negation, which
    /// widens the format, when that must not fail.
    pub fn abs(&self) -> Result<FixedPoint, Error> {
        FixedPoint::from_numerator(self.numerator.abs(), self.qformat.clone())
    }

    /// Add any kind of number to this value.
    ///
    /// The result is fixed point when `rhs` is fixed point or an integer. Otherwise it has the
    /// kind of `rhs`.
    pub fn checked_add(&self, rhs: impl Into<Number>) -> Result<Number, Error> {
        Number::from(self).checked_add(&rhs.into())
    }

    /// Subtract any kind of number from this value, see `checked_add` for the kind of the result.
    pub fn checked_sub(&self, rhs: impl Into<Number>) -> Result<Number, Error> {
        Number::from(self).checked_sub(&rhs.into())
    }

    /// Multiply this value by any kind of number, see `checked_add` for the kind of the result.
    pub fn checked_mul(&self, rhs: impl Into<Number>) -> Result<Number, Error> {
        Number::from(self).checked_mul(&rhs.into())
    }

    /// Divide this value by any kind of number, see `checked_add` for the kind of the result.
    ///
    /// When the result is fixed point, it is rounded to the nearest representable value.
    pub fn checked_div(&self, rhs: impl Into<Number>) -> Result<Number, Error> {
        Number::from(self).checked_div(&rhs.into())
    }

    /// Raise this value to a power.
    ///
    /// Exact for an integral exponent that is fixed point or an integer; negative exponents round.
    /// A fractional fixed point exponent gives a float.
    pub fn checked_pow(&self, rhs: impl Into<Number>) -> Result<Number, Error> {
        Number::from(self).checked_pow(&rhs.into())
    }

    /// Floor of the quotient.
    ///
    /// Computed from the (rounded) quotient, so it can be off by one when the exact quotient is
    /// just below an integer.
    pub fn floor_div(&self, rhs: impl Into<Number>) -> Result<BigInt, Error> {
        Number::from(self).floor_div(&rhs.into())
    }

    /// Remainder of the floor division, `self - rhs * (self // rhs)`.
    pub fn modulo(&self, rhs: impl Into<Number>) -> Result<Number, Error> {
        Number::from(self).modulo(&rhs.into())
    }
}
