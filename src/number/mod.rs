//! # Numbers of any supported kind
//!
//! Fixed point numbers interact with the other numeric types: integers, exact rationals, floats and
//! complex numbers. A `Number` holds a value of any of these kinds, such that mixed-type operations
//! can be dispatched on the kind of the operands.
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use num::complex::Complex64;
use num::rational::Ratio;
use num::bigint::Sign;
use num::{BigInt, BigRational};
use num_traits::{FromPrimitive, ToPrimitive, Zero};

use crate::error::Error;
use crate::fixed_point::FixedPoint;
use crate::fixed_point::promotion::{binary, Operation};

pub(crate) mod native;

/// The kind of a `Number`.
///
/// Ordered as a numeric tower: a value of a lower kind can be converted to any higher kind, mixed
/// operations between non fixed point kinds happen in the higher of the two.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Kind {
    /// Arbitrary precision integer.
    Integer,
    /// Binary fixed point number.
    FixedPoint,
    /// Exact rational.
    Rational,
    /// Floating point number.
    Real,
    /// Complex floating point number.
    Complex,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Kind::Integer => "integer",
            Kind::FixedPoint => "fixed point",
            Kind::Rational => "rational",
            Kind::Real => "real",
            Kind::Complex => "complex",
        })
    }
}

/// A value of one of the supported numeric kinds.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum Number {
    FixedPoint(FixedPoint),
    Integer(BigInt),
    Rational(BigRational),
    Real(f64),
    Complex(Complex64),
}

impl Number {
    /// Classify this value.
    pub fn kind(&self) -> Kind {
        match self {
            Number::FixedPoint(_) => Kind::FixedPoint,
            Number::Integer(_) => Kind::Integer,
            Number::Rational(_) => Kind::Rational,
            Number::Real(_) => Kind::Real,
            Number::Complex(_) => Kind::Complex,
        }
    }

    /// Whether this value equals zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::FixedPoint(value) => value.is_zero(),
            Number::Integer(value) => value.is_zero(),
            Number::Rational(value) => value.is_zero(),
            Number::Real(value) => *value == 0_f64,
            Number::Complex(value) => value.is_zero(),
        }
    }

    /// Exact rational value, if this number is exact.
    pub fn to_rational(&self) -> Option<BigRational> {
        match self {
            Number::FixedPoint(value) => Some(value.to_rational()),
            Number::Integer(value) => Some(BigRational::from_integer(value.clone())),
            Number::Rational(value) => Some(value.clone()),
            Number::Real(_) | Number::Complex(_) => None,
        }
    }

    /// Nearest float, if this number is real.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Number::FixedPoint(value) => Some(f64::from(value)),
            Number::Integer(value) => value.to_f64(),
            Number::Rational(value) => value.to_f64(),
            Number::Real(value) => Some(*value),
            Number::Complex(_) => None,
        }
    }

    /// Nearest complex float.
    pub fn to_complex(&self) -> Complex64 {
        match self {
            Number::Complex(value) => *value,
            other => Complex64::new(other.to_f64().unwrap_or(f64::NAN), 0_f64),
        }
    }

    /// Convert this value to a kind at least as high in the tower.
    ///
    /// Fixed point values are promoted as if they were rationals. Values that are already of a
    /// higher kind are returned unchanged.
    pub(crate) fn promote(&self, kind: Kind) -> Number {
        match (self, kind) {
            (Number::Complex(_), _) => self.clone(),
            (_, Kind::Complex) => Number::Complex(self.to_complex()),
            (Number::Real(_), _) => self.clone(),
            (_, Kind::Real) => Number::Real(self.to_f64().unwrap_or(f64::NAN)),
            (Number::Integer(_), Kind::Integer) => self.clone(),
            (_, _) => self.to_rational().map_or_else(|| self.clone(), Number::Rational),
        }
    }

    /// The largest integer smaller than or equal to this value.
    ///
    /// Fails for non-finite floats and for complex numbers, which are not ordered.
    pub fn floor(&self) -> Result<BigInt, Error> {
        match self {
            Number::FixedPoint(value) => Ok(value.floor()),
            Number::Integer(value) => Ok(value.clone()),
            Number::Rational(value) => Ok(value.floor().to_integer()),
            Number::Real(value) => BigInt::from_f64(value.floor()).ok_or(Error::NotFinite(*value)),
            Number::Complex(_) => Err(Error::UnsupportedOperand { operation: "floor", kind: Kind::Complex }),
        }
    }

    /// Sum, see `Operation::Add` for how the operands are promoted.
    pub fn checked_add(&self, rhs: &Number) -> Result<Number, Error> {
        binary(Operation::Add, self, rhs)
    }

    /// Difference, computed as the sum with the negated right hand side.
    pub fn checked_sub(&self, rhs: &Number) -> Result<Number, Error> {
        binary(Operation::Add, self, &-rhs)
    }

    /// Product.
    pub fn checked_mul(&self, rhs: &Number) -> Result<Number, Error> {
        binary(Operation::Multiply, self, rhs)
    }

    /// Quotient.
    pub fn checked_div(&self, rhs: &Number) -> Result<Number, Error> {
        binary(Operation::Divide, self, rhs)
    }

    /// Power.
    pub fn checked_pow(&self, rhs: &Number) -> Result<Number, Error> {
        binary(Operation::Power, self, rhs)
    }

    /// Floor of the quotient.
    ///
    /// Not defined when the quotient is complex.
    pub fn floor_div(&self, rhs: &Number) -> Result<BigInt, Error> {
        if let Number::Complex(_) = rhs {
            return Err(Error::UnsupportedOperand { operation: "floor division", kind: Kind::Complex });
        }

        self.checked_div(rhs)?.floor()
            .map_err(|error| match error {
                Error::UnsupportedOperand { kind, .. } => {
                    Error::UnsupportedOperand { operation: "floor division", kind }
                },
                other => other,
            })
    }

    /// Remainder of the floor division, `self - rhs * (self // rhs)`.
    ///
    /// Not defined when either operand is complex.
    pub fn modulo(&self, rhs: &Number) -> Result<Number, Error> {
        let quotient = self.floor_div(rhs)
            .map_err(|error| match error {
                Error::UnsupportedOperand { kind, .. } => {
                    Error::UnsupportedOperand { operation: "modulo", kind }
                },
                other => other,
            })?;

        self.checked_sub(&rhs.checked_mul(&Number::Integer(quotient))?)
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::Integer(BigInt::from(value))
                }
            }
        )*
    }
}
impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::Integer(value)
    }
}

impl From<&BigInt> for Number {
    fn from(value: &BigInt) -> Self {
        Number::Integer(value.clone())
    }
}

impl From<BigRational> for Number {
    fn from(value: BigRational) -> Self {
        Number::Rational(value)
    }
}

impl From<&BigRational> for Number {
    fn from(value: &BigRational) -> Self {
        Number::Rational(value.clone())
    }
}

impl From<Ratio<i64>> for Number {
    fn from(value: Ratio<i64>) -> Self {
        let (numer, denom) = value.into();
        Number::Rational(BigRational::new(numer.into(), denom.into()))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Real(value.into())
    }
}

impl From<Complex64> for Number {
    fn from(value: Complex64) -> Self {
        Number::Complex(value)
    }
}

impl From<FixedPoint> for Number {
    fn from(value: FixedPoint) -> Self {
        Number::FixedPoint(value)
    }
}

impl From<&FixedPoint> for Number {
    fn from(value: &FixedPoint) -> Self {
        Number::FixedPoint(value.clone())
    }
}

/// The additive inverse.
///
/// A fixed point value gains an integer bit, such that the negation of the most negative value of a
/// format is representable.
impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Self::Output {
        match self {
            Number::FixedPoint(value) => Number::FixedPoint(-value),
            Number::Integer(value) => Number::Integer(-value),
            Number::Rational(value) => Number::Rational(-value),
            Number::Real(value) => Number::Real(-value),
            Number::Complex(value) => Number::Complex(-value),
        }
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::FixedPoint(value) => fmt::Display::fmt(value, f),
            Number::Integer(value) => fmt::Display::fmt(value, f),
            Number::Rational(value) => fmt::Display::fmt(value, f),
            Number::Real(value) => fmt::Display::fmt(value, f),
            Number::Complex(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl FromStr for Number {
    type Err = Error;

    /// Parse an integer (`-12`), a decimal (`3.25`) or a fraction (`1/3`).
    ///
    /// Decimals are parsed exactly, as rationals.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let text = input.trim();
        let integer = |text: &str| text.parse::<BigInt>()
            .map_err(|_| Error::parse(input, "expected digits"));

        if let Some((numerator, denominator)) = text.split_once('/') {
            let (numerator, denominator) = (integer(numerator.trim())?, integer(denominator.trim())?);
            if denominator.is_zero() {
                return Err(Error::DivisionByZero);
            }
            Ok(Number::Rational(BigRational::new(numerator, denominator)))
        } else if let Some((whole, fraction)) = text.split_once('.') {
            if fraction.is_empty() || !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(Error::parse(input, "expected digits after the decimal point"));
            }
            let negative = whole.starts_with('-');
            let whole = match whole {
                "" | "-" | "+" => BigInt::zero(),
                digits => integer(digits)?,
            };
            let scale = BigInt::from(10).pow(fraction.len() as u32);
            let fraction = integer(fraction)?;
            let magnitude = whole.magnitude() * scale.magnitude() + fraction.magnitude();
            let numerator = BigInt::from_biguint(if negative { Sign::Minus } else { Sign::Plus }, magnitude);
            Ok(Number::Rational(BigRational::new(numerator, scale)))
        } else {
            integer(text).map(Number::Integer)
        }
    }
}
