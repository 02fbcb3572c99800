//! # Operators between fixed point values
//!
//! The result formats grow such that these operations can't overflow. Like the primitive integers,
//! division and remainder panic on a zero divisor; use `FixedPoint::checked_div` to handle that.
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_traits::{One, Zero};

use crate::fixed_point::FixedPoint;
use crate::fixed_point::exact::{add, divide, multiply, negate, remainder, subtract};

macro_rules! impl_exact_operator {
    ($trait:ident, $method:ident, $operation:ident) => {
        impl $trait<&FixedPoint> for &FixedPoint {
            type Output = FixedPoint;

            fn $method(self, rhs: &FixedPoint) -> Self::Output {
                $operation(self, rhs).unwrap_or_else(|error| panic!("{error}"))
            }
        }

        impl $trait<FixedPoint> for &FixedPoint {
            type Output = FixedPoint;

            fn $method(self, rhs: FixedPoint) -> Self::Output {
                $trait::$method(self, &rhs)
            }
        }

        impl $trait<&FixedPoint> for FixedPoint {
            type Output = FixedPoint;

            fn $method(self, rhs: &FixedPoint) -> Self::Output {
                $trait::$method(&self, rhs)
            }
        }

        impl $trait<FixedPoint> for FixedPoint {
            type Output = FixedPoint;

            fn $method(self, rhs: FixedPoint) -> Self::Output {
                $trait::$method(&self, &rhs)
            }
        }
    }
}

impl_exact_operator!(Add, add, add);
impl_exact_operator!(Sub, sub, subtract);
impl_exact_operator!(Mul, mul, multiply);
impl_exact_operator!(Div, div, divide);
impl_exact_operator!(Rem, rem, remainder);

/// Negation can't overflow: the format gets one more integer bit.
///
/// Panics only when the format already has `u32::MAX` integer bits.
impl Neg for &FixedPoint {
    type Output = FixedPoint;

    fn neg(self) -> Self::Output {
        negate(self).unwrap_or_else(|error| panic!("{error}"))
    }
}

impl Neg for FixedPoint {
    type Output = FixedPoint;

    fn neg(self) -> Self::Output {
        -&self
    }
}

macro_rules! impl_fold {
    ($trait:ident, $method:ident, $initial_value:expr, $base_trait:ident, $base_method:ident) => {
        impl $trait for FixedPoint {
            fn $method<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold($initial_value, $base_trait::$base_method)
            }
        }

        impl<'a> $trait<&'a FixedPoint> for FixedPoint {
            fn $method<I: Iterator<Item = &'a FixedPoint>>(iter: I) -> Self {
                iter.fold($initial_value, $base_trait::$base_method)
            }
        }
    }
}
impl_fold!(Sum, sum, Self::zero(), Add, add);
impl_fold!(Product, product, Self::one(), Mul, mul);
