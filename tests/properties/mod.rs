//! # Algebraic properties
//!
//! Addition, subtraction and multiplication of fixed point values are exact. Division rounds to a
//! working format first and to the result format second. Checked on random values against exact
//! rational arithmetic.
use num::{BigInt, BigRational, Integer};
use proptest::prelude::*;

use qfixed::FixedPoint;

mod test;

/// A value `numerator / 2^fraction_bits`, which is always exactly representable.
fn binary_fraction() -> impl Strategy<Value = BigRational> {
    (any::<i32>(), 0_u32..24).prop_map(|(numerator, fraction_bits)| {
        BigRational::new(BigInt::from(numerator), BigInt::from(1) << fraction_bits)
    })
}

fn fixed_point() -> impl Strategy<Value = (FixedPoint, BigRational)> {
    binary_fraction().prop_map(|value| {
        let fixed_point = FixedPoint::new(value.clone()).unwrap();
        (fixed_point, value)
    })
}

/// Round to the nearest integer, ties to even.
fn round_half_even(value: &BigRational) -> BigInt {
    let floor = value.floor();
    let remainder = value - &floor;
    let half = BigRational::new(BigInt::from(1), BigInt::from(2));
    let floor = floor.to_integer();

    if remainder > half || (remainder == half && floor.is_odd()) {
        floor + 1
    } else {
        floor
    }
}
