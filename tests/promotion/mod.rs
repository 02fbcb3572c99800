//! # Mixed-kind arithmetic
//!
//! Every binary operation between a fixed point value and another kind of number, with the fixed
//! point value on either side. Fixed point and integer operands give a fixed point result, any
//! other kind of operand gives a result of that kind.
use num::{BigInt, BigRational};

mod test;

fn ratio(numerator: i64, denominator: i64) -> BigRational {
    BigRational::new(BigInt::from(numerator), BigInt::from(denominator))
}
