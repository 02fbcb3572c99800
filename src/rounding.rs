//! # Rounding of exact quotients
//!
//! Rounding to the nearest integer with ties to even, computed with integer arithmetic only.
use std::cmp::Ordering;

use num::{BigInt, Integer};
use num_traits::{Signed, Zero};

/// Divide two integers and round the exact quotient to the nearest integer, ties to even.
///
/// # Arguments
///
/// * `numerator`: Dividend.
/// * `denominator`: Divisor, should not be zero.
///
/// # Return value
///
/// The integer closest to `numerator / denominator`. When two integers are equally close, the even
/// one.
pub(crate) fn div_round_half_even(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    debug_assert!(!denominator.is_zero());

    if denominator.is_negative() {
        return div_round_half_even(&-numerator, &-denominator);
    }

    // The remainder of floor division lies in [0, denominator)
    let (quotient, remainder) = numerator.div_mod_floor(denominator);
    match (remainder << 1u32).cmp(denominator) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => if quotient.is_even() { quotient } else { quotient + 1 },
    }
}
