//! # Expansions in a radix
//!
//! A fraction `p / q` has a finite expansion in radix `r` when it can be written with a power of `r`
//! as its denominator. That is the case exactly when every prime factor of `q` divides `r`. These
//! helpers are used to construct fixed point numbers from rationals (radix 2) and to render them as
//! decimal text (radix 10).
use itertools::Itertools;
use num::{BigInt, BigRational, Integer};
use num_traits::{One, Zero};

use crate::error::Error;

/// The prime factors of a positive integer, in ascending order and with multiplicity.
///
/// Computed by trial division, meant for small values such as a radix.
pub fn prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();

    let mut candidate = 2;
    while candidate <= n / candidate {
        if n % candidate == 0 {
            n /= candidate;
            factors.push(candidate);
        } else {
            candidate += 1;
        }
    }
    if n > 1 {
        factors.push(n);
    }

    factors
}

/// Whether a fraction with this denominator can be written with a power of `radix` as denominator.
///
/// # Arguments
///
/// * `denominator`: Denominator of the source fraction, should be positive.
/// * `radix`: Base of the denominator of the target representation, at least two.
///
/// # Return value
///
/// `true` if every prime factor of the denominator is a prime factor of the radix.
///
/// # Example
///
/// ```
/// use num::BigInt;
/// use qfixed::has_finite_expansion;
///
/// // 3/16 is 0.1875
/// assert!(has_finite_expansion(&BigInt::from(16), 10));
/// // 1/3 is 0.333...
/// assert!(!has_finite_expansion(&BigInt::from(3), 10));
/// ```
pub fn has_finite_expansion(denominator: &BigInt, radix: u64) -> bool {
    debug_assert!(!denominator.is_zero());
    debug_assert!(radix >= 2);

    // Divide out the radix's primes, anything that remains is a prime the radix doesn't have
    let mut remaining = denominator.clone();
    for prime in prime_factors(radix).into_iter().dedup() {
        let prime = BigInt::from(prime);
        while remaining.is_multiple_of(&prime) {
            remaining /= &prime;
        }
    }

    remaining.magnitude().is_one()
}

/// Write a fraction with a denominator that is a power of `radix`.
///
/// # Arguments
///
/// * `fraction`: Value to represent.
/// * `radix`: Base of the denominator of the result, at least two.
///
/// # Return value
///
/// A numerator and denominator pair, where the denominator is the smallest power of `radix` that is
/// a multiple of the denominator of `fraction`. The pair is deliberately not reduced. If no such
/// power exists, a `PrecisionUnavailable` error.
///
/// # Example
///
/// ```
/// use num::{BigInt, BigRational};
/// use qfixed::fraction_with_radix;
///
/// let fraction = BigRational::new(BigInt::from(3), BigInt::from(16));
/// let (numerator, denominator) = fraction_with_radix(&fraction, 10).unwrap();
/// assert_eq!((numerator, denominator), (BigInt::from(1875), BigInt::from(10000)));
/// ```
pub fn fraction_with_radix(fraction: &BigRational, radix: u64) -> Result<(BigInt, BigInt), Error> {
    if !has_finite_expansion(fraction.denom(), radix) {
        return Err(Error::PrecisionUnavailable(fraction.to_string()));
    }

    let radix = BigInt::from(radix);
    let mut power = BigInt::one();
    while !power.is_multiple_of(fraction.denom()) {
        power *= &radix;
    }

    let factor = &power / fraction.denom();
    Ok((fraction.numer() * factor, power))
}

#[cfg(test)]
mod test {
    use num::{BigInt, BigRational};

    use crate::error::Error;
    use crate::radix::{fraction_with_radix, has_finite_expansion, prime_factors};

    fn ratio(numerator: i64, denominator: i64) -> BigRational {
        BigRational::new(BigInt::from(numerator), BigInt::from(denominator))
    }

    #[test]
    fn factors() {
        assert_eq!(prime_factors(1), Vec::<u64>::new());
        assert_eq!(prime_factors(2), vec![2]);
        assert_eq!(prime_factors(10), vec![2, 5]);
        assert_eq!(prime_factors(16), vec![2, 2, 2, 2]);
        assert_eq!(prime_factors(360), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(prime_factors(97), vec![97]);
    }

    #[test]
    fn finite_expansion() {
        assert!(has_finite_expansion(&BigInt::from(1), 2));
        assert!(has_finite_expansion(&BigInt::from(16), 2));
        assert!(has_finite_expansion(&BigInt::from(16), 10));
        assert!(has_finite_expansion(&BigInt::from(125), 10));
        assert!(has_finite_expansion(&BigInt::from(12), 6));
        assert!(!has_finite_expansion(&BigInt::from(10), 2));
        assert!(!has_finite_expansion(&BigInt::from(3), 10));
        assert!(!has_finite_expansion(&BigInt::from(3 * 1024), 2));

        let huge = BigInt::from(1) << 4000u32;
        assert!(has_finite_expansion(&huge, 2));
        assert!(has_finite_expansion(&huge, 10));
        assert!(!has_finite_expansion(&(huge * 3), 10));
    }

    #[test]
    fn with_radix() {
        assert_eq!(
            fraction_with_radix(&ratio(3, 16), 10),
            Ok((BigInt::from(1875), BigInt::from(10000))),
        );
        assert_eq!(
            fraction_with_radix(&ratio(-3, 16), 10),
            Ok((BigInt::from(-1875), BigInt::from(10000))),
        );
        assert_eq!(
            fraction_with_radix(&ratio(5, 8), 2),
            Ok((BigInt::from(5), BigInt::from(8))),
        );
        assert_eq!(
            fraction_with_radix(&ratio(7, 1), 10),
            Ok((BigInt::from(7), BigInt::from(1))),
        );
        assert!(matches!(
            fraction_with_radix(&ratio(1, 3), 2),
            Err(Error::PrecisionUnavailable(_)),
        ));
    }
}
