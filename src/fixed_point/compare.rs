//! # Comparisons
//!
//! Fixed point values compare by the value they represent, regardless of their format. Against exact
//! numbers and finite floats the comparison is exact. Complex numbers only support equality.
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use num::complex::Complex64;
use num::{BigInt, BigRational};

use crate::fixed_point::FixedPoint;
use crate::number::Number;

impl FixedPoint {
    /// Compare against an exact rational.
    fn cmp_rational(&self, other: &BigRational) -> Ordering {
        self.to_rational().cmp(other)
    }

    /// Compare against a float, `None` only if it is NaN.
    fn cmp_float(&self, other: f64) -> Option<Ordering> {
        if other.is_nan() {
            None
        } else if other == f64::INFINITY {
            Some(Ordering::Less)
        } else if other == f64::NEG_INFINITY {
            Some(Ordering::Greater)
        } else {
            BigRational::from_float(other).map(|other| self.cmp_rational(&other))
        }
    }

    fn eq_complex(&self, other: &Complex64) -> bool {
        other.im == 0_f64 && self.cmp_float(other.re) == Some(Ordering::Equal)
    }

    fn cmp_number(&self, other: &Number) -> Option<Ordering> {
        match other {
            Number::FixedPoint(other) => Some(self.cmp(other)),
            Number::Integer(other) => Some(self.cmp_rational(&BigRational::from_integer(other.clone()))),
            Number::Rational(other) => Some(self.cmp_rational(other)),
            Number::Real(other) => self.cmp_float(*other),
            Number::Complex(_) => None,
        }
    }

    fn eq_number(&self, other: &Number) -> bool {
        match other {
            Number::Complex(other) => self.eq_complex(other),
            other => self.cmp_number(other) == Some(Ordering::Equal),
        }
    }
}

impl Ord for FixedPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        // Bring both numerators to the larger number of fraction bits
        let (a, b) = (self.qformat.fraction_bits(), other.qformat.fraction_bits());
        if a >= b {
            self.numerator.cmp(&(&other.numerator << (a - b)))
        } else {
            (&self.numerator << (b - a)).cmp(&other.numerator)
        }
    }
}

impl PartialOrd for FixedPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FixedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FixedPoint {}

/// Consistent with equality: the value in lowest terms is hashed, not the format.
impl Hash for FixedPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator().hash(state);
        self.denominator().hash(state);
    }
}

macro_rules! impl_compare_integer {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for FixedPoint {
                fn eq(&self, other: &$t) -> bool {
                    self.is_integer() && self.trunc() == BigInt::from(*other)
                }
            }

            impl PartialOrd<$t> for FixedPoint {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    Some(self.cmp_rational(&BigRational::from_integer(BigInt::from(*other))))
                }
            }

            impl PartialEq<FixedPoint> for $t {
                fn eq(&self, other: &FixedPoint) -> bool {
                    other == self
                }
            }

            impl PartialOrd<FixedPoint> for $t {
                fn partial_cmp(&self, other: &FixedPoint) -> Option<Ordering> {
                    other.partial_cmp(self).map(Ordering::reverse)
                }
            }
        )*
    }
}
impl_compare_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Implement comparisons in both directions given a way to compare a fixed point value with `$t`.
macro_rules! impl_compare {
    ($t:ty, $eq:expr, $cmp:expr) => {
        impl PartialEq<$t> for FixedPoint {
            fn eq(&self, other: &$t) -> bool {
                $eq(self, other)
            }
        }

        impl PartialOrd<$t> for FixedPoint {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                $cmp(self, other)
            }
        }

        impl PartialEq<FixedPoint> for $t {
            fn eq(&self, other: &FixedPoint) -> bool {
                $eq(other, self)
            }
        }

        impl PartialOrd<FixedPoint> for $t {
            fn partial_cmp(&self, other: &FixedPoint) -> Option<Ordering> {
                $cmp(other, self).map(Ordering::reverse)
            }
        }
    }
}

impl_compare!(
    BigInt,
    |value: &FixedPoint, other: &BigInt| value.is_integer() && &value.trunc() == other,
    |value: &FixedPoint, other: &BigInt| Some(value.cmp_rational(&BigRational::from_integer(other.clone())))
);
impl_compare!(
    BigRational,
    |value: &FixedPoint, other: &BigRational| value.cmp_rational(other) == Ordering::Equal,
    |value: &FixedPoint, other: &BigRational| Some(value.cmp_rational(other))
);
impl_compare!(
    f64,
    |value: &FixedPoint, other: &f64| value.cmp_float(*other) == Some(Ordering::Equal),
    |value: &FixedPoint, other: &f64| value.cmp_float(*other)
);
impl_compare!(
    Number,
    |value: &FixedPoint, other: &Number| value.eq_number(other),
    |value: &FixedPoint, other: &Number| value.cmp_number(other)
);

impl PartialEq<Complex64> for FixedPoint {
    fn eq(&self, other: &Complex64) -> bool {
        self.eq_complex(other)
    }
}

impl PartialEq<FixedPoint> for Complex64 {
    fn eq(&self, other: &FixedPoint) -> bool {
        other.eq_complex(self)
    }
}
