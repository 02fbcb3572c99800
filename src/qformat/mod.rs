//! # Precision of fixed point numbers
//!
//! A `QFormat` describes how many bits a signed fixed point number has on each side of the binary
//! point. The integer bits include one bit for the sign.
//!
//! Formats are interned: all live formats with the same number of integer and fraction bits share
//! one allocation, such that equality is an identity comparison. An entry in the interning table
//! doesn't keep its format alive; once no value refers to a format anymore, it is dropped and its
//! slot in the table is reclaimed later.
use std::cmp::max;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::{Arc, LazyLock, Weak};

use num::BigInt;
use num_traits::{One, Zero};
use parking_lot::Mutex;
use tracing::trace;

use crate::error::Error;
use crate::rounding::div_round_half_even;


/// Dead entries are pruned when the table grows beyond this size.
const PRUNE_THRESHOLD: usize = 64;

/// Process-wide interning table from `(integer_bits, fraction_bits)` to the canonical format.
static INSTANCES: LazyLock<Mutex<Table>> = LazyLock::new(|| Mutex::new(Table::default()));

#[derive(Default)]
struct Table {
    instances: HashMap<(u32, u32), Weak<Precision>>,
    prune_at: usize,
}

/// Everything about a format that is a pure function of its bit counts.
#[derive(Debug)]
struct Precision {
    integer_bits: u32,
    fraction_bits: u32,
    denominator: BigInt,
    min_numerator: BigInt,
    max_numerator: BigInt,
}

impl Precision {
    fn new(integer_bits: u32, fraction_bits: u32) -> Self {
        let width = u64::from(integer_bits) + u64::from(fraction_bits);
        let (min_numerator, max_numerator) = if width == 0 {
            // No bits, not even a sign bit: the range is empty.
            (BigInt::zero(), -BigInt::one())
        } else {
            let half = BigInt::one() << (width - 1);
            (-&half, half - 1)
        };

        Self {
            integer_bits,
            fraction_bits,
            denominator: BigInt::one() << fraction_bits,
            min_numerator,
            max_numerator,
        }
    }
}

/// The precision and position of the binary point of a signed fixed point number.
///
/// Written `Qm.n`, where `m` is the number of integer bits (including the sign bit) and `n` the
/// number of fraction bits. A value in this format is a numerator in the signed two's complement
/// range of `m + n` bits, divided by `2^n`.
#[derive(Clone)]
pub struct QFormat(Arc<Precision>);

impl QFormat {
    /// Get the canonical format with the given number of bits.
    ///
    /// # Arguments
    ///
    /// * `integer_bits`: Number of bits before the binary point, including the sign bit.
    /// * `fraction_bits`: Number of bits after the binary point.
    ///
    /// # Return value
    ///
    /// The one live instance with these bit counts, created if there was none.
    pub fn new(integer_bits: u32, fraction_bits: u32) -> Self {
        let key = (integer_bits, fraction_bits);
        let mut table = INSTANCES.lock();

        if let Some(existing) = table.instances.get(&key).and_then(Weak::upgrade) {
            return Self(existing);
        }

        trace!(integer_bits, fraction_bits, "interning new format");
        let precision = Arc::new(Precision::new(integer_bits, fraction_bits));
        table.instances.insert(key, Arc::downgrade(&precision));
        if table.instances.len() > max(table.prune_at, PRUNE_THRESHOLD) {
            table.instances.retain(|_, instance| instance.strong_count() > 0);
            table.prune_at = 2 * table.instances.len();
        }

        Self(precision)
    }

    /// Get the canonical format for bit counts computed from other formats.
    ///
    /// Fails with `FormatTooWide` when either count doesn't fit the `u32` of a format.
    pub(crate) fn try_new(integer_bits: u64, fraction_bits: u64) -> Result<Self, Error> {
        match (u32::try_from(integer_bits), u32::try_from(fraction_bits)) {
            (Ok(m), Ok(n)) => Ok(Self::new(m, n)),
            _ => Err(Error::FormatTooWide { integer_bits, fraction_bits }),
        }
    }

    /// The smallest format that can hold any value of any of the given formats.
    ///
    /// # Return value
    ///
    /// A format with the maximum number of integer bits and the maximum number of fraction bits of
    /// the inputs, or `None` if no formats were given.
    pub fn combine<'a>(qformats: impl IntoIterator<Item = &'a QFormat>) -> Option<Self> {
        qformats.into_iter()
            .map(|qformat| (qformat.integer_bits(), qformat.fraction_bits()))
            .reduce(|(m1, n1), (m2, n2)| (max(m1, m2), max(n1, n2)))
            .map(|(integer_bits, fraction_bits)| Self::new(integer_bits, fraction_bits))
    }

    /// Number of bits before the binary point, including the sign bit.
    pub fn integer_bits(&self) -> u32 {
        self.0.integer_bits
    }

    /// Number of bits after the binary point.
    pub fn fraction_bits(&self) -> u32 {
        self.0.fraction_bits
    }

    /// Total number of bits of a numerator in this format.
    pub fn width(&self) -> u64 {
        u64::from(self.integer_bits()) + u64::from(self.fraction_bits())
    }

    /// The number by which a numerator is divided to get the value it represents, `2^n`.
    pub fn denominator(&self) -> &BigInt {
        &self.0.denominator
    }

    /// Smallest numerator representable in this format.
    pub fn min_numerator(&self) -> &BigInt {
        &self.0.min_numerator
    }

    /// Largest numerator representable in this format.
    pub fn max_numerator(&self) -> &BigInt {
        &self.0.max_numerator
    }

    /// Check that a numerator is within the bounds of this format.
    ///
    /// # Return value
    ///
    /// The numerator, unchanged, or an `Overflow` error if it is out of bounds.
    pub fn check(&self, numerator: BigInt) -> Result<BigInt, Error> {
        if self.min_numerator() <= &numerator && &numerator <= self.max_numerator() {
            Ok(numerator)
        } else {
            Err(Error::Overflow { numerator, qformat: self.clone() })
        }
    }

    /// Express a numerator of another format in this format.
    ///
    /// The value is scaled exactly, rounded to the nearest numerator (ties to even) and checked
    /// against the bounds of this format.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Numerator of a value in the `source` format.
    /// * `source`: Format that `numerator` is expressed in.
    ///
    /// # Return value
    ///
    /// The numerator closest to the same value in this format.
    pub fn rescale(&self, numerator: &BigInt, source: &QFormat) -> Result<BigInt, Error> {
        let (from, to) = (source.fraction_bits(), self.fraction_bits());
        let rescaled = if to >= from {
            numerator << (to - from)
        } else {
            div_round_half_even(numerator, &(BigInt::one() << (from - to)))
        };

        self.check(rescaled)
    }
}

impl PartialEq for QFormat {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for QFormat {}

impl Hash for QFormat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.integer_bits().hash(state);
        self.fraction_bits().hash(state);
    }
}

impl fmt::Display for QFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Q{}.{}", self.integer_bits(), self.fraction_bits())
    }
}

impl fmt::Debug for QFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "QFormat({}, {})", self.integer_bits(), self.fraction_bits())
    }
}

impl FromStr for QFormat {
    type Err = Error;

    /// Parse a format written as `Qm.n`, for example `Q8.8`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let bits = input.strip_prefix('Q')
            .ok_or_else(|| Error::parse(input, "a format starts with 'Q'"))?;
        let (integer_bits, fraction_bits) = bits.split_once('.')
            .ok_or_else(|| Error::parse(input, "expected Qm.n"))?;

        let parse_bits = |text: &str| text.parse::<u32>()
            .map_err(|_| Error::parse(input, "bit counts are non-negative integers"));

        Ok(Self::new(parse_bits(integer_bits)?, parse_bits(fraction_bits)?))
    }
}
