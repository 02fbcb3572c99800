//! # Error reporting
//!
//! All failures of construction, arithmetic and conversion are described by a single enum. No
//! operation retries and no failure is transient: every error is a deterministic function of the
//! operands.
use num::BigInt;
use thiserror::Error as ThisError;

use crate::number::Kind;
use crate::qformat::QFormat;

/// An `Error` describes why a fixed point value could not be created or an operation could not be
/// completed.
#[derive(Clone, Debug, PartialEq, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// The value has no finite binary expansion and no precision was specified to approximate it.
    ///
    /// The contained `String` is a rendering of the offending value.
    #[error("{0} cannot be represented exactly without a specified precision")]
    PrecisionUnavailable(String),
    /// A numerator is outside of the signed range that a format can represent.
    #[error(
        "numerator {numerator} is out of range {} <= numerator <= {} for {qformat:?}",
        .qformat.min_numerator(),
        .qformat.max_numerator(),
    )]
    Overflow {
        /// The numerator that didn't fit.
        numerator: BigInt,
        /// The format it was checked against.
        qformat: QFormat,
    },
    /// A derived format needs more bits than a `QFormat` can describe.
    #[error("Q{integer_bits}.{fraction_bits} has too many bits to be described")]
    FormatTooWide {
        /// Requested number of integer bits.
        integer_bits: u64,
        /// Requested number of fraction bits.
        fraction_bits: u64,
    },
    /// A floating point value is NaN or infinite and has no finite representation.
    #[error("{0} has no finite fixed point representation")]
    NotFinite(f64),
    /// The operation is not defined for operands of this kind.
    #[error("{operation} is not defined for {kind} operands")]
    UnsupportedOperand {
        /// Name of the operation that was attempted.
        operation: &'static str,
        /// Kind of the operand that the operation doesn't support.
        kind: Kind,
    },
    /// The divisor is zero.
    #[error("division by zero")]
    DivisionByZero,
    /// An integer exponent is too large in magnitude to be applied.
    #[error("exponent {0} is out of range")]
    ExponentOutOfRange(BigInt),
    /// Text could not be parsed.
    #[error("could not parse {input:?}: {reason}")]
    Parse {
        /// The text that was being parsed.
        input: String,
        /// What's wrong with it.
        reason: &'static str,
    },
}

impl Error {
    /// Create a `Parse` error.
    pub(crate) fn parse(input: &str, reason: &'static str) -> Self {
        Self::Parse { input: input.to_string(), reason }
    }
}
