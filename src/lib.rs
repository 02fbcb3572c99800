//! # Binary fixed point numbers of arbitrary precision
//!
//! A `FixedPoint` is a signed number with a fixed number of bits before and after the binary point,
//! described by a `QFormat`. Both numbers of bits are unbounded.
//!
//! Values are created exactly when they have a finite binary expansion, or rounded into a given
//! format otherwise. Arithmetic between fixed point values derives the format of the result from
//! the formats of the operands, such that addition, subtraction and multiplication are exact.
//! Arithmetic with integers stays fixed point, while arithmetic with rationals, floats or complex
//! numbers gives a result of that kind; see `Number` for the kinds that can be mixed.
//!
//! ```
//! use qfixed::{FixedPoint, Number, QFormat};
//!
//! let a = FixedPoint::with_qformat(10, &QFormat::new(8, 8)).unwrap();
//! let quotient = a.checked_div(3).unwrap();
//! assert_eq!(quotient.to_string(), "3.33349609375");
//!
//! let sum = a.checked_add(0.5).unwrap();
//! assert_eq!(sum, Number::Real(10.5));
//! ```
#![warn(missing_docs)]

pub use error::Error;
pub use fixed_point::FixedPoint;
pub use fixed_point::promotion::Operation;
pub use number::{Kind, Number};
pub use qformat::QFormat;
pub use radix::{fraction_with_radix, has_finite_expansion, prime_factors};

mod macros;

pub mod error;
pub mod fixed_point;
pub mod number;
pub mod qformat;
pub mod radix;
mod rounding;
