//! # Mixed-kind arithmetic
//!
//! When at least one operand of a binary operation is a fixed point value, the kind of the other
//! operand decides how the operation is evaluated:
//!
//! * fixed point or integer: the other operand is represented exactly as a fixed point value and
//! the exact algorithm is used, the result is fixed point;
//! * rational, real or complex: the fixed point value is converted to that kind and the operation
//! is evaluated in its native arithmetic, the result is of that kind.
//!
//! The same table is used whether the fixed point value is on the left or on the right.
use std::fmt;

use tracing::trace;

use crate::error::Error;
use crate::fixed_point::FixedPoint;
use crate::fixed_point::exact;
use crate::number::{Kind, Number};
use crate::number::native;

/// A binary arithmetic operation.
///
/// Subtraction is addition of the negation. Floor division and modulo are derived from division.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    /// `lhs + rhs`
    Add,
    /// `lhs * rhs`
    Multiply,
    /// `lhs / rhs`
    Divide,
    /// `lhs` raised to the power `rhs`
    Power,
}

impl Operation {
    /// Name of the operation, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
            Operation::Power => "exponentiation",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which operand of the operation is the fixed point value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Side {
    Left,
    Right,
}

impl Side {
    /// Put the fixed point operand and the other operand back in their original positions.
    fn order<'a, T>(self, fixed_point: &'a T, other: &'a T) -> (&'a T, &'a T) {
        match self {
            Side::Left => (fixed_point, other),
            Side::Right => (other, fixed_point),
        }
    }
}

/// How an operation with a fixed point value is evaluated, given the kind of the other operand.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Route {
    /// Convert the other operand to fixed point, evaluate exactly.
    Exact,
    /// Convert the fixed point operand to this kind, evaluate natively.
    Native(Kind),
}

fn route(kind: Kind) -> Route {
    match kind {
        Kind::FixedPoint | Kind::Integer => Route::Exact,
        Kind::Rational | Kind::Real | Kind::Complex => Route::Native(kind),
    }
}

/// Evaluate a binary operation.
///
/// If neither operand is fixed point, both are promoted to the higher of their kinds and the
/// operation is evaluated natively.
pub(crate) fn binary(operation: Operation, lhs: &Number, rhs: &Number) -> Result<Number, Error> {
    match (lhs, rhs) {
        (Number::FixedPoint(fixed_point), other) => with_fixed_point(operation, fixed_point, other, Side::Left),
        (other, Number::FixedPoint(fixed_point)) => with_fixed_point(operation, fixed_point, other, Side::Right),
        _ => native::apply(operation, lhs, rhs),
    }
}

fn with_fixed_point(
    operation: Operation,
    fixed_point: &FixedPoint,
    other: &Number,
    side: Side,
) -> Result<Number, Error> {
    match route(other.kind()) {
        Route::Exact => {
            let other = FixedPoint::new(other.clone())?;
            let (lhs, rhs) = side.order(fixed_point, &other);
            exact_operation(operation, lhs, rhs)
        },
        Route::Native(kind) => {
            trace!(%operation, %kind, ?side, "falling back to native arithmetic");
            let promoted = Number::FixedPoint(fixed_point.clone()).promote(kind);
            let (lhs, rhs) = side.order(&promoted, other);
            native::apply(operation, lhs, rhs)
        },
    }
}

fn exact_operation(operation: Operation, lhs: &FixedPoint, rhs: &FixedPoint) -> Result<Number, Error> {
    match operation {
        Operation::Add => exact::add(lhs, rhs).map(Number::FixedPoint),
        Operation::Multiply => exact::multiply(lhs, rhs).map(Number::FixedPoint),
        Operation::Divide => exact::divide(lhs, rhs).map(Number::FixedPoint),
        Operation::Power => exact::power(lhs, rhs),
    }
}
