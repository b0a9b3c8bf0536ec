//! # Overflow-Checked Arithmetic
//!
//! The four basic operations over floating operands. Each one computes the
//! floating result first, rejects it when it leaves the 32-bit signed range,
//! and only then drops the fractional part. `1.2 + 2.8` is therefore `4`,
//! not `1 + 2`.
//!
//! All functions are pure.

use std::fmt;

use clap::ValueEnum;

use crate::errors::{CalcError, Result};

/// Smallest result any operation may produce.
pub const MIN_RESULT: i64 = i32::MIN as i64;
/// Largest result any operation may produce.
pub const MAX_RESULT: i64 = i32::MAX as i64;

/// One of the four supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Operation {
    #[value(alias = "plus", alias = "+")]
    Add,
    #[value(alias = "minus", alias = "-")]
    Subtract,
    #[value(alias = "times", alias = "x", alias = "*")]
    Multiply,
    #[value(alias = "/")]
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Applies the operation to `x` and `y`.
    pub fn apply(self, x: f64, y: f64) -> Result<i64> {
        match self {
            Operation::Add => add(x, y),
            Operation::Subtract => subtract(x, y),
            Operation::Multiply => multiply(x, y),
            Operation::Divide => divide(x, y),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub fn add(x: f64, y: f64) -> Result<i64> {
    checked_truncate(x + y)
}

pub fn subtract(x: f64, y: f64) -> Result<i64> {
    checked_truncate(x - y)
}

pub fn multiply(x: f64, y: f64) -> Result<i64> {
    checked_truncate(x * y)
}

/// Divides `x` by `y`. Fails when `y` is zero (either sign).
pub fn divide(x: f64, y: f64) -> Result<i64> {
    if y == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    checked_truncate(x / y)
}

/// Range-checks a raw floating result, then truncates it toward zero.
///
/// NaN and infinities never fall inside the range.
fn checked_truncate(result: f64) -> Result<i64> {
    if !(MIN_RESULT as f64..=MAX_RESULT as f64).contains(&result) {
        return Err(CalcError::OutOfRange);
    }
    Ok(result.trunc() as i64)
}
