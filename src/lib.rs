//! # Tally
//!
//! Two small calculators sharing one set of overflow-checked primitives:
//!
//! - a **string calculator** that sums a delimited list of non-negative
//!   integers, optionally declaring its own delimiter with a `//<d>\n` prefix;
//! - a **numeric-string calculator** that applies `+ - x /` to two decimal
//!   strings and truncates the result to an integer in the 32-bit range.
//!
//! ```rust
//! use tally::{numeric_string_calculate, string_calculate, Operation};
//!
//! assert_eq!(string_calculate("//;\n1;2,3").unwrap(), 6);
//! assert_eq!(numeric_string_calculate(Operation::Add, "1.2", "2.8").unwrap(), 4);
//! ```

pub use crate::arith::Operation;
pub use crate::calculator::StringCalculator;
pub use crate::errors::{CalcError, ErrorKind, Result};

pub mod arith;
pub mod calculator;
pub mod cli;
pub mod errors;
pub mod expression;
pub mod literal;
pub mod logging;
pub mod numeric_string;

/// Applies `op` to two numbers with range checking.
pub fn numeric_calculate(op: Operation, x: f64, y: f64) -> Result<i64> {
    op.apply(x, y)
}

/// Parses two numeric strings and applies `op` to them.
pub fn numeric_string_calculate(op: Operation, x: &str, y: &str) -> Result<i64> {
    numeric_string::calculate(op, x, y)
}

/// Sums a delimited expression.
pub fn string_calculate(expression: &str) -> Result<i64> {
    StringCalculator::new().calculate(expression)
}
