//! Arithmetic over numeric strings.
//!
//! Both operands go through [`parse_number`] and the result through the
//! overflow-checked operations in [`crate::arith`].
//!
//! When either operand is malformed the error names the *first* operand
//! `x`. Callers and tests depend on that exact wording, so `y` is validated
//! but never named.

use tracing::debug;

use crate::arith::Operation;
use crate::errors::{CalcError, Result};
use crate::literal::parse_number;

pub fn plus(x: &str, y: &str) -> Result<i64> {
    calculate(Operation::Add, x, y)
}

pub fn minus(x: &str, y: &str) -> Result<i64> {
    calculate(Operation::Subtract, x, y)
}

pub fn multiply(x: &str, y: &str) -> Result<i64> {
    calculate(Operation::Multiply, x, y)
}

pub fn divide(x: &str, y: &str) -> Result<i64> {
    calculate(Operation::Divide, x, y)
}

/// Parses `x` and `y`, then applies `op`.
pub fn calculate(op: Operation, x: &str, y: &str) -> Result<i64> {
    let (a, b) = parse_operands(x, y)?;
    debug!(%op, a, b, "numeric string operands parsed");
    op.apply(a, b)
}

fn parse_operands(x: &str, y: &str) -> Result<(f64, f64)> {
    let a = parse_number(x)?;
    let b = parse_number(y).map_err(|_| CalcError::invalid_number(x))?;
    Ok((a, b))
}
