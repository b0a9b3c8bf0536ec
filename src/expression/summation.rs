//! Validating and adding tokens.

use tracing::trace;

use crate::errors::{CalcError, Result};
use crate::literal::parse_integer;

/// Adds `tokens` after checking each one, in order.
///
/// The scan stops at the first token that is either not an integer
/// ([`CalcError::InvalidToken`]) or below zero ([`CalcError::NegativeValue`]).
/// Whichever of the two comes first wins; later tokens are never looked at.
///
/// Tokens are 64-bit integers. Exceeding `i64` while accumulating fails with
/// [`CalcError::OutOfRange`].
///
/// # Example
/// ```rust
/// use tally::expression::sum;
/// assert_eq!(sum(&["10", "20", "30", "40"]).unwrap(), 100);
/// assert!(sum(&["1", "-2", "x"]).is_err());
/// ```
pub fn sum<S: AsRef<str>>(tokens: &[S]) -> Result<i64> {
    tokens.iter().try_fold(0i64, |total, token| {
        let token = token.as_ref();
        let value = parse_integer(token)?;
        if value < 0 {
            return Err(CalcError::negative_value(token));
        }
        trace!(token, value, total, "adding token");
        total.checked_add(value).ok_or(CalcError::OutOfRange)
    })
}
