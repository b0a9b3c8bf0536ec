//! Numeric literal recognition.
//!
//! Two grammars are accepted, both ASCII only:
//!
//! - decimal numbers: `[+-]?[0-9]+(\.[0-9]+)?`
//! - integer tokens:  `[+-]?[0-9]+`
//!
//! Validation is done against these patterns before any conversion, so forms
//! that `str::parse::<f64>` would happily take (`1e5`, `inf`, `.5`, `5.`)
//! are rejected.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{CalcError, Result};

static DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+(\.[0-9]+)?$").expect("decimal literal pattern"));

static INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer literal pattern"));

/// Returns `true` if `text` is a well-formed signed decimal literal.
pub fn is_number(text: &str) -> bool {
    DECIMAL.is_match(text)
}

/// Returns `true` if `text` is a well-formed signed integer literal.
pub fn is_integer(text: &str) -> bool {
    INTEGER.is_match(text)
}

/// Parses a standalone numeric argument.
///
/// # Example
/// ```rust
/// use tally::literal::parse_number;
/// assert_eq!(parse_number("+2.2").unwrap(), 2.2);
/// assert!(parse_number("1.1.1").is_err());
/// ```
pub fn parse_number(text: &str) -> Result<f64> {
    if !is_number(text) {
        return Err(CalcError::invalid_number(text));
    }
    text.parse::<f64>()
        .map_err(|_| CalcError::invalid_number(text))
}

/// Parses an expression token as a signed 64-bit integer.
///
/// A token with integer syntax that does not fit in `i64` is reported the
/// same way as any other malformed token.
pub fn parse_integer(token: &str) -> Result<i64> {
    if !is_integer(token) {
        return Err(CalcError::invalid_token(token));
    }
    // i64's FromStr takes a leading '+' as well as '-'.
    token
        .parse::<i64>()
        .map_err(|_| CalcError::invalid_token(token))
}
