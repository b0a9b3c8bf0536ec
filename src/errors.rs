//! Tally Error Handling
//!
//! Every failure the calculators can produce is a variant of [`CalcError`].
//! The variants carry the offending value (if any) and nothing else; turning
//! them into console text, colored output, or JSON is left to the front end.
//!
//! Messages are part of the public contract. Tests and callers match on the
//! rendered text, so change them only together with the CLI regression tests.

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Type-safe error classification, mirroring the [`CalcError`] variants
/// without their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A standalone numeric argument is not a number.
    InvalidNumber,
    /// A token taken from an expression is not an integer.
    InvalidToken,
    /// A token is an integer, but below zero.
    NegativeValue,
    /// The divisor was exactly zero.
    DivisionByZero,
    /// The result left the representable range.
    OutOfRange,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidNumber => "invalid_number",
            ErrorKind::InvalidToken => "invalid_token",
            ErrorKind::NegativeValue => "negative_value",
            ErrorKind::DivisionByZero => "division_by_zero",
            ErrorKind::OutOfRange => "out_of_range",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unified error type for both calculators.
///
/// Serializes as an internally tagged object, e.g.
/// `{"kind":"invalid_token","token":"a"}`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalcError {
    #[error("input value {value} is not a number")]
    #[diagnostic(
        code(tally::parse::invalid_number),
        help("use an optional sign, digits, and at most one decimal point followed by digits")
    )]
    InvalidNumber { value: String },

    #[error("{token} is not a valid number")]
    #[diagnostic(
        code(tally::parse::invalid_token),
        help("tokens must be whole numbers separated by ',', ':', '|' or a declared //<delimiter>\\n")
    )]
    InvalidToken { token: String },

    #[error("negative value {token} may not be entered")]
    #[diagnostic(code(tally::validation::negative))]
    NegativeValue { token: String },

    #[error("cannot divide by zero")]
    #[diagnostic(code(tally::arith::division_by_zero))]
    DivisionByZero,

    #[error("result value exceeds the representable integer range")]
    #[diagnostic(
        code(tally::arith::out_of_range),
        help("results must lie within -2147483648 ..= 2147483647")
    )]
    OutOfRange,
}

impl CalcError {
    pub fn invalid_number(value: impl Into<String>) -> Self {
        CalcError::InvalidNumber {
            value: value.into(),
        }
    }

    pub fn invalid_token(token: impl Into<String>) -> Self {
        CalcError::InvalidToken {
            token: token.into(),
        }
    }

    pub fn negative_value(token: impl Into<String>) -> Self {
        CalcError::NegativeValue {
            token: token.into(),
        }
    }

    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            CalcError::InvalidToken { .. } => ErrorKind::InvalidToken,
            CalcError::NegativeValue { .. } => ErrorKind::NegativeValue,
            CalcError::DivisionByZero => ErrorKind::DivisionByZero,
            CalcError::OutOfRange => ErrorKind::OutOfRange,
        }
    }

    /// The offending value, for the variants that carry one.
    pub fn context(&self) -> Option<&str> {
        match self {
            CalcError::InvalidNumber { value } => Some(value),
            CalcError::InvalidToken { token } | CalcError::NegativeValue { token } => Some(token),
            CalcError::DivisionByZero | CalcError::OutOfRange => None,
        }
    }
}
