//! The string calculator facade.
//!
//! [`StringCalculator`] wires the expression stages together and also exposes
//! each stage on its own for inspection.

use tracing::debug;

use crate::errors::Result;
use crate::expression::{delimiter, summation, tokenizer};

/// Evaluates delimited expressions such as `"//;\n1;2,3"`.
///
/// Stateless; one value can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringCalculator;

impl StringCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Extracts the declaration, splits the body and sums the tokens.
    ///
    /// # Example
    /// ```rust
    /// use tally::StringCalculator;
    /// let calc = StringCalculator::new();
    /// assert_eq!(calc.calculate("//|\n10|20:30").unwrap(), 60);
    /// ```
    pub fn calculate(&self, expression: &str) -> Result<i64> {
        let tokens = self.tokens(expression);
        debug!(?expression, count = tokens.len(), "expression tokenized");
        let total = self.sum_tokens(&tokens)?;
        debug!(total, "expression summed");
        Ok(total)
    }

    /// The declared custom delimiter, if the expression starts with one.
    pub fn custom_delimiter<'a>(&self, expression: &'a str) -> Option<&'a str> {
        delimiter::extract(expression).custom_delimiter
    }

    /// The tokens the expression body splits into.
    pub fn tokens<'a>(&self, expression: &'a str) -> Vec<&'a str> {
        let extraction = delimiter::extract(expression);
        debug!(custom = ?extraction.custom_delimiter, "delimiter extracted");
        tokenizer::tokenize(extraction.body, extraction.custom_delimiter)
    }

    /// Validates and adds already-split tokens.
    pub fn sum_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<i64> {
        summation::sum(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn calculates_with_default_and_custom_delimiters() {
        let calc = StringCalculator::new();
        assert_eq!(calc.calculate("1,2|3"), Ok(6));
        assert_eq!(calc.calculate("//|\n10|20:30"), Ok(60));
        assert_eq!(calc.calculate("//.\n10.20:30,40"), Ok(100));
    }

    #[test]
    fn stages_are_inspectable() {
        let calc = StringCalculator::new();
        assert_eq!(calc.custom_delimiter("//.\n1.2:3.4"), Some("."));
        assert_eq!(calc.tokens("//.\n1.2:3.4"), vec!["1", "2", "3", "4"]);
        assert_eq!(calc.custom_delimiter("1,2"), None);
    }

    #[test]
    fn undeclared_delimiter_is_an_invalid_token() {
        let calc = StringCalculator::new();
        assert_eq!(calc.calculate("1;2"), Err(CalcError::invalid_token("1;2")));
        assert_eq!(calc.calculate("//;1;2"), Err(CalcError::invalid_token("//;1;2")));
        assert_eq!(calc.calculate(""), Err(CalcError::invalid_token("")));
    }
}
