//! # Expression Pipeline
//!
//! An expression is an optional `//<delimiter>\n` declaration followed by a
//! body of integer tokens. Evaluation runs in three stages:
//!
//! 1. [`delimiter::extract`] splits off the declaration, if any.
//! 2. [`tokenizer::tokenize`] cuts the body on the default and custom delimiters.
//! 3. [`summation::sum`] validates the tokens left to right and adds them.
//!
//! Each stage borrows from the input and allocates only the token list.

pub mod delimiter;
pub mod summation;
pub mod tokenizer;

pub use delimiter::{extract, Extraction};
pub use summation::sum;
pub use tokenizer::{tokenize, DelimiterSet, DEFAULT_DELIMITERS};
