//! Splitting an expression body into tokens.
//!
//! The body is cut at every occurrence of any delimiter in a [`DelimiterSet`].
//! Empty pieces are kept, so `1,,2` yields `["1", "", "2"]` and the empty
//! token is rejected later by the validator instead of being swallowed here.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::trace;

/// Delimiters that are always active.
pub const DEFAULT_DELIMITERS: [&str; 3] = [",", ":", "|"];

/// Compiled-size cap for a splitter pattern; regex's own default.
const SPLITTER_SIZE_LIMIT: usize = 10 * (1 << 20);

static DEFAULT_SPLITTER: Lazy<Regex> = Lazy::new(|| {
    build_splitter(&DEFAULT_DELIMITERS, SPLITTER_SIZE_LIMIT).expect("default delimiter pattern")
});

/// The delimiters used for one split: the defaults plus an optional custom one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet<'a> {
    delimiters: Vec<&'a str>,
    custom: Option<&'a str>,
}

impl Default for DelimiterSet<'_> {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            custom: None,
        }
    }
}

impl<'a> DelimiterSet<'a> {
    /// The default delimiters, extended by `custom` when one is given.
    ///
    /// An empty custom delimiter is ignored.
    pub fn with_custom(custom: Option<&'a str>) -> Self {
        let mut set = Self::default();
        if let Some(custom) = custom.filter(|c| !c.is_empty()) {
            if !set.delimiters.contains(&custom) {
                set.delimiters.push(custom);
            }
            set.custom = Some(custom);
        }
        set
    }

    /// Splits `body` into tokens, in order.
    pub fn split<'b>(&self, body: &'b str) -> Vec<&'b str> {
        self.split_with_limit(body, SPLITTER_SIZE_LIMIT)
    }

    fn split_with_limit<'b>(&self, body: &'b str, size_limit: usize) -> Vec<&'b str> {
        let tokens: Vec<&'b str> = match self.custom {
            None => DEFAULT_SPLITTER.split(body).collect(),
            Some(_) => match build_splitter(&self.delimiters, size_limit) {
                Ok(splitter) => splitter.split(body).collect(),
                Err(err) => {
                    // Only the regex size limit rejects escaped literals.
                    trace!(%err, "delimiter pattern rejected, scanning literally");
                    scan(body, &self.delimiters)
                }
            },
        };
        for (index, token) in tokens.iter().enumerate() {
            trace!(index, token, "token");
        }
        tokens
    }
}

/// Splits `body` on the default delimiters plus `custom`.
///
/// # Example
/// ```rust
/// use tally::expression::tokenize;
/// assert_eq!(tokenize("1.2:3.4", Some(".")), vec!["1", "2", "3", "4"]);
/// assert_eq!(tokenize("1,2|3", None), vec!["1", "2", "3"]);
/// ```
pub fn tokenize<'b>(body: &'b str, custom: Option<&str>) -> Vec<&'b str> {
    DelimiterSet::with_custom(custom).split(body)
}

/// Builds an alternation of the escaped delimiters, longest first, so that a
/// longer delimiter wins over a shorter one starting at the same position.
fn build_splitter(delimiters: &[&str], size_limit: usize) -> Result<Regex, regex::Error> {
    let mut ordered: Vec<&str> = delimiters.to_vec();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));
    let pattern = ordered
        .iter()
        .map(|d| regex::escape(d))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&pattern).size_limit(size_limit).build()
}

/// Literal, regex-free equivalent of the splitter.
fn scan<'b>(body: &'b str, delimiters: &[&str]) -> Vec<&'b str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    while pos < body.len() {
        let rest = &body[pos..];
        let matched = delimiters
            .iter()
            .filter(|d| !d.is_empty() && rest.starts_with(**d))
            .map(|d| d.len())
            .max();
        match matched {
            Some(len) => {
                tokens.push(&body[start..pos]);
                pos += len;
                start = pos;
            }
            None => {
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    tokens.push(&body[start..]);
    tokens
}
