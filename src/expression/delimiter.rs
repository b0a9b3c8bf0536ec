//! Custom delimiter declarations.
//!
//! A declaration is the exact prefix `//`, one or more characters other than
//! a line feed, then a line feed. Anything else, including a near miss such
//! as `//;1;2` with no line feed, is not a declaration and stays in the body.

use once_cell::sync::Lazy;
use regex::Regex;

static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A//([^\n]+)\n(.*)\z").expect("declaration pattern"));

/// The result of splitting an expression into declaration and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extraction<'a> {
    /// The declared delimiter, without the surrounding `//` and `\n`.
    pub custom_delimiter: Option<&'a str>,
    /// Everything after the declaration, or the whole expression.
    pub body: &'a str,
}

/// Splits the optional leading declaration off `expression`.
///
/// # Example
/// ```rust
/// use tally::expression::extract;
/// let e = extract("//.\n1.2:3.4");
/// assert_eq!(e.custom_delimiter, Some("."));
/// assert_eq!(e.body, "1.2:3.4");
/// ```
pub fn extract(expression: &str) -> Extraction<'_> {
    match DECLARATION.captures(expression) {
        Some(caps) => {
            let delimiter = caps.get(1).map(|m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());
            Extraction {
                custom_delimiter: delimiter,
                body,
            }
        }
        None => Extraction {
            custom_delimiter: None,
            body: expression,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_everything_between_slashes_and_line_feed() {
        assert_eq!(extract("//.\n").custom_delimiter, Some("."));
        assert_eq!(extract("//~\n").custom_delimiter, Some("~"));
        assert_eq!(extract("//123\n").custom_delimiter, Some("123"));
        assert_eq!(extract("//\t\n1\t2").custom_delimiter, Some("\t"));
        assert_eq!(extract("// \n1 2").custom_delimiter, Some(" "));
    }

    #[test]
    fn body_follows_the_first_line_feed() {
        let e = extract("//;\n1;2\n3");
        assert_eq!(e.custom_delimiter, Some(";"));
        assert_eq!(e.body, "1;2\n3");
        assert_eq!(extract("//;\n").body, "");
    }

    #[test]
    fn missing_declaration_passes_through() {
        for expression in ["1,2,3", "//;1;2", "//\n1", "x//;\n1", ""] {
            let e = extract(expression);
            assert_eq!(e.custom_delimiter, None, "{expression:?}");
            assert_eq!(e.body, expression);
        }
    }
}
