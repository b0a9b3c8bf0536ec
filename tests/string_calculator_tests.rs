//! Public-API tests for the string calculator pipeline.

use tally::expression::{extract, sum, tokenize};
use tally::{string_calculate, CalcError, ErrorKind, StringCalculator};

// ---
// Custom delimiter extraction
// ---

#[test]
fn test_custom_delimiter_between_slashes_and_line_feed() {
    let calc = StringCalculator::new();
    for (expression, expected) in [("//.\n", "."), ("//~\n", "~"), ("//123\n", "123")] {
        assert_eq!(calc.custom_delimiter(expression), Some(expected));
    }
}

#[test]
fn test_extract_splits_declaration_from_body() {
    let extraction = extract("//.\n1.2:3.4");
    assert_eq!(extraction.custom_delimiter, Some("."));
    assert_eq!(extraction.body, "1.2:3.4");
}

#[test]
fn test_near_miss_declaration_is_plain_text() {
    let extraction = extract("//;1;2");
    assert_eq!(extraction.custom_delimiter, None);
    assert_eq!(extraction.body, "//;1;2");
    assert_eq!(
        string_calculate("//;1;2"),
        Err(CalcError::invalid_token("//;1;2"))
    );
}

// ---
// Tokenizing
// ---

#[test]
fn test_tokens_with_default_and_custom_delimiters() {
    let calc = StringCalculator::new();
    let cases: [(&str, &[&str]); 9] = [
        ("1,2,3", &["1", "2", "3"]),
        ("//.\n1.2:3.4", &["1", "2", "3", "4"]),
        ("//[\n1[2[3", &["1", "2", "3"]),
        ("//!\n1!2!3", &["1", "2", "3"]),
        ("//\t\n1\t2\t3", &["1", "2", "3"]),
        ("//'\n1'2:3", &["1", "2", "3"]),
        ("//\u{8}\n1\u{8}2:3", &["1", "2", "3"]),
        ("// \n1 2:3", &["1", "2", "3"]),
        ("//|\n1|2:3", &["1", "2", "3"]),
    ];
    for (expression, expected) in cases {
        assert_eq!(calc.tokens(expression), expected, "{expression:?}");
    }
}

#[test]
fn test_tokenize_body_directly() {
    assert_eq!(tokenize("1.2:3.4", Some(".")), vec!["1", "2", "3", "4"]);
    assert_eq!(tokenize("1;2", None), vec!["1;2"]);
}

// ---
// Summing tokens
// ---

#[test]
fn test_sum_valid_tokens() {
    let calc = StringCalculator::new();
    assert_eq!(calc.sum_tokens(&["1", "2", "3"]), Ok(6));
    assert_eq!(calc.sum_tokens(&["10", "20", "30", "40"]), Ok(100));
}

#[test]
fn test_sum_rejects_non_numbers_naming_first() {
    for tokens in [&["a", "1", "2"][..], &[".", "3"][..], &["가", "3"][..]] {
        let err = sum(tokens).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidToken);
        assert_eq!(err.to_string(), format!("{} is not a valid number", tokens[0]));
    }
}

#[test]
fn test_sum_rejects_negatives_naming_first() {
    for tokens in [&["-1", "1", "2"][..], &["-2", "3"][..], &["-3", "3"][..]] {
        let err = sum(tokens).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NegativeValue);
        assert_eq!(
            err.to_string(),
            format!("negative value {} may not be entered", tokens[0])
        );
    }
}

// ---
// Full calculation
// ---

#[test]
fn test_calculate_expressions() {
    assert_eq!(string_calculate("1,2|3"), Ok(6));
    assert_eq!(string_calculate("//|\n10|20:30"), Ok(60));
    assert_eq!(string_calculate("//.\n10.20:30,40"), Ok(100));
}

#[test]
fn test_calculate_reports_first_violation() {
    assert_eq!(
        string_calculate("1,-2,x"),
        Err(CalcError::negative_value("-2"))
    );
    assert_eq!(string_calculate("1,x,-2"), Err(CalcError::invalid_token("x")));
    assert_eq!(string_calculate("1,,2"), Err(CalcError::invalid_token("")));
}

#[test]
fn test_calculate_signed_garbage_is_invalid_not_negative() {
    for (expression, token) in [("1,-x", "-x"), ("-1.5,2", "-1.5"), ("3:-", "-")] {
        let err = string_calculate(expression).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidToken, "{expression:?}");
        assert_eq!(err, CalcError::invalid_token(token));
    }
}

#[test]
fn test_calculate_is_repeatable() {
    let calc = StringCalculator::new();
    for expression in ["//;\n1;2", "1,a"] {
        assert_eq!(calc.calculate(expression), calc.calculate(expression));
    }
}
