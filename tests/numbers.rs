//! Number grammar: acceptance, rejection, and value fidelity.

use jsonparse::{parse_str, ErrorKind, Value};

fn number(literal: &str) -> Result<f64, jsonparse::Error> {
    let value = parse_str(&format!("[{literal}]"))?;
    Ok(value.get_index(0).and_then(Value::as_f64).unwrap_or(f64::NAN))
}

#[test]
fn integers() {
    assert_eq!(number("0").unwrap(), 0.0);
    assert_eq!(number("7").unwrap(), 7.0);
    assert_eq!(number("101").unwrap(), 101.0);
    assert_eq!(number("-1").unwrap(), -1.0);
    assert_eq!(number("-0").unwrap(), 0.0);
    assert_eq!(number("1234567890").unwrap(), 1234567890.0);
}

#[test]
fn fractions() {
    assert_eq!(number("0.5").unwrap(), 0.5);
    assert_eq!(number("-3.25").unwrap(), -3.25);
    assert_eq!(number("10.000").unwrap(), 10.0);
}

#[test]
fn exponents() {
    assert_eq!(number("1e2").unwrap(), 100.0);
    assert_eq!(number("1E2").unwrap(), 100.0);
    assert_eq!(number("1e+2").unwrap(), 100.0);
    assert_eq!(number("1e-2").unwrap(), 0.01);
    assert_eq!(number("-1.5e3").unwrap(), -1500.0);
    assert_eq!(number("2.5E-1").unwrap(), 0.25);
}

#[test]
fn value_matches_literal_within_float_precision() {
    let cases = [
        "3.141592653589793",
        "2.2250738585072014e-308",
        "1.7976931348623157e308",
    ];
    for literal in cases {
        let expected: f64 = literal.parse().unwrap();
        assert_eq!(number(literal).unwrap(), expected, "literal: {literal}");
    }
}

#[test]
fn leading_zeros_rejected() {
    for literal in ["01", "007", "-01", "00", "01.5"] {
        let err = number(literal).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax, "literal: {literal}");
    }
    // ...but a plain zero and a zero-led fraction are fine.
    assert!(number("0").is_ok());
    assert!(number("0.5").is_ok());
    assert!(number("-0.5").is_ok());
}

#[test]
fn leading_zero_error_message() {
    let err = parse_str(r#"{"n":01}"#).unwrap_err();
    assert!(err.message.contains("leading zeros"));
}

#[test]
fn bare_fraction_and_exponent_parts_rejected() {
    for literal in ["1.", ".5", "1.e2", "1e", "1e+", "1e-", "5.5.5"] {
        assert!(number(literal).is_err(), "literal: {literal}");
    }
}

#[test]
fn signs_only_where_the_grammar_allows() {
    assert!(number("+1").is_err());
    assert!(number("--1").is_err());
    assert!(number("1-").is_err());
    assert!(number("-").is_err());
    assert!(number("-e1").is_err());
}

#[test]
fn number_must_terminate_at_a_structural_boundary() {
    assert!(number("1x").is_err());
    assert!(number("0x14").is_err());
    assert!(parse_str("[1, 2]").is_ok());
    assert!(parse_str("[1 ,2]").is_ok());
}

#[test]
fn numbers_as_object_values() {
    let value = parse_str(r#"{"n":0.5,"m":-2e-3}"#).unwrap();
    assert_eq!(value.get("n").and_then(Value::as_f64), Some(0.5));
    assert_eq!(value.get("m").and_then(Value::as_f64), Some(-0.002));
}
