//! # tests/matcher/parsing.rs
//!
//! Tests für die Interpretation der Kandidaten-Werte: nicht interpretierbare
//! Eingaben, der `null`-Kontrakt und die Zähl-Konvention für signifikante
//! Stellen und Nachkommastellen.

use serde_json::{json, Value};
use validation_lib::{codes, parse_candidate, DecimalNumberMatcher, ValidationResult};

/// Wertet einen String-Kandidaten mit dem Standard-Matcher aus.
fn match_str(candidate: &str) -> ValidationResult {
    DecimalNumberMatcher::new().match_value(&Value::String(candidate.to_string()))
}

/// Prüft, dass nicht interpretierbare Werte genau e001 melden.
#[cfg(test)]
mod malformed_candidates {
    use super::*;

    #[test]
    fn test_match_value_when_string_is_not_a_number_then_reports_only_e001() {
        let result = match_str("abc");

        assert_eq!(result.errors().len(), 1);
        assert!(result.has_error_code(codes::INVALID_DECIMAL));
    }

    #[test]
    fn test_match_value_when_string_is_empty_then_reports_only_e001() {
        let result = match_str("");

        assert_eq!(result.errors().len(), 1);
        assert!(result.has_error_code(codes::INVALID_DECIMAL));
    }

    #[test]
    fn test_match_value_when_string_has_two_separators_then_reports_only_e001() {
        let result = match_str("1.2.3");

        assert_eq!(result.errors().len(), 1);
        assert!(result.has_error_code(codes::INVALID_DECIMAL));
    }

    #[test]
    fn test_match_value_when_candidate_is_boolean_then_reports_only_e001() {
        let result = DecimalNumberMatcher::new().match_value(&json!(true));

        assert_eq!(result.errors().len(), 1);
        assert!(result.has_error_code(codes::INVALID_DECIMAL));
    }

    #[test]
    fn test_match_value_when_candidate_is_array_then_reports_only_e001() {
        let result = DecimalNumberMatcher::new().match_value(&json!([1, 2]));

        assert_eq!(result.errors().len(), 1);
        assert!(result.has_error_code(codes::INVALID_DECIMAL));
    }

    #[test]
    fn test_match_value_when_candidate_is_object_then_reports_only_e001() {
        let result = DecimalNumberMatcher::new().match_value(&json!({ "amount": "1.5" }));

        assert_eq!(result.errors().len(), 1);
        assert!(result.has_error_code(codes::INVALID_DECIMAL));
    }

    #[test]
    fn test_match_value_when_string_is_not_finite_then_reports_only_e001() {
        // Ein exakter Dezimalwert kennt keine nicht-endlichen Werte.
        for candidate in ["NaN", "Infinity", "-Infinity"] {
            let result = match_str(candidate);

            assert_eq!(result.errors().len(), 1, "candidate: {}", candidate);
            assert!(result.has_error_code(codes::INVALID_DECIMAL));
        }
    }
}

/// Prüft den dokumentierten Kontrakt: `null` steht für "kein Wert" und ist gültig.
#[cfg(test)]
mod null_contract {
    use super::*;

    #[test]
    fn test_match_value_when_candidate_is_null_then_succeeds() {
        let result = DecimalNumberMatcher::new().match_value(&Value::Null);

        assert!(result.is_valid());
    }

    #[test]
    fn test_match_value_when_candidate_is_null_then_limit_checks_are_skipped() {
        // Auch mit den strengsten Limits bleibt "kein Wert" gültig.
        let matcher = DecimalNumberMatcher::with_limits(0, 0);

        let result = matcher.match_value(&Value::Null);

        assert!(result.is_valid());
    }

    #[test]
    fn test_parse_candidate_when_candidate_is_null_then_returns_absent() {
        let parsed = parse_candidate(&Value::Null).unwrap();

        assert!(parsed.is_none());
    }
}

/// Prüft, dass JSON-Zahlen denselben Regeln folgen wie String-Kandidaten.
#[cfg(test)]
mod numeric_candidates {
    use super::*;

    #[test]
    fn test_match_value_when_number_is_within_limits_then_succeeds() {
        let matcher = DecimalNumberMatcher::with_limits(5, 2);

        let result = matcher.match_value(&json!(123.45));

        assert!(result.is_valid());
    }

    #[test]
    fn test_match_value_when_integer_number_exceeds_default_limit_then_reports_e002() {
        let result = DecimalNumberMatcher::new().match_value(&json!(123456789012_i64));

        assert_eq!(result.errors().len(), 1);
        assert!(result.has_error_code(codes::MAX_DIGITS_EXCEEDED));
    }
}

/// Prüft die verbindliche Zähl-Konvention des `ExactDecimal`.
#[cfg(test)]
mod counting_convention {
    use super::*;

    fn parse_str(literal: &str) -> validation_lib::ExactDecimal {
        parse_candidate(&Value::String(literal.to_string()))
            .unwrap()
            .expect("literal should parse to a decimal")
    }

    #[test]
    fn test_precision_when_fraction_has_trailing_zeros_then_they_do_not_count() {
        // "0.50" und "0.5" sind derselbe Wert mit einer signifikanten Stelle.
        assert_eq!(parse_str("0.50"), parse_str("0.5"));
        assert_eq!(parse_str("0.50").precision(), 1);
        assert_eq!(parse_str("0.50").decimal_places(), 1);
    }

    #[test]
    fn test_precision_when_leading_zeros_are_present_then_they_do_not_count() {
        assert_eq!(parse_str("007").precision(), 1);
        assert_eq!(parse_str("007").decimal_places(), 0);
    }

    #[test]
    fn test_precision_when_integer_has_trailing_zeros_then_they_count() {
        assert_eq!(parse_str("987000").precision(), 6);
    }

    #[test]
    fn test_precision_when_value_is_zero_then_it_is_one() {
        assert_eq!(parse_str("0").precision(), 1);
        assert_eq!(parse_str("0.00").precision(), 1);
        assert_eq!(parse_str("0.00").decimal_places(), 0);
    }

    #[test]
    fn test_precision_when_fraction_is_all_zeros_then_value_is_integral() {
        let parsed = parse_str("1200.00");

        assert_eq!(parsed.precision(), 4);
        assert_eq!(parsed.decimal_places(), 0);
    }

    #[test]
    fn test_precision_when_sign_is_present_then_it_does_not_count() {
        let parsed = parse_str("-123.45");

        assert_eq!(parsed.precision(), 5);
        assert_eq!(parsed.decimal_places(), 2);
    }

    #[test]
    fn test_parse_candidate_when_literal_uses_exponent_then_value_is_expanded() {
        // "1.5e3" ist der Wert 1500 mit vier signifikanten Stellen.
        let parsed = parse_str("1.5e3");

        assert_eq!(parsed.precision(), 4);
        assert_eq!(parsed.decimal_places(), 0);
    }

    #[test]
    fn test_match_value_when_trailing_zeros_would_break_the_limit_then_they_are_ignored() {
        // "123.000" hat nach der Normalisierung genau 3 signifikante Stellen.
        let matcher = DecimalNumberMatcher::with_max_digits(3);

        let result = matcher.match_value(&json!("123.000"));

        assert!(result.is_valid());
    }
}
