//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use taxperson::core::models::{Person, TaxCode, ValidationPolicy};
use test_case::test_case;

// =============================================================================
// Accepted Codes
// =============================================================================

#[test_case("RSSMRA85M01H501Z" ; "canonical example")]
#[test_case("BNCGNN90A41F205Y" ; "female birth day offset")]
#[test_case("ABCDEF00AAAAAAAA" ; "letters only tail")]
#[test_case("ZZZZZZ9912345678" ; "digits only tail")]
fn accepts_uppercase_under_both_policies(code: &str) {
    for policy in [ValidationPolicy::Normalize, ValidationPolicy::Strict] {
        let parsed = TaxCode::parse_with(code, policy).unwrap();
        assert_eq!(parsed.as_str(), code, "policy={policy}");
    }
}

// =============================================================================
// Rejected Codes
// =============================================================================

#[test_case("" ; "empty")]
#[test_case("RSSMRA85M01H501" ; "fifteen chars")]
#[test_case("RSSMRA85M01H501ZZ" ; "seventeen chars")]
#[test_case("123456M01H501Z" ; "wrong positional types")]
#[test_case("RSSMRA85M01H50 Z" ; "inner space")]
#[test_case(" RSSMRA85M01H501Z" ; "leading space")]
#[test_case("RSSMRA85M01H501Z " ; "trailing space")]
#[test_case("RSSMR885M01H501Z" ; "digit in letter section")]
#[test_case("RSSMRAA5M01H501Z" ; "letter in digit section")]
#[test_case("RSSMRA85M01H501_" ; "underscore in tail")]
#[test_case("rssmra85m01h50ß" ; "sharp s would uppercase to two letters")]
#[test_case("rssmrı85m01h501z" ; "dotless i would uppercase to ascii")]
#[test_case("rssmra85m01h5ﬀz" ; "ligature would uppercase to two letters")]
fn rejects_malformed_codes(code: &str) {
    for policy in [ValidationPolicy::Normalize, ValidationPolicy::Strict] {
        assert!(
            Person::with_policy("Mario", "Rossi", code, policy).is_err(),
            "expected rejection of {code:?} under {policy}"
        );
    }
}

// =============================================================================
// Policy Split
// =============================================================================

#[test_case("rssmra85m01h501z" ; "all lowercase")]
#[test_case("Rssmra85m01h501Z" ; "mixed case")]
#[test_case("RSSMRA85M01h501Z" ; "single lowercase in tail")]
fn lowercase_depends_on_policy(code: &str) {
    let normalized = TaxCode::parse_with(code, ValidationPolicy::Normalize).unwrap();
    assert_eq!(normalized.as_str(), code.to_ascii_uppercase());
    assert!(TaxCode::parse_with(code, ValidationPolicy::Strict).is_err());
}

// =============================================================================
// Policy Parsing
// =============================================================================

#[test_case("normalize", ValidationPolicy::Normalize ; "normalize policy")]
#[test_case("NORMALIZE", ValidationPolicy::Normalize ; "uppercase normalize")]
#[test_case("strict", ValidationPolicy::Strict ; "strict policy")]
#[test_case("Strict", ValidationPolicy::Strict ; "mixed case strict")]
fn test_policy_parsing(input: &str, expected: ValidationPolicy) {
    let parsed: ValidationPolicy = input.parse().unwrap();
    assert_eq!(parsed, expected);
}

#[test_case("lenient" ; "unknown policy")]
#[test_case("" ; "empty string")]
fn test_policy_parsing_errors(input: &str) {
    let result: Result<ValidationPolicy, _> = input.parse();
    assert!(result.is_err(), "Expected error for input: {input:?}");
}

// =============================================================================
// Name Comparison
// =============================================================================

#[test_case("Anna", "ANNA", true ; "upper vs title")]
#[test_case("anna", "Anna", true ; "lower vs title")]
#[test_case("Anna", "Anna", true ; "identical")]
#[test_case("Anna", "Anne", false ; "different letter")]
#[test_case("Anna", "Anna ", false ; "trailing space differs")]
#[test_case("", "", true ; "both empty")]
fn test_has_same_name(left: &str, right: &str, expected: bool) {
    let a = Person::new(left, "Rossi", "RSSNNA85M01H501Z").unwrap();
    let b = Person::new(right, "Bianchi", "RSSNNA85M01H501Z").unwrap();
    assert_eq!(a.has_same_name(&b), expected, "left={left:?} right={right:?}");
}
