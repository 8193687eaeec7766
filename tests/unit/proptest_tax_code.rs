//! Property-based tests for tax code validation
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use taxperson::core::models::{Person, TaxCode, ValidationPolicy, Violation};

proptest! {
    /// Every string shaped like the pattern is accepted and stored unchanged
    #[test]
    fn well_formed_codes_are_kept(code in "[A-Z]{6}[0-9]{2}[A-Z0-9]{8}") {
        let parsed = TaxCode::parse_with(&code, ValidationPolicy::Strict).unwrap();
        prop_assert_eq!(parsed.as_str(), code.as_str());
    }

    /// Lowercase variants are accepted under the default policy and uppercased
    #[test]
    fn lowercase_codes_are_normalized(code in "[a-z]{6}[0-9]{2}[a-z0-9]{8}") {
        let parsed = TaxCode::parse(&code).unwrap();
        prop_assert_eq!(parsed.as_str(), code.to_ascii_uppercase());
        prop_assert!(TaxCode::parse_with(&code, ValidationPolicy::Strict).is_err());
    }

    /// Anything that is not 16 characters long is rejected
    #[test]
    fn wrong_length_is_rejected(code in "[A-Z0-9]{0,15}|[A-Z0-9]{17,24}") {
        let err = TaxCode::parse(&code).unwrap_err();
        prop_assert!(matches!(err.violation(), Violation::Empty | Violation::Length { .. }), "unexpected violation: {:?}", err.violation());
    }

    /// Length is counted on the raw input, even for letters whose uppercase
    /// form has a different number of characters
    #[test]
    fn unicode_wrong_length_is_rejected(
        code in "[a-zA-Z0-9ßıﬀﬁŉàéÀ]{15}|[a-zA-Z0-9ßıﬀﬁŉàéÀ]{17}"
    ) {
        let actual = code.chars().count();
        for policy in [ValidationPolicy::Normalize, ValidationPolicy::Strict] {
            let err = TaxCode::parse_with(&code, policy).unwrap_err();
            prop_assert_eq!(
                err.violation(),
                &Violation::Length { expected: TaxCode::LENGTH, actual }
            );
        }
    }

    /// Non-ASCII letters never normalize into the letter section
    #[test]
    fn non_ascii_letter_is_rejected(
        code in "[a-z]{6}[0-9]{2}[a-z0-9]{8}",
        position in 0usize..6,
        letter in prop::sample::select(vec!['ı', 'ß', 'é', 'À', 'ſ'])
    ) {
        let mut chars: Vec<char> = code.chars().collect();
        chars[position] = letter;
        let broken: String = chars.into_iter().collect();
        let err = TaxCode::parse(&broken).unwrap_err();
        prop_assert!(
            matches!(err.violation(), Violation::Character { position: p, .. } if *p == position),
            "unexpected violation: {:?}", err.violation()
        );
    }

    /// A single whitespace character anywhere is rejected
    #[test]
    fn whitespace_is_rejected(
        code in "[A-Z]{6}[0-9]{2}[A-Z0-9]{8}",
        position in 0usize..16,
        ws in prop::sample::select(vec![' ', '\t', '\n'])
    ) {
        let mut chars: Vec<char> = code.chars().collect();
        chars[position] = ws;
        let broken: String = chars.into_iter().collect();
        let err = TaxCode::parse(&broken).unwrap_err();
        prop_assert_eq!(err.violation(), &Violation::Whitespace { position });
    }

    /// Renaming never changes the code
    #[test]
    fn renaming_keeps_code(name in ".*", surname in ".*") {
        let mut p = Person::new("Mario", "Rossi", "RSSMRA85M01H501Z").unwrap();
        p.set_name(name.clone());
        p.set_surname(surname.clone());
        prop_assert_eq!(p.tax_code().as_str(), "RSSMRA85M01H501Z");
        prop_assert_eq!(p.name(), name.as_str());
        prop_assert_eq!(p.surname(), surname.as_str());
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn has_same_name_is_symmetric() {
        let a = Person::new("Élodie", "Rossi", "RSSMRA85M01H501Z").unwrap();
        let b = Person::new("élodie", "Verdi", "VRDLDE90A41F205K").unwrap();
        assert!(a.has_same_name(&b));
        assert!(b.has_same_name(&a));
    }
}
