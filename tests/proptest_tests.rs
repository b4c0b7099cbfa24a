//! Property-based tests for format and checksum validation.
//!
//! Run with: `cargo test --test proptest_tests`

use euvat::*;
use proptest::prelude::*;

/// Check digits (0-9) that make `DE{body}{d}` pass the local checksum.
fn de_accepted_check_digits(body: &str) -> Vec<u32> {
    (0..10)
        .filter(|d| validate_local(&format!("DE{body}{d}")))
        .collect()
}

proptest! {
    /// Exactly one last digit completes any 8-digit German body, and the
    /// answer never changes between calls.
    #[test]
    fn de_check_digit_is_unique_and_stable(body in "[0-9]{8}") {
        let first = de_accepted_check_digits(&body);
        prop_assert_eq!(first.len(), 1);
        prop_assert_eq!(de_accepted_check_digits(&body), first);
    }

    /// Replacing the derived check digit with any other digit invalidates.
    #[test]
    fn de_flipped_check_digit_fails(body in "[0-9]{8}", offset in 1u32..10) {
        let check = de_accepted_check_digits(&body)[0];
        let valid = format!("DE{body}{check}");
        let flipped = format!("DE{body}{}", (check + offset) % 10);
        prop_assert!(validate_local(&valid));
        prop_assert!(!validate_local(&flipped));
        prop_assert_eq!(modulus_outcome(&flipped), ChecksumOutcome::Invalid);
    }

    /// Countries without a checksum pass locally whenever the format passes.
    #[test]
    fn no_rule_countries_follow_format(
        vat in prop_oneof![
            "IT[0-9]{11}",
            "PL[0-9]{10}",
            "SE[0-9]{12}",
            "ATU[A-Z0-9]{8}",
            "RO[0-9]{2,10}",
            "IT[0-9]{9,13}",
        ]
    ) {
        prop_assert_eq!(validate_local(&vat), validate_format(&vat));
    }

    /// French numbers with a non-numeric key are never rejected by checksum.
    #[test]
    fn fr_alpha_key_always_accepted(key in "[A-Z][A-Z0-9]|[0-9][A-Z]", siren in "[0-9]{9}") {
        let vat = format!("FR{key}{siren}");
        prop_assert!(validate_format(&vat));
        prop_assert!(validate_local(&vat));
    }

    /// Case never changes the answer.
    #[test]
    fn case_is_transparent(body in "[0-9]{9}", lower_prefix in any::<bool>()) {
        let upper = format!("DE{body}");
        let mixed = if lower_prefix { format!("de{body}") } else { format!("De{body}") };
        prop_assert_eq!(validate_format(&mixed), validate_format(&upper));
        prop_assert_eq!(validate_local(&mixed), validate_local(&upper));
    }

    /// Surrounding whitespace is never stripped, so padded input fails.
    #[test]
    fn padded_input_rejected(body in "[0-9]{9}", pad in "[ \t\n]{1,3}", leading in any::<bool>()) {
        let vat = if leading { format!("{pad}DE{body}") } else { format!("DE{body}{pad}") };
        prop_assert!(!validate_format(&vat));
        prop_assert!(!validate_local(&vat));
    }

    /// Arbitrary input never panics.
    #[test]
    fn arbitrary_input_never_panics(s in "\\PC{0,20}") {
        let _ = validate_local(&s);
        let _ = parse_vat_number(&s);
        let _ = modulus_outcome(&s);
    }
}
