use euvat::checksum::ChecksumRule;
use euvat::*;

// ---------------------------------------------------------------------------
// Belgium
// ---------------------------------------------------------------------------

#[test]
fn be_valid() {
    assert!(validate_local("BE0000000097"));
    assert!(validate_local("BE0403032921"));
    assert!(validate_local("BE0417046748"));
}

#[test]
fn be_format_ok_checksum_wrong() {
    assert!(validate_format("BE0999999599"));
    assert!(!validate_local("BE0999999599"));
    assert!(validate_local("BE0999999526"));
}

#[test]
fn be_without_leading_zero_fails_locally() {
    assert!(validate_format("BE1234567890"));
    assert_eq!(modulus_outcome("BE1234567890"), ChecksumOutcome::Invalid);
}

// ---------------------------------------------------------------------------
// Luxembourg
// ---------------------------------------------------------------------------

#[test]
fn lu_checksum() {
    assert!(validate_local("LU15027442"));
    assert!(!validate_local("LU15027443"));
}

// ---------------------------------------------------------------------------
// France
// ---------------------------------------------------------------------------

#[test]
fn fr_numeric_key() {
    assert!(validate_local("FR40303265045"));
    assert!(!validate_local("FR41303265045"));
}

#[test]
fn fr_non_numeric_key_accepted_regardless_of_number() {
    for vat in ["FRAB123456789", "FRK7000000000", "FR4A999999999", "FRZZ303265045"] {
        assert_eq!(modulus_outcome(vat), ChecksumOutcome::Unverifiable, "{vat}");
        assert!(validate_local(vat), "{vat}");
    }
}

// ---------------------------------------------------------------------------
// Germany
// ---------------------------------------------------------------------------

#[test]
fn de_checksum() {
    assert!(validate_local("DE136695976"));
    assert!(!validate_local("DE136695977"));
    assert!(validate_local("DE811793578"));
}

// ---------------------------------------------------------------------------
// Netherlands
// ---------------------------------------------------------------------------

#[test]
fn nl_weighted_sum() {
    // 9*1 + 8*2 + 7*3 + 6*4 + 5*5 + 4*6 + 3*7 + 2*8 = 156, 156 mod 11 = 2
    assert!(validate_local("NL123456782B01"));
    assert!(!validate_local("NL123456789B01"));
    assert_eq!(modulus_outcome("NL123456789B01"), ChecksumOutcome::Invalid);
}

#[test]
fn nl_real_number() {
    assert!(validate_local("NL004495445B01"));
}

// ---------------------------------------------------------------------------
// Countries without an algorithm
// ---------------------------------------------------------------------------

#[test]
fn registered_without_algorithm() {
    for country in [CountryCode::ES, CountryCode::GB, CountryCode::XI] {
        assert_eq!(
            ChecksumRule::for_country(country),
            Some(ChecksumRule::Unspecified)
        );
    }
    assert!(validate_local("ESX1234567X"));
    assert!(validate_local("GB999999999"));
    assert!(validate_local("XIHA123"));
}

#[test]
fn no_rule_countries_pass_on_format() {
    assert_eq!(ChecksumRule::for_country(CountryCode::IT), None);
    assert_eq!(modulus_outcome("IT00000000000"), ChecksumOutcome::NoRule);
    assert!(validate_local("IT00000000000"));
    assert!(validate_local("PL1234567890"));
}

#[test]
fn local_requires_format_first() {
    // Passes the Dutch checksum on its digits, but the `B` suffix is missing.
    assert!(validate_modulus("NL123456782X01"));
    assert!(!validate_local("NL123456782X01"));
    assert!(!validate_local(""));
    assert!(!validate_local("XX123"));
}
