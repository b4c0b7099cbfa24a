use super::{ChecksumOutcome, parse_digits};

/// `FR` + 2-character key + SIREN. A numeric key must equal
/// `(SIREN * 100 + 12) mod 97`.
///
/// Keys containing letters use an encoding this formula does not cover, so
/// such numbers are reported as unverifiable rather than invalid.
pub(super) fn check(vat_number: &str) -> ChecksumOutcome {
    if !vat_number.starts_with("FR") {
        return ChecksumOutcome::Invalid;
    }
    let Some(key) = parse_digits(vat_number, 2, 4) else {
        return ChecksumOutcome::Unverifiable;
    };
    let end = vat_number.len().min(15);
    match parse_digits(vat_number, 4, end) {
        Some(siren) => ChecksumOutcome::from_bool(key == (siren * 100 + 12) % 97),
        None => ChecksumOutcome::Invalid,
    }
}
