use super::parse_digits;

/// `BE0` + 8-digit number + 2 check digits, check = 97 - (number mod 97).
///
/// The leading `0` belongs to the number; offsets count from the start of
/// the prefixed string.
pub(super) fn is_valid(vat_number: &str) -> bool {
    if !vat_number.starts_with("BE0") {
        return false;
    }
    let (Some(number), Some(check)) = (
        parse_digits(vat_number, 2, 10),
        parse_digits(vat_number, 10, 12),
    ) else {
        return false;
    };
    check == 97 - number % 97
}
