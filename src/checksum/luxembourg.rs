use super::parse_digits;

/// `LU` + 6-digit number + 2 check digits, check = number mod 89.
pub(super) fn is_valid(vat_number: &str) -> bool {
    if !vat_number.starts_with("LU") {
        return false;
    }
    match (parse_digits(vat_number, 2, 8), parse_digits(vat_number, 8, 10)) {
        (Some(number), Some(check)) => check == number % 89,
        _ => false,
    }
}
