use super::digit_values;

/// Derive the ISO 7064 MOD 11,10 check digit for the first eight digits.
fn check_digit(digits: &[u32]) -> u32 {
    let mut product = 10;
    for &digit in digits.iter().take(8) {
        let mut sum = (digit + product) % 10;
        if sum == 0 {
            sum = 10;
        }
        product = (2 * sum) % 11;
    }
    match 11 - product {
        10 => 0,
        check => check,
    }
}

/// `DE` + 9 digits, the last being the MOD 11,10 check digit of the first 8.
pub(super) fn is_valid(vat_number: &str) -> bool {
    if !vat_number.starts_with("DE") {
        return false;
    }
    match digit_values(vat_number, 2, 11) {
        Some(digits) if digits.len() == 9 => check_digit(&digits) == digits[8],
        _ => false,
    }
}
