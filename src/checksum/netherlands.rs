use super::digit_values;

const WEIGHTS: [u32; 8] = [9, 8, 7, 6, 5, 4, 3, 2];

/// `NL` + 9 digits + `B` + 2 digits. The weighted sum of the first 8 digits
/// modulo 11 (values above 9 read as 0) must equal the 9th digit.
pub(super) fn is_valid(vat_number: &str) -> bool {
    if !vat_number.starts_with("NL") {
        return false;
    }
    let Some(digits) = digit_values(vat_number, 2, 11) else {
        return false;
    };
    if digits.len() != 9 {
        return false;
    }
    let total: u32 = digits.iter().zip(WEIGHTS).map(|(d, w)| d * w).sum();
    let total = match total % 11 {
        t if t > 9 => 0,
        t => t,
    };
    total == digits[8]
}
