//! Normalization and structural validation of VAT numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::patterns;
use crate::core::{CountryCode, FormatErrorKind, VatFormatError};

/// A format-validated VAT number split into prefix and body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VatNumber {
    country: CountryCode,
    number: String,
}

impl VatNumber {
    /// The country prefix.
    pub fn country(&self) -> CountryCode {
        self.country
    }

    /// The number body, without the prefix.
    pub fn number(&self) -> &str {
        &self.number
    }
}

impl fmt::Display for VatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.country, self.number)
    }
}

impl FromStr for VatNumber {
    type Err = VatFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vat_number(s)
    }
}

/// Uppercase only. Whitespace is never stripped; grammars that tolerate it
/// (DK) say so themselves.
pub(crate) fn normalize(vat_number: &str) -> String {
    vat_number.to_ascii_uppercase()
}

/// Split a normalized number into its prefix and body.
///
/// Returns `None` when the first two characters are not a supported prefix.
pub(crate) fn split(normalized: &str) -> Option<(CountryCode, &str)> {
    let prefix = normalized.get(..2)?;
    let body = normalized.get(2..)?;
    Some((prefix.parse().ok()?, body))
}

/// Validate a VAT number by format and return it split into prefix and body.
///
/// The input must include the 2-letter country prefix (e.g. "DE123456789").
/// Case is ignored; whitespace anywhere outside a grammar that allows it fails.
pub fn parse_vat_number(vat_number: &str) -> Result<VatNumber, VatFormatError> {
    let normalized = normalize(vat_number);
    if normalized.is_empty() {
        return Err(VatFormatError::new(normalized, FormatErrorKind::Empty));
    }

    let Some((country, body)) = split(&normalized) else {
        let prefix: String = normalized.chars().take(2).collect();
        return Err(VatFormatError::new(
            normalized,
            FormatErrorKind::UnknownCountry(prefix),
        ));
    };

    match patterns::lookup(country) {
        Some(rule) if rule.is_match(body) => Ok(VatNumber {
            country,
            number: body.to_string(),
        }),
        _ => Err(VatFormatError::new(
            normalized.clone(),
            FormatErrorKind::Pattern(country),
        )),
    }
}

/// Validate a VAT number by format only (no checksum, no network call).
pub fn validate_format(vat_number: &str) -> bool {
    parse_vat_number(vat_number).is_ok()
}
