//! Local checksum (modulus) validation.
//!
//! Some countries embed check digits in their VAT numbers. Each algorithm is a
//! pure function over the normalized number, prefix included. Countries
//! without an algorithm are accepted: a missing check is not a failed check.
//!
//! ```
//! use euvat::checksum::*;
//!
//! assert_eq!(modulus_outcome("BE0403032921"), ChecksumOutcome::Valid);
//! assert_eq!(modulus_outcome("BE0403032922"), ChecksumOutcome::Invalid);
//! assert_eq!(modulus_outcome("IT12345678901"), ChecksumOutcome::NoRule);
//! assert!(validate_modulus("IT12345678901"));
//! ```

mod belgium;
mod france;
mod germany;
mod luxembourg;
mod netherlands;

use serde::{Deserialize, Serialize};

use crate::core::CountryCode;
use crate::format::{normalize, split};

/// Result of running the local checksum for a VAT number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChecksumOutcome {
    /// The check digits are consistent with the number.
    Valid,
    /// The check digits contradict the number.
    Invalid,
    /// The algorithm ran but the input uses an encoding it cannot verify
    /// (French alphabetic keys).
    Unverifiable,
    /// No executable algorithm exists for the country.
    NoRule,
}

impl ChecksumOutcome {
    /// Only a verified contradiction rejects a number.
    pub fn is_accepted(self) -> bool {
        !matches!(self, Self::Invalid)
    }

    fn from_bool(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

/// The checksum algorithm registered for a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChecksumRule {
    /// BE: 97 minus the first eight digits modulo 97.
    Belgium,
    /// LU: first six digits modulo 89.
    Luxembourg,
    /// FR: two-digit key over the SIREN, modulo 97.
    France,
    /// DE: ISO 7064 MOD 11,10 rolling product.
    Germany,
    /// NL: weighted sum modulo 11.
    Netherlands,
    /// Registered without a known algorithm (ES, GB, XI). Never fails.
    Unspecified,
}

impl ChecksumRule {
    /// The rule registered for `country`, if any.
    pub fn for_country(country: CountryCode) -> Option<Self> {
        use CountryCode::*;
        match country {
            BE => Some(Self::Belgium),
            LU => Some(Self::Luxembourg),
            FR => Some(Self::France),
            DE => Some(Self::Germany),
            NL => Some(Self::Netherlands),
            ES | GB | XI => Some(Self::Unspecified),
            AT | BG | CY | CZ | DK | EE | EL | FI | HR | HU | IE | IT | LT | LV | MT | PL | PT
            | RO | SE | SI | SK => None,
        }
    }

    /// Run the rule against a normalized VAT number (prefix included).
    pub fn check(self, vat_number: &str) -> ChecksumOutcome {
        match self {
            Self::Belgium => ChecksumOutcome::from_bool(belgium::is_valid(vat_number)),
            Self::Luxembourg => ChecksumOutcome::from_bool(luxembourg::is_valid(vat_number)),
            Self::France => france::check(vat_number),
            Self::Germany => ChecksumOutcome::from_bool(germany::is_valid(vat_number)),
            Self::Netherlands => ChecksumOutcome::from_bool(netherlands::is_valid(vat_number)),
            Self::Unspecified => ChecksumOutcome::NoRule,
        }
    }
}

/// Run the local checksum for a VAT number and report how it went.
///
/// Unknown prefixes and countries without an algorithm yield
/// [`ChecksumOutcome::NoRule`]. Format is not checked here.
pub fn modulus_outcome(vat_number: &str) -> ChecksumOutcome {
    let normalized = normalize(vat_number);
    let Some((country, _)) = split(&normalized) else {
        return ChecksumOutcome::NoRule;
    };
    let outcome = match ChecksumRule::for_country(country) {
        Some(rule) => rule.check(&normalized),
        None => ChecksumOutcome::NoRule,
    };
    tracing::debug!(%country, ?outcome, "checksum evaluated");
    outcome
}

/// Validate a VAT number's check digits. Returns `true` when the country has
/// no checksum or the checksum cannot be evaluated.
pub fn validate_modulus(vat_number: &str) -> bool {
    modulus_outcome(vat_number).is_accepted()
}

/// Parse `s[start..end]` as a decimal number. `None` if the range is out of
/// bounds or contains anything other than ASCII digits.
pub(crate) fn parse_digits(s: &str, start: usize, end: usize) -> Option<u64> {
    let digits = s.get(start..end)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// The ASCII digits of `s[start..end]` as values, or `None` on anything else.
pub(crate) fn digit_values(s: &str, start: usize, end: usize) -> Option<Vec<u32>> {
    s.get(start..end)?.chars().map(|c| c.to_digit(10)).collect()
}
