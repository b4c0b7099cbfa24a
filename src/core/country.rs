//! VAT country prefixes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::UnknownCountryCode;

/// A VAT number country prefix.
///
/// This is the closed set of prefixes issued by EU member states plus the
/// United Kingdom (`GB`) and Northern Ireland (`XI`). Greece uses `EL`, not
/// its ISO code `GR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CountryCode {
    AT,
    BE,
    BG,
    CY,
    CZ,
    DE,
    DK,
    EE,
    EL,
    ES,
    FI,
    FR,
    GB,
    HR,
    HU,
    IE,
    IT,
    LT,
    LU,
    LV,
    MT,
    NL,
    PL,
    PT,
    RO,
    SE,
    SI,
    SK,
    XI,
}

impl CountryCode {
    /// Every supported prefix, in alphabetical order.
    pub const ALL: [CountryCode; 29] = [
        Self::AT,
        Self::BE,
        Self::BG,
        Self::CY,
        Self::CZ,
        Self::DE,
        Self::DK,
        Self::EE,
        Self::EL,
        Self::ES,
        Self::FI,
        Self::FR,
        Self::GB,
        Self::HR,
        Self::HU,
        Self::IE,
        Self::IT,
        Self::LT,
        Self::LU,
        Self::LV,
        Self::MT,
        Self::NL,
        Self::PL,
        Self::PT,
        Self::RO,
        Self::SE,
        Self::SI,
        Self::SK,
        Self::XI,
    ];

    /// The two-letter prefix as written in a VAT number.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AT => "AT",
            Self::BE => "BE",
            Self::BG => "BG",
            Self::CY => "CY",
            Self::CZ => "CZ",
            Self::DE => "DE",
            Self::DK => "DK",
            Self::EE => "EE",
            Self::EL => "EL",
            Self::ES => "ES",
            Self::FI => "FI",
            Self::FR => "FR",
            Self::GB => "GB",
            Self::HR => "HR",
            Self::HU => "HU",
            Self::IE => "IE",
            Self::IT => "IT",
            Self::LT => "LT",
            Self::LU => "LU",
            Self::LV => "LV",
            Self::MT => "MT",
            Self::NL => "NL",
            Self::PL => "PL",
            Self::PT => "PT",
            Self::RO => "RO",
            Self::SE => "SE",
            Self::SI => "SI",
            Self::SK => "SK",
            Self::XI => "XI",
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an exact, uppercase two-letter prefix.
///
/// Callers that accept user input should normalize first; `"de"` is rejected.
impl FromStr for CountryCode {
    type Err = UnknownCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCountryCode(s.to_string()))
    }
}

impl TryFrom<String> for CountryCode {
    type Error = UnknownCountryCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.as_str().to_string()
    }
}
