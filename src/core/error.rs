use std::fmt;

use thiserror::Error;

use super::country::CountryCode;

/// A string that is not one of the supported VAT country prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown VAT country code '{0}'")]
pub struct UnknownCountryCode(pub String);

/// Error returned when a VAT number fails format validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid VAT number '{value}': {kind}")]
pub struct VatFormatError {
    /// The normalized input value.
    pub value: String,
    /// Why the value failed validation.
    pub kind: FormatErrorKind,
}

impl VatFormatError {
    pub(crate) fn new(value: impl Into<String>, kind: FormatErrorKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }
}

/// The reason a VAT number was rejected by format validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatErrorKind {
    /// Input was empty.
    Empty,
    /// The first two characters are not a supported prefix.
    UnknownCountry(String),
    /// The number body does not match the country's grammar.
    Pattern(CountryCode),
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty input"),
            Self::UnknownCountry(prefix) => write!(f, "unknown country code '{prefix}'"),
            Self::Pattern(country) => write!(f, "invalid format for country {country}"),
        }
    }
}

/// Error raised by a VAT registry lookup.
///
/// The validators never catch these; they reach the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// Network or HTTP transport error.
    #[error("registry network error: {0}")]
    Network(String),

    /// The registry rejected the request (e.g. member state unavailable).
    #[error("registry API error: {0}")]
    Api(String),

    /// The registry response could not be parsed.
    #[error("registry parse error: {0}")]
    Parse(String),

    /// The client could not be constructed from its configuration.
    #[error("registry client configuration error: {0}")]
    Config(String),
}
