//! Local and remote validation, and the facade selecting between them.
//!
//! Both paths gate on format first. The local path then runs the country's
//! checksum; the remote path asks a [`RegistryClient`] whether the number was
//! issued, and only for numbers that are well-formed.

use serde::{Deserialize, Serialize};

use crate::checksum::validate_modulus;
use crate::core::RegistryError;
use crate::format::{parse_vat_number, validate_format};
use crate::registry::RegistryClient;

/// How [`validate`] decides whether a VAT number is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Format and checksum, no network.
    Local,
    /// Format, then an existence check against the registry.
    #[default]
    Remote,
}

impl Mode {
    /// `Local` when `use_local_only` is set, otherwise `Remote`.
    pub fn from_local_flag(use_local_only: bool) -> Self {
        if use_local_only { Self::Local } else { Self::Remote }
    }
}

/// Validate format and, where the country has one, the checksum.
pub fn validate_local(vat_number: &str) -> bool {
    validate_format(vat_number) && validate_modulus(vat_number)
}

/// Validate format, then ask the registry whether the number exists.
///
/// Malformed numbers return `Ok(false)` without contacting the registry.
/// Registry errors are returned as-is.
pub fn validate_remote<C>(vat_number: &str, registry: &C) -> Result<bool, RegistryError>
where
    C: RegistryClient + ?Sized,
{
    let vat = match parse_vat_number(vat_number) {
        Ok(vat) => vat,
        Err(e) => {
            tracing::debug!(error = %e, "format check failed, skipping registry");
            return Ok(false);
        }
    };
    registry.check_exists(vat.country(), vat.number())
}

/// Validate a VAT number locally or against the registry.
///
/// Only the remote path can return an error.
pub fn validate<C>(vat_number: &str, mode: Mode, registry: &C) -> Result<bool, RegistryError>
where
    C: RegistryClient + ?Sized,
{
    match mode {
        Mode::Local => Ok(validate_local(vat_number)),
        Mode::Remote => validate_remote(vat_number, registry),
    }
}

/// A validator bound to a registry client.
///
/// ```
/// use euvat::{CountryCode, RegistryError};
/// use euvat::registry::RegistryClient;
/// use euvat::validator::Validator;
///
/// struct AlwaysIssued;
///
/// impl RegistryClient for AlwaysIssued {
///     fn check_exists(&self, _: CountryCode, _: &str) -> Result<bool, RegistryError> {
///         Ok(true)
///     }
/// }
///
/// let validator = Validator::new(AlwaysIssued);
/// assert!(validator.validate_local("DE136695976"));
/// assert!(!validator.validate_local("DE136695977"));
/// assert_eq!(validator.validate("DE136695977", false), Ok(true));
/// ```
#[derive(Debug, Clone)]
pub struct Validator<C> {
    registry: C,
}

impl<C: RegistryClient> Validator<C> {
    /// Create a validator that sends remote checks to `registry`.
    pub fn new(registry: C) -> Self {
        Self { registry }
    }

    /// The registry client used for remote checks.
    pub fn registry(&self) -> &C {
        &self.registry
    }

    /// See [`validate_format`].
    pub fn validate_format(&self, vat_number: &str) -> bool {
        validate_format(vat_number)
    }

    /// See [`validate_local`].
    pub fn validate_local(&self, vat_number: &str) -> bool {
        validate_local(vat_number)
    }

    /// Validate format, then check existence with this validator's registry.
    pub fn validate_remote(&self, vat_number: &str) -> Result<bool, RegistryError> {
        validate_remote(vat_number, &self.registry)
    }

    /// Validate locally when `use_local_only` is set, otherwise remotely.
    pub fn validate(&self, vat_number: &str, use_local_only: bool) -> Result<bool, RegistryError> {
        self.validate_with(vat_number, Mode::from_local_flag(use_local_only))
    }

    /// Validate in an explicit [`Mode`].
    pub fn validate_with(&self, vat_number: &str, mode: Mode) -> Result<bool, RegistryError> {
        validate(vat_number, mode, &self.registry)
    }
}

#[cfg(feature = "vies")]
impl Validator<crate::registry::ViesClient> {
    /// A validator backed by VIES with default settings.
    pub fn vies() -> Result<Self, RegistryError> {
        crate::registry::ViesClient::builder().build().map(Self::new)
    }
}
