//! Existence checks against an authoritative VAT registry.
//!
//! [`RegistryClient`] is the seam between the validators and whatever answers
//! "was this number issued?". The `vies` feature provides [`ViesClient`],
//! backed by the EU VIES REST API.

use std::sync::Arc;

use crate::core::{CountryCode, RegistryError};

#[cfg(feature = "vies")]
mod vies;

#[cfg(feature = "vies")]
pub use vies::{DEFAULT_VIES_URL, ViesClient, ViesClientBuilder, ViesConfig, ViesResult};

/// A registry of issued VAT numbers.
///
/// Implementations may block on network I/O. Timeouts, retries and
/// cancellation belong to the implementation; callers see only the result.
pub trait RegistryClient {
    /// Whether `number` (without prefix) is registered under `country`.
    fn check_exists(&self, country: CountryCode, number: &str) -> Result<bool, RegistryError>;
}

impl<T: RegistryClient + ?Sized> RegistryClient for &T {
    fn check_exists(&self, country: CountryCode, number: &str) -> Result<bool, RegistryError> {
        (**self).check_exists(country, number)
    }
}

impl<T: RegistryClient + ?Sized> RegistryClient for Box<T> {
    fn check_exists(&self, country: CountryCode, number: &str) -> Result<bool, RegistryError> {
        (**self).check_exists(country, number)
    }
}

impl<T: RegistryClient + ?Sized> RegistryClient for Arc<T> {
    fn check_exists(&self, country: CountryCode, number: &str) -> Result<bool, RegistryError> {
        (**self).check_exists(country, number)
    }
}
