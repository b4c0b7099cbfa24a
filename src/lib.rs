//! # euvat
//!
//! Validation of EU VAT identification numbers (plus `GB` and `XI`) in three
//! independent ways:
//!
//! - **format**: the number body matches the country's grammar,
//! - **checksum**: embedded check digits are consistent (BE, DE, FR, LU, NL),
//! - **existence**: a registry such as VIES confirms the number was issued.
//!
//! ## Quick Start
//!
//! ```rust
//! use euvat::*;
//!
//! assert!(validate_format("DE123456789"));
//! assert!(!validate_format("DE12345678"));
//!
//! // Format plus checksum, no network.
//! assert!(validate_local("DE136695976"));
//! assert!(!validate_local("DE136695977"));
//!
//! // Countries without a checksum only need a valid format.
//! assert!(validate_local("IT12345678901"));
//!
//! let vat = parse_vat_number("nl004495445b01").unwrap();
//! assert_eq!(vat.country(), CountryCode::NL);
//! assert_eq!(vat.number(), "004495445B01");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `vies` | Blocking [VIES](https://ec.europa.eu/taxation_customs/vies/) REST client |
//! | `all` | Everything |

pub mod checksum;
pub mod core;
pub mod format;
pub mod registry;
pub mod validator;

pub use crate::checksum::{ChecksumOutcome, modulus_outcome, validate_modulus};
pub use crate::core::*;
pub use crate::format::{VatNumber, parse_vat_number, validate_format};
pub use crate::registry::RegistryClient;
pub use crate::validator::{Mode, Validator, validate, validate_local, validate_remote};
