//! Structural VAT number validation.
//!
//! Each country prefix maps to a grammar over the number body. A number is
//! well-formed when its prefix is known and the whole body matches.
//!
//! ```
//! use euvat::format::*;
//!
//! assert!(validate_format("DE123456789"));
//! assert!(validate_format("dk12 34 56 78"));
//! assert!(!validate_format("DE12345678"));
//! ```

mod patterns;
mod validate;

pub use patterns::{FormatRule, lookup, lookup_code};
pub(crate) use validate::{normalize, split};
pub use validate::{VatNumber, parse_vat_number, validate_format};
