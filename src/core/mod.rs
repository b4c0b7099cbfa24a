//! Country prefixes, the country reference table, and error types.

mod countries;
mod country;
mod error;

pub use countries::{is_known_country_code, validate_country_code};
pub use country::CountryCode;
pub use error::*;
