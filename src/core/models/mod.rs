//! Domain models for taxperson
//!
//! - [`Person`] - Name, surname and a validated tax code
//! - [`TaxCode`] - The 16-character identification code
//! - [`ValidationPolicy`] - Whether to uppercase before or after validating

mod person;
mod policy;
mod tax_code;

pub use person::{Person, names_match};
pub use policy::ValidationPolicy;
pub use tax_code::{CharClass, TAX_CODE_PATTERN, TaxCode, TaxCodeError, Violation};
