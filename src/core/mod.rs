//! Core domain logic for taxperson
//!
//! Pure data structures with no I/O dependencies.
//!
//! - `models/` - Domain types (Person, TaxCode, ValidationPolicy)

pub mod models;
