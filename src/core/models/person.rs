//! Person model
//!
//! A person is a name, a surname and a validated [`TaxCode`]. The code is
//! checked once, at construction, and can never change afterwards. Name and
//! surname are free-form and may be updated without touching the code.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{TaxCode, TaxCodeError, ValidationPolicy};

/// A single individual identified by their tax code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    /// Given name (no format constraint)
    name: String,

    /// Family name (no format constraint)
    surname: String,

    /// Validated identification code
    tax_code: TaxCode,
}

impl Person {
    /// Create a person, validating `tax_code` with the default policy
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        tax_code: &str,
    ) -> Result<Self, TaxCodeError> {
        Self::with_policy(name, surname, tax_code, ValidationPolicy::default())
    }

    /// Create a person, validating `tax_code` under an explicit policy
    pub fn with_policy(
        name: impl Into<String>,
        surname: impl Into<String>,
        tax_code: &str,
        policy: ValidationPolicy,
    ) -> Result<Self, TaxCodeError> {
        let tax_code = TaxCode::parse_with(tax_code, policy)?;
        Ok(Self::from_parts(name, surname, tax_code))
    }

    /// Create a person from an already validated code
    #[must_use]
    pub fn from_parts(name: impl Into<String>, surname: impl Into<String>, tax_code: TaxCode) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            tax_code,
        }
    }

    /// Given name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the given name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Family name
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Replace the family name
    pub fn set_surname(&mut self, surname: impl Into<String>) {
        self.surname = surname.into();
    }

    /// The identification code, always uppercase
    #[must_use]
    pub const fn tax_code(&self) -> &TaxCode {
        &self.tax_code
    }

    /// Same person with a different given name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    /// Same person with a different family name
    #[must_use]
    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.set_surname(surname);
        self
    }

    /// Whether both people share a given name, ignoring case
    #[must_use]
    pub fn has_same_name(&self, other: &Self) -> bool {
        names_match(&self.name, &other.name)
    }
}

/// Case-insensitive name comparison used by [`Person::has_same_name`]
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NAME: {} SURNAME: {} TAX CODE: {}", self.name, self.surname, self.tax_code)
    }
}
