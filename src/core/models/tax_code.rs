//! Tax code parsing and validation
//!
//! A [`TaxCode`] is a 16-character identification code laid out as:
//! - positions 0..6: uppercase letters
//! - positions 6..8: digits
//! - positions 8..16: uppercase letters or digits
//!
//! No whitespace is allowed anywhere. The stored form is always uppercase.
//! Only ASCII `a-z` is ever uppercased, so reported positions and lengths
//! refer to the raw input.
//! There is no checksum verification, only the positional shape.
//!
//! # Examples
//!
//! ```
//! use taxperson::core::models::{TaxCode, ValidationPolicy};
//!
//! let code = TaxCode::parse("RSSMRA85M01H501Z").unwrap();
//! assert_eq!(code.as_str(), "RSSMRA85M01H501Z");
//!
//! // Lowercase input is uppercased before matching by default
//! let code = TaxCode::parse("rssmra85m01h501z").unwrap();
//! assert_eq!(code.as_str(), "RSSMRA85M01H501Z");
//!
//! // ...but rejected when validating the raw input first
//! assert!(TaxCode::parse_with("rssmra85m01h501z", ValidationPolicy::Strict).is_err());
//! ```

use std::fmt;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ValidationPolicy;

/// Anchored pattern every stored tax code satisfies
pub const TAX_CODE_PATTERN: &str = r"^[A-Z]{6}[0-9]{2}[A-Z0-9]{8}$";

static TAX_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(TAX_CODE_PATTERN).expect("TAX_CODE_PATTERN is a valid regex"));

/// Errors produced when a raw code cannot become a [`TaxCode`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxCodeError {
    /// The code is empty or does not match the positional pattern
    #[error("invalid identification code {code:?}: {violation}")]
    InvalidIdentificationCode {
        /// The raw input as supplied by the caller
        code: String,
        /// First problem found in the input
        violation: Violation,
    },
}

impl TaxCodeError {
    /// The first problem found in the rejected input
    #[must_use]
    pub const fn violation(&self) -> &Violation {
        match self {
            Self::InvalidIdentificationCode { violation, .. } => violation,
        }
    }

    /// The rejected input
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidIdentificationCode { code, .. } => code,
        }
    }
}

/// Why a code was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// No characters at all
    #[error("code is empty")]
    Empty,

    /// Whitespace somewhere in the code
    #[error("whitespace at position {position}")]
    Whitespace {
        /// 0-based character index
        position: usize,
    },

    /// Wrong number of characters
    #[error("expected {expected} characters, found {actual}")]
    Length {
        /// Always [`TaxCode::LENGTH`]
        expected: usize,
        /// Characters in the input
        actual: usize,
    },

    /// A character of the wrong class for its position
    #[error("expected {expected} at position {position}, found '{found}'")]
    Character {
        /// 0-based character index
        position: usize,
        /// What the pattern wants there
        expected: CharClass,
        /// What was there instead
        found: char,
    },
}

/// Character class required at a given position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    /// `A-Z`
    Letter,
    /// `0-9`
    Digit,
    /// `A-Z` or `0-9`
    Alphanumeric,
}

impl CharClass {
    /// Class the pattern requires at `position`
    #[must_use]
    pub const fn at(position: usize) -> Self {
        match position {
            0..6 => Self::Letter,
            6..8 => Self::Digit,
            _ => Self::Alphanumeric,
        }
    }

    /// Whether `c` belongs to this class
    #[must_use]
    pub const fn accepts(self, c: char) -> bool {
        match self {
            Self::Letter => c.is_ascii_uppercase(),
            Self::Digit => c.is_ascii_digit(),
            Self::Alphanumeric => c.is_ascii_uppercase() || c.is_ascii_digit(),
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter => write!(f, "an uppercase letter"),
            Self::Digit => write!(f, "a digit"),
            Self::Alphanumeric => write!(f, "an uppercase letter or digit"),
        }
    }
}

/// A validated, uppercase identification code
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaxCode(String);

impl TaxCode {
    /// Number of characters in every tax code
    pub const LENGTH: usize = 16;

    /// Parse a raw code with the default [`ValidationPolicy`]
    pub fn parse(raw: &str) -> Result<Self, TaxCodeError> {
        Self::parse_with(raw, ValidationPolicy::default())
    }

    /// Parse a raw code, applying `policy` to decide when to uppercase
    pub fn parse_with(raw: &str, policy: ValidationPolicy) -> Result<Self, TaxCodeError> {
        let checked = match policy {
            ValidationPolicy::Normalize => {
                let upper = raw.to_ascii_uppercase();
                validate(&upper).map(|()| upper)
            },
            ValidationPolicy::Strict => validate(raw).map(|()| raw.to_ascii_uppercase()),
        };

        match checked {
            Ok(code) => {
                debug!("accepted tax code {code} ({policy})");
                Ok(Self(code))
            },
            Err(violation) => {
                debug!("rejected tax code {raw:?} ({policy}): {violation}");
                Err(TaxCodeError::InvalidIdentificationCode {
                    code: raw.to_string(),
                    violation,
                })
            },
        }
    }

    /// Whether `raw` would be accepted under `policy`
    #[must_use]
    pub fn is_valid(raw: &str, policy: ValidationPolicy) -> bool {
        Self::parse_with(raw, policy).is_ok()
    }

    /// The stored uppercase code
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to the owned uppercase string
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Check `candidate` against the pattern exactly as given
fn validate(candidate: &str) -> Result<(), Violation> {
    if candidate.is_empty() {
        return Err(Violation::Empty);
    }

    if let Some(position) = candidate.chars().position(char::is_whitespace) {
        return Err(Violation::Whitespace { position });
    }

    let actual = candidate.chars().count();
    if actual != TaxCode::LENGTH {
        return Err(Violation::Length {
            expected: TaxCode::LENGTH,
            actual,
        });
    }

    if TAX_CODE_RE.is_match(candidate) {
        return Ok(());
    }

    // Length is right, so some character must be in the wrong class
    let (position, found) = candidate
        .chars()
        .enumerate()
        .find(|&(position, c)| !CharClass::at(position).accepts(c))
        .unwrap_or((0, candidate.chars().next().unwrap_or_default()));

    Err(Violation::Character {
        position,
        expected: CharClass::at(position),
        found,
    })
}

impl fmt::Display for TaxCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaxCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for TaxCode {
    type Err = TaxCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TaxCode {
    type Error = TaxCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TaxCode> for String {
    fn from(code: TaxCode) -> Self {
        code.0
    }
}
