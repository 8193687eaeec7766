//! Validation policy
//!
//! Decides whether a raw tax code is uppercased before or after it is matched
//! against the positional pattern.

use serde::{Deserialize, Serialize};

/// Order in which normalization and validation are applied to a raw code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Uppercase first, then validate (accepts lowercase input)
    #[default]
    Normalize,
    /// Validate the raw input, then uppercase (rejects lowercase input)
    Strict,
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normalize => write!(f, "normalize"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normalize" => Ok(Self::Normalize),
            "strict" => Ok(Self::Strict),
            _ => Err(format!("Invalid policy: {s}. Use: normalize, strict")),
        }
    }
}
