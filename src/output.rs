//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::{Person, TaxCodeError, ValidationPolicy};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of validating one or more codes
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Policy the codes were checked under
    pub policy: ValidationPolicy,
    /// Whether every code was accepted
    pub all_valid: bool,
    /// Per-code outcome, in input order
    pub results: Vec<CodeResult>,
}

/// Outcome for a single code
#[derive(Debug, Serialize)]
pub struct CodeResult {
    /// The code as supplied
    pub input: String,
    /// Whether it was accepted
    pub valid: bool,
    /// Normalized form, when accepted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    /// Reason for rejection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CodeResult {
    /// Build from a parse outcome
    #[must_use]
    pub fn from_outcome<T: AsRef<str>>(input: &str, outcome: &Result<T, TaxCodeError>) -> Self {
        match outcome {
            Ok(code) => Self {
                input: input.to_string(),
                valid: true,
                tax_code: Some(code.as_ref().to_string()),
                reason: None,
            },
            Err(err) => Self {
                input: input.to_string(),
                valid: false,
                tax_code: None,
                reason: Some(err.violation().to_string()),
            },
        }
    }
}

/// A person as shown by the CLI
#[derive(Debug, Serialize)]
pub struct PersonResult {
    /// Given name
    pub name: String,
    /// Family name
    pub surname: String,
    /// Uppercase tax code
    pub tax_code: String,
    /// `Display` form of the person
    #[serde(skip)]
    pub display: String,
}

impl From<&Person> for PersonResult {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name().to_string(),
            surname: person.surname().to_string(),
            tax_code: person.tax_code().to_string(),
            display: person.to_string(),
        }
    }
}

/// Result of comparing two names
#[derive(Debug, Serialize)]
pub struct ComparisonResult {
    /// First name compared
    pub left: String,
    /// Second name compared
    pub right: String,
    /// Whether they match ignoring case
    pub same_name: bool,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl ValidationReport {
    /// Collect per-code results into a report
    #[must_use]
    pub fn new(policy: ValidationPolicy, results: Vec<CodeResult>) -> Self {
        let all_valid = results.iter().all(|r| r.valid);
        Self {
            policy,
            all_valid,
            results,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.results.is_empty() {
            println!("No codes given.");
            return;
        }

        for r in &self.results {
            match (&r.tax_code, &r.reason) {
                (Some(code), _) => println!("VALID    {code}"),
                (None, Some(reason)) => println!("INVALID  {:?}: {reason}", r.input),
                (None, None) => println!("INVALID  {:?}", r.input),
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl PersonResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.display),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl ComparisonResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.same_name),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
