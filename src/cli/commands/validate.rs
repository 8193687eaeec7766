//! Validate tax codes

use taxperson::core::models::{TaxCode, ValidationPolicy};
use taxperson::output::{CodeResult, OutputMode, ValidationReport};

/// Validate each code and report; exits with status 1 if any is invalid
pub fn validate(codes: &[String], policy: ValidationPolicy, mode: OutputMode) -> anyhow::Result<()> {
    let results = codes
        .iter()
        .map(|raw| CodeResult::from_outcome(raw, &TaxCode::parse_with(raw, policy)))
        .collect();

    let report = ValidationReport::new(policy, results);
    report.render(mode);

    if !report.all_valid {
        std::process::exit(1);
    }

    Ok(())
}
