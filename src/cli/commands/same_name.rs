//! Compare two names

use taxperson::core::models::names_match;
use taxperson::output::{ComparisonResult, OutputMode};

/// Compare two names the way `Person::has_same_name` does
pub fn same_name(left: &str, right: &str, mode: OutputMode) -> anyhow::Result<()> {
    let result = ComparisonResult {
        left: left.to_string(),
        right: right.to_string(),
        same_name: names_match(left, right),
    };
    result.render(mode);
    Ok(())
}
