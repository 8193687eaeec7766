//! Write a default config file

use std::path::Path;

use taxperson::config::Config;
use taxperson::core::models::ValidationPolicy;
use taxperson::output::{OperationResult, OutputMode};

/// Create the config file at `path`
pub fn init(path: &Path, force: bool, strict: bool, mode: OutputMode) -> anyhow::Result<()> {
    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists). Use --force to overwrite.",
                path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    let policy = if strict {
        ValidationPolicy::Strict
    } else {
        ValidationPolicy::default()
    };
    Config::default().with_policy(policy).save_to(path)?;

    OperationResult {
        success: true,
        message: format!("Created {} (policy: {policy})", path.display()),
    }
    .render(mode);
    Ok(())
}
