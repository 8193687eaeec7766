//! Centralized path definitions for taxperson
//!
//! taxperson keeps no per-project state. The only file it reads is the
//! user-level configuration:
//!
//! ```text
//! ~/.taxperson/
//! └── config.toml               # Validation policy
//! ```

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".taxperson";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global taxperson directory.
///
/// Returns `~/.taxperson/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.taxperson/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
