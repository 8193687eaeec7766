//! CLI definitions and entry point

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use super::commands;
use taxperson::config::Config;
use taxperson::core::models::ValidationPolicy;
use taxperson::output::OutputMode;

/// taxperson - Validated people keyed by tax identification code
#[derive(Parser, Debug)]
#[command(
    name = "taxperson",
    version,
    about = "Validate tax identification codes and build person records",
    long_about = "Validate 16-character tax identification codes and build person records.\n\n\
                  A code is six letters, two digits and eight letters or digits.\n\
                  Lowercase input is uppercased before validation unless --strict is set."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Validate codes as given, before uppercasing (rejects lowercase)
    #[arg(long, global = true)]
    pub strict: bool,

    /// Path to config file (default: ~/.taxperson/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one or more tax codes
    Validate {
        /// Codes to validate
        #[arg(required = true)]
        codes: Vec<String>,
    },

    /// Build a person and print it
    Show {
        /// Given name
        #[arg(short, long)]
        name: String,

        /// Family name
        #[arg(short, long)]
        surname: String,

        /// Tax identification code
        #[arg(short, long)]
        code: String,
    },

    /// Compare two names ignoring case
    SameName {
        /// First name
        left: String,

        /// Second name
        right: String,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Validate { codes }) => {
            let policy = resolve_policy(config_path, cli.strict)?;
            commands::validate(&codes, policy, output_mode)
        },
        Some(Command::Show {
            name,
            surname,
            code,
        }) => {
            let policy = resolve_policy(config_path, cli.strict)?;
            commands::show(&name, &surname, &code, policy, output_mode)
        },
        Some(Command::SameName { left, right }) => commands::same_name(&left, &right, output_mode),
        Some(Command::Init { force }) => {
            let path = config_path.map_or_else(Config::config_path, Path::to_path_buf);
            commands::init(&path, force, cli.strict, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("taxperson v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("taxperson v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'taxperson --help' for usage");
                println!("Run 'taxperson validate <CODE>' to check a code");
            }
            Ok(())
        },
    }
}

/// Policy from the config file, overridden by `--strict`
///
/// An explicit `--config` must load cleanly; the default file is best effort.
fn resolve_policy(config_path: Option<&Path>, strict: bool) -> anyhow::Result<ValidationPolicy> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if strict {
        return Ok(ValidationPolicy::Strict);
    }
    Ok(config.policy())
}
