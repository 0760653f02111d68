//! Command structure and output format definitions for validation.

use clap::Args;
use std::path::PathBuf;

/// Command to validate a product manifest.
///
/// # Examples
///
/// ```rust,ignore
/// use prodman::cli::validate::{OutputFormat, ValidateCommand};
///
/// let cmd = ValidateCommand {
///     file: "manifest.yaml".into(),
///     schema: None,
///     format: OutputFormat::Json,
///     timeout: Some(30),
/// };
/// ```
#[derive(Args)]
pub struct ValidateCommand {
    /// Manifest file to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Schema to validate against (default: from config, else product-manifest)
    #[arg(long, value_name = "NAME")]
    pub schema: Option<String>,

    /// Output format: text or json
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Abandon validation after this many seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

/// Output format options for validation results.
#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output with colors.
    Text,

    /// Structured JSON output for automation.
    Json,
}
