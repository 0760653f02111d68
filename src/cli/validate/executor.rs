//! Validation execution and result reporting.

use anyhow::{Context, Result};
use colored::Colorize;
use std::time::Duration;

use crate::cli::CliConfig;
use crate::config::ProdmanConfig;
use crate::core::ProdmanError;
use crate::validation::{ValidationOutcome, Validator};

use super::command::{OutputFormat, ValidateCommand};
use super::results::ValidationResults;

impl ValidateCommand {
    /// Execute the validate command with the loaded configuration.
    ///
    /// Validation runs on the blocking thread pool. With `--timeout`, the run
    /// is abandoned once the deadline passes and the command fails.
    ///
    /// # Errors
    ///
    /// Returns the validation error (a [`ProdmanError`]) if the manifest is
    /// invalid, or an error if the run timed out or could not complete.
    pub async fn execute_with_config(self, settings: ProdmanConfig, cli: &CliConfig) -> Result<()> {
        let settings = settings.with_overrides(self.schema.clone(), None);
        let validator = Validator::from_config(&settings);
        let file = self.file.display().to_string();
        let schema = validator.schema().to_string();

        tracing::debug!("Validating {} against schema '{}'", file, schema);
        let handle = validator.check_file_in_background(self.file.clone());

        let joined = match self.timeout {
            Some(secs) => match tokio::time::timeout(Duration::from_secs(secs), handle).await {
                Ok(joined) => joined,
                Err(_) => {
                    let message = format!("Validation of {file} timed out after {secs}s");
                    self.report_aborted(&file, &schema, &message, cli)?;
                    return Err(anyhow::anyhow!(message));
                }
            },
            None => handle.await,
        };

        let result = joined.context("Validation task failed")?;
        match result {
            Ok(outcome) => self.report_success(&file, outcome, cli),
            Err(error) => {
                self.report_failure(&file, &schema, &error, cli)?;
                Err(error.into())
            }
        }
    }

    fn report_success(&self, file: &str, outcome: ValidationOutcome, cli: &CliConfig) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let results = ValidationResults::passed(file.to_string(), outcome);
                println!("{}", serde_json::to_string_pretty(&results)?);
            }
            OutputFormat::Text => {
                if cli.quiet {
                    return Ok(());
                }
                println!("{} {} is valid (schema: {})", "✓".green(), file, outcome.schema);
                if cli.verbose {
                    for category in &outcome.categories {
                        println!("  {} {}", "✓".green(), category);
                    }
                    if !outcome.hosted_repositories.is_empty() {
                        println!(
                            "  hosted repositories: {}",
                            outcome.hosted_repositories.iter().cloned().collect::<Vec<_>>().join(", ")
                        );
                    }
                }
            }
        }
        Ok(())
    }

    fn report_failure(
        &self,
        file: &str,
        schema: &str,
        error: &ProdmanError,
        cli: &CliConfig,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let results = ValidationResults::failed(file.to_string(), schema.to_string(), error);
                println!("{}", serde_json::to_string_pretty(&results)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{} {} is invalid", "✗".red(), file);
                }
            }
        }
        Ok(())
    }

    fn report_aborted(&self, file: &str, schema: &str, message: &str, cli: &CliConfig) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let results =
                    ValidationResults::aborted(file.to_string(), schema.to_string(), message.to_string());
                println!("{}", serde_json::to_string_pretty(&results)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{} {}", "✗".red(), message);
                }
            }
        }
        Ok(())
    }
}
