//! List available schemas or print one.
//!
//! Schemas come from the binary unless `schema_dir` is configured, in which
//! case every `<name>.yaml` file in that directory is a schema.
//!
//! ```bash
//! prodman schemas
//! prodman schemas --show product-manifest
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::cli::CliConfig;
use crate::config::ProdmanConfig;
use crate::validation::Validator;

/// Command to list or print schema assets.
#[derive(Args)]
pub struct SchemasCommand {
    /// Print the named schema instead of listing
    #[arg(long, value_name = "NAME")]
    pub show: Option<String>,
}

impl SchemasCommand {
    /// Execute the schemas command with the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::core::ProdmanError::SchemaAsset`] if `--show` names a
    /// schema the provider does not have.
    pub fn execute_with_config(self, settings: ProdmanConfig, cli: &CliConfig) -> Result<()> {
        let validator = Validator::from_config(&settings);
        let assets = validator.assets();

        if let Some(name) = &self.show {
            let bytes = assets.read_asset(name)?;
            print!("{}", String::from_utf8_lossy(&bytes));
            return Ok(());
        }

        let names = assets.asset_names();
        if names.is_empty() {
            if !cli.quiet {
                println!("No schemas available");
            }
            return Ok(());
        }

        for name in names {
            if name == validator.schema() {
                println!("{} {}", name, "(default)".green());
            } else {
                println!("{name}");
            }
        }
        Ok(())
    }
}
