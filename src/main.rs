//! prodman CLI entry point
//!
//! Parses arguments, runs the selected command and turns failures into a
//! readable error with details and a suggestion before exiting with status 1.
//!
//! Commands:
//! - `validate` - Validate a product manifest and the bundle it references
//! - `schemas` - List the available schemas or print one

use anyhow::Result;
use clap::Parser;
use prodman::cli;
use prodman::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the command
    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
