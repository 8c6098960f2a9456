#![deny(missing_docs)]

//! # Create Command
//!
//! Prints an empty instance of a model kind, as produced by the factory.

use crate::error::CliResult;
use oas_core::OasFactory;

/// Arguments for the create command.
#[derive(clap::Args, Debug, Clone)]
pub struct CreateArgs {
    /// Model kind name, e.g. `Operation` or `SecurityScheme`.
    pub kind: String,
}

/// Renders the empty instance as pretty JSON.
pub(crate) fn render(kind: &str) -> CliResult<String> {
    let object = OasFactory::create_object(kind)?;
    Ok(serde_json::to_string_pretty(&object)?)
}

/// Executes the create command.
pub fn execute(args: &CreateArgs) -> CliResult<()> {
    println!("{}", render(&args.kind)?);
    Ok(())
}
