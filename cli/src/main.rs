#![deny(missing_docs)]

//! # OAS CLI
//!
//! Command Line Interface for assembling and checking OpenAPI documents.
//!
//! Supported Commands:
//! - `assemble`: Static files + scanned model + `mp.openapi.*` config -> document.
//! - `validate`: Structural checks on a document file.
//! - `fetch`: Downloads a served `/openapi` document and validates it.
//! - `create`: Prints an empty instance of a model kind.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;

mod assemble;
mod create;
mod error;
#[cfg(feature = "client")]
mod fetch;
mod validate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI document toolkit")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assembles a document from static files, a scanned model and configuration.
    Assemble(assemble::AssembleArgs),
    /// Validates a document file; exits non-zero when issues are found.
    Validate(validate::ValidateArgs),
    /// Fetches a served document and validates it.
    #[cfg(feature = "client")]
    Fetch(fetch::FetchArgs),
    /// Prints an empty instance of a model kind.
    Create(create::CreateArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Assemble(args) => assemble::execute(args)?,
        Commands::Validate(args) => validate::execute(args)?,
        #[cfg(feature = "client")]
        Commands::Fetch(args) => fetch::execute(args)?,
        Commands::Create(args) => create::execute(args)?,
    }

    Ok(())
}
