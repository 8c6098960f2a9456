#![deny(missing_docs)]

//! # Assemble Command
//!
//! Builds the final document from the available model sources:
//!
//! 1. **Static**: `--static` files, or the `openapi.{yaml,yml,json}` found in `--dir`.
//! 2. **Scanned**: an optional document produced by an external scanner.
//! 3. **Config**: `mp.openapi.*` settings from `--config`, else the environment.
//!
//! The result is validated; issues are logged as warnings but do not fail the
//! command.

use crate::error::CliResult;
use oas_core::models::OpenApi;
use oas_core::{
    locate_static_file, read_document, to_string, validate, Format, OasConfig, OpenApiProcessor,
};
use std::fs;
use std::path::PathBuf;

/// Arguments for the assemble command.
#[derive(clap::Args, Debug, Clone)]
pub struct AssembleArgs {
    /// Static documents, merged in the order given.
    #[clap(long = "static", value_name = "FILE")]
    pub static_files: Vec<PathBuf>,

    /// Directory searched for a static document when no `--static` is given.
    #[clap(long, default_value = ".")]
    pub dir: PathBuf,

    /// Document produced by an external scanner.
    #[clap(long, value_name = "FILE")]
    pub scanned: Option<PathBuf>,

    /// Properties file with `mp.openapi.*` settings.
    #[clap(long, env = "OAS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (`json` or `yaml`); defaults to the output extension, else YAML.
    #[clap(long)]
    pub format: Option<Format>,

    /// Output file; the document goes to stdout when omitted.
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

/// Runs every assembly stage and returns the document.
pub fn assemble(args: &AssembleArgs) -> CliResult<OpenApi> {
    let config = match &args.config {
        Some(path) => OasConfig::from_file(path)?,
        None => OasConfig::from_env()?,
    };
    let mut processor = OpenApiProcessor::new(config);

    if args.static_files.is_empty() {
        match locate_static_file(&args.dir) {
            Some(path) => {
                tracing::info!(path = %path.display(), "using static document");
                processor.add_static_file(path)?;
            }
            None => tracing::debug!(dir = %args.dir.display(), "no static document found"),
        }
    }
    for path in &args.static_files {
        processor.add_static_file(path)?;
    }
    if let Some(path) = &args.scanned {
        processor.add_scanned_model(read_document(path)?);
    }

    let doc = processor.process()?;
    for issue in validate(&doc) {
        tracing::warn!("{}", issue);
    }
    Ok(doc)
}

/// Executes the assemble command.
pub fn execute(args: &AssembleArgs) -> CliResult<()> {
    let doc = assemble(args)?;
    match &args.output {
        Some(path) => {
            let format = args.format.unwrap_or_else(|| Format::from_path(path));
            fs::write(path, to_string(&doc, format)?)?;
            tracing::info!(path = %path.display(), "wrote document");
        }
        None => println!("{}", to_string(&doc, args.format.unwrap_or_default())?),
    }
    Ok(())
}
