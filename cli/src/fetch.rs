#![deny(missing_docs)]

//! # Fetch Command
//!
//! Downloads the document a running application serves (by default at
//! `/openapi`), validates it and optionally stores it.

use crate::error::{CliError, CliResult};
use crate::validate::report;
use oas_core::models::OpenApi;
use oas_core::{parse_document, to_string, validate_at, Format};
use std::fs;
use std::path::PathBuf;

/// Arguments for the fetch command.
#[derive(clap::Args, Debug, Clone)]
pub struct FetchArgs {
    /// Endpoint serving the document.
    #[clap(long, default_value = "http://localhost:8080/openapi")]
    pub url: String,

    /// Stores the fetched document at this path.
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Format of the stored document; defaults to the output extension.
    #[clap(long)]
    pub format: Option<Format>,
}

/// Parses a response body, which may be either JSON or YAML.
pub(crate) fn parse_body(body: &str) -> CliResult<OpenApi> {
    let format = if body.trim_start().starts_with('{') {
        Format::Json
    } else {
        Format::Yaml
    };
    Ok(parse_document(body, format)?)
}

fn download(url: &str) -> CliResult<String> {
    tracing::info!(url, "fetching document");
    let mut response = ureq::get(url)
        .header("Accept", "application/yaml, application/json")
        .call()
        .map_err(|e| CliError::Fetch(format!("{}: {}", url, e)))?;
    response
        .body_mut()
        .read_to_string()
        .map_err(|e| CliError::Fetch(format!("{}: {}", url, e)))
}

/// Executes the fetch command.
pub fn execute(args: &FetchArgs) -> CliResult<()> {
    let doc = parse_body(&download(&args.url)?)?;

    if let Some(path) = &args.output {
        let format = args.format.unwrap_or_else(|| Format::from_path(path));
        fs::write(path, to_string(&doc, format)?)?;
        tracing::info!(path = %path.display(), "wrote document");
    }

    report(&args.url, &validate_at(&doc, Some(&args.url)))
}
