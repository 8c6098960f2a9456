#![deny(missing_docs)]

//! # Validate Command
//!
//! Reads a document and reports every structural issue found.

use crate::error::{CliError, CliResult};
use oas_core::{document_uri, read_document, validate_at, ValidationIssue};
use std::path::{Path, PathBuf};

/// Arguments for the validate command.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Document to check (`.json`, `.yaml` or `.yml`).
    pub file: PathBuf,
}

/// Issues found in the document at `path`.
pub fn check(path: &Path) -> CliResult<Vec<ValidationIssue>> {
    let doc = read_document(path)?;
    Ok(validate_at(&doc, document_uri(path).as_deref()))
}

/// Prints `issues` and turns a non-empty list into an error.
pub(crate) fn report(source: &str, issues: &[ValidationIssue]) -> CliResult<()> {
    if issues.is_empty() {
        println!("{}: valid", source);
        return Ok(());
    }
    for issue in issues {
        println!("{}: {}", source, issue);
    }
    Err(CliError::Invalid(issues.len()))
}

/// Executes the validate command.
pub fn execute(args: &ValidateArgs) -> CliResult<()> {
    let issues = check(&args.file)?;
    report(&args.file.display().to_string(), &issues)
}
