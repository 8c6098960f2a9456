#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use oas_core::OasError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Errors raised by the core library.
    #[display("{}", _0)]
    Core(OasError),

    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// JSON rendering error.
    #[display("JSON Error: {}", _0)]
    Json(serde_json::Error),

    /// Fetching a served document failed.
    #[from(ignore)]
    #[display("Fetch failed: {}", _0)]
    Fetch(String),

    /// The checked document has validation issues.
    #[from(ignore)]
    #[display("Document has {} validation issue(s)", _0)]
    Invalid(usize),
}

impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
