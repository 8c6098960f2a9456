//! # Error Handling
//!
//! Provides the unified `OasError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Wrapped library errors convert through `From`; the domain variants must be
/// created explicitly. String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum OasError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// Wrapper for YAML (de)serialization errors.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// The factory was asked for something that is not a concrete model kind.
    #[from(ignore)]
    #[display("'{_0}' is not a constructible model type")]
    NotConstructible(String),

    /// A required argument was absent or empty.
    #[from(ignore)]
    #[display("Missing required argument: {_0}")]
    MissingArgument(String),

    /// A `$ref` did not point at an existing component.
    #[from(ignore)]
    #[display("Unresolved reference: {_0}")]
    UnresolvedReference(String),

    /// A `$ref` chain loops back onto itself.
    #[from(ignore)]
    #[display("Circular reference: {_0}")]
    CircularReference(String),

    /// Invalid `mp.openapi.*` configuration.
    #[from(ignore)]
    #[display("Configuration Error: {_0}")]
    Config(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

impl std::error::Error for OasError {}

/// Helper type alias for Result using OasError.
pub type OasResult<T> = Result<T, OasError>;
