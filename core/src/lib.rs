#![deny(missing_docs)]

//! # OAS Core
//!
//! Typed OpenAPI 3.x model, model factory and document assembly toolkit.

/// Shared error types.
pub mod error;

/// OpenAPI model types.
pub mod models;

/// Model factory.
pub mod factory;

/// `$ref` resolution.
pub mod refs;

/// Model filters.
pub mod filter;

/// Model readers.
pub mod reader;

/// Document merging.
pub mod merge;

/// Scan selection.
pub mod scan;

/// `mp.openapi.*` configuration.
pub mod config;

/// Document assembly pipeline.
pub mod pipeline;

/// JSON / YAML document I/O.
pub mod document;

/// Structural validation.
pub mod validation;

pub use config::{InfoConfig, OasConfig};
pub use document::{
    document_uri, locate_static_file, parse_document, read_document, to_string, write_document,
    Format,
};
pub use error::{OasError, OasResult};
pub use factory::{Constructible, ModelKind, ModelObject, OasFactory};
pub use filter::OasFilter;
pub use merge::{merge, merge_models};
pub use pipeline::{ExtensionRegistry, OpenApiProcessor};
pub use reader::{OasModelReader, StaticModelReader};
pub use scan::{ScanConfig, ScanPattern};
pub use validation::{validate, validate_at, ValidationIssue};
