//! # Model Readers
//!
//! Programmatic sources of an OpenAPI model, merged into the assembled
//! document after static files and scanned output.

use crate::models::OpenApi;

/// Builds a (possibly partial) OpenAPI model in code.
pub trait OasModelReader {
    /// The model to merge into the document being assembled.
    fn build_model(&self) -> OpenApi;
}

impl<F> OasModelReader for F
where
    F: Fn() -> OpenApi,
{
    fn build_model(&self) -> OpenApi {
        self()
    }
}

/// A reader that always hands out a copy of a fixed model.
#[derive(Debug, Clone, Default)]
pub struct StaticModelReader {
    model: OpenApi,
}

impl StaticModelReader {
    /// Wraps `model`.
    pub fn new(model: OpenApi) -> Self {
        Self { model }
    }
}

impl OasModelReader for StaticModelReader {
    fn build_model(&self) -> OpenApi {
        self.model.clone()
    }
}
