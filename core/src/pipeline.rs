#![deny(missing_docs)]

//! # Document Assembly
//!
//! [`OpenApiProcessor`] combines every model source into the final document:
//!
//! 1. Static documents, in the order they were added.
//! 2. Scanned models, unless scanning is disabled.
//! 3. The model reader (explicit, else the one named by
//!    `mp.openapi.model.reader`).
//! 4. `mp.openapi.schema.*` definitions.
//! 5. `mp.openapi.info.*` overrides.
//! 6. Server overrides for the document, paths and operations.
//! 7. Filters (the configured `mp.openapi.filter` first, then explicit ones).
//! 8. Defaults for `openapi`, `info` and `paths`.
//!
//! Later sources win over earlier ones, so a reader overrides scanned output
//! and a filter sees (and may rewrite) everything.

use crate::config::{servers_from_urls, OasConfig};
use crate::document::read_document;
use crate::error::{OasError, OasResult};
use crate::filter::{self, OasFilter};
use crate::merge::merge;
use crate::models::{Info, OpenApi, Paths, DEFAULT_OPENAPI_VERSION};
use crate::reader::OasModelReader;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Title used when no source provides one.
pub const DEFAULT_TITLE: &str = "Generated API";
/// Version used when no source provides one.
pub const DEFAULT_VERSION: &str = "1.0";

/// Named filters and model readers that configuration can refer to.
#[derive(Default)]
pub struct ExtensionRegistry {
    filters: IndexMap<String, Box<dyn OasFilter>>,
    readers: IndexMap<String, Box<dyn OasModelReader>>,
}

impl ExtensionRegistry {
    /// Registers a filter under `name`, replacing any previous one.
    pub fn register_filter(
        &mut self,
        name: impl Into<String>,
        filter: impl OasFilter + 'static,
    ) -> &mut Self {
        self.filters.insert(name.into(), Box::new(filter));
        self
    }

    /// Registers a model reader under `name`, replacing any previous one.
    pub fn register_reader(
        &mut self,
        name: impl Into<String>,
        reader: impl OasModelReader + 'static,
    ) -> &mut Self {
        self.readers.insert(name.into(), Box::new(reader));
        self
    }

    /// Whether a filter is registered under `name`.
    pub fn has_filter(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Whether a reader is registered under `name`.
    pub fn has_reader(&self, name: &str) -> bool {
        self.readers.contains_key(name)
    }

    fn filter_mut(&mut self, name: &str) -> OasResult<&mut (dyn OasFilter + 'static)> {
        self.filters
            .get_mut(name)
            .map(|filter| filter.as_mut())
            .ok_or_else(|| OasError::Config(format!("no filter registered as '{}'", name)))
    }

    fn reader(&self, name: &str) -> OasResult<&dyn OasModelReader> {
        self.readers
            .get(name)
            .map(|reader| reader.as_ref())
            .ok_or_else(|| OasError::Config(format!("no model reader registered as '{}'", name)))
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionRegistry")
            .field("filters", &self.filters.keys().collect::<Vec<_>>())
            .field("readers", &self.readers.keys().collect::<Vec<_>>())
            .finish()
    }
}

struct ScannedModel {
    type_path: Option<String>,
    model: OpenApi,
}

/// Builds the final document from static files, scanned output, a model
/// reader and filters.
pub struct OpenApiProcessor {
    config: OasConfig,
    registry: ExtensionRegistry,
    static_documents: Vec<OpenApi>,
    scanned: Vec<ScannedModel>,
    reader: Option<Box<dyn OasModelReader>>,
    filters: Vec<Box<dyn OasFilter>>,
}

impl OpenApiProcessor {
    /// A processor driven by `config`, with an empty registry.
    pub fn new(config: OasConfig) -> Self {
        Self {
            config,
            registry: ExtensionRegistry::default(),
            static_documents: Vec::new(),
            scanned: Vec::new(),
            reader: None,
            filters: Vec::new(),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &OasConfig {
        &self.config
    }

    /// Replaces the registry used to look up configured filters and readers.
    #[must_use]
    pub fn with_registry(mut self, registry: ExtensionRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The registry, for registering extensions in place.
    pub fn registry_mut(&mut self) -> &mut ExtensionRegistry {
        &mut self.registry
    }

    /// Adds a static document; later ones override earlier ones.
    pub fn add_static_document(&mut self, doc: OpenApi) -> &mut Self {
        self.static_documents.push(doc);
        self
    }

    /// Reads and adds a static document file.
    pub fn add_static_file(&mut self, path: impl AsRef<Path>) -> OasResult<&mut Self> {
        let doc = read_document(path)?;
        Ok(self.add_static_document(doc))
    }

    /// Adds a model produced by a scanner.
    pub fn add_scanned_model(&mut self, model: OpenApi) -> &mut Self {
        self.scanned.push(ScannedModel {
            type_path: None,
            model,
        });
        self
    }

    /// Adds the model a scanner produced for one type. It is only merged
    /// when the scan configuration selects `type_path`.
    pub fn add_scanned_type(&mut self, type_path: impl Into<String>, model: OpenApi) -> &mut Self {
        self.scanned.push(ScannedModel {
            type_path: Some(type_path.into()),
            model,
        });
        self
    }

    /// Sets the model reader, taking precedence over `mp.openapi.model.reader`.
    pub fn set_model_reader(&mut self, reader: impl OasModelReader + 'static) -> &mut Self {
        self.reader = Some(Box::new(reader));
        self
    }

    /// Appends a filter; filters run in the order they were added, after the
    /// configured one.
    pub fn add_filter(&mut self, filter: impl OasFilter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Runs every stage and returns the assembled document.
    ///
    /// # Errors
    ///
    /// * [`OasError::Config`] when a configured filter or reader is not
    ///   registered.
    /// * Serialization errors when the merged sources do not form a valid
    ///   model.
    pub fn process(&mut self) -> OasResult<OpenApi> {
        let mut merged = Value::Object(Default::default());

        for doc in &self.static_documents {
            merge(&mut merged, serde_json::to_value(doc)?);
        }
        tracing::debug!(count = self.static_documents.len(), "merged static documents");

        if self.config.scan.disable {
            tracing::info!("scanning disabled, skipping scanned models");
        } else {
            for scanned in &self.scanned {
                if let Some(type_path) = &scanned.type_path {
                    if !self.config.scan.should_scan(type_path) {
                        tracing::debug!(type_path = %type_path, "type excluded from scan");
                        continue;
                    }
                }
                merge(&mut merged, serde_json::to_value(&scanned.model)?);
            }
        }

        if let Some(model) = self.reader_model()? {
            merge(&mut merged, serde_json::to_value(&model)?);
            tracing::debug!("merged model reader output");
        }

        let mut doc: OpenApi = serde_json::from_value(merged)?;

        for (name, schema) in &self.config.schemas {
            doc.components_mut().add_schema(name.clone(), schema.clone());
        }

        if !self.config.info.is_empty() {
            let mut info = doc.info.take().unwrap_or_default();
            self.config.info.apply(&mut info);
            doc.info = Some(info);
        }

        self.apply_server_overrides(&mut doc);
        self.run_filters(&mut doc)?;
        fill_defaults(&mut doc);

        tracing::info!(
            paths = doc.paths().map_or(0, Paths::len),
            "assembled OpenAPI document"
        );
        Ok(doc)
    }

    fn reader_model(&self) -> OasResult<Option<OpenApi>> {
        if let Some(reader) = &self.reader {
            return Ok(Some(reader.build_model()));
        }
        match &self.config.model_reader {
            Some(name) => Ok(Some(self.registry.reader(name)?.build_model())),
            None => Ok(None),
        }
    }

    fn apply_server_overrides(&self, doc: &mut OpenApi) {
        if !self.config.servers.is_empty() {
            doc.servers = Some(servers_from_urls(&self.config.servers));
        }
        let Some(paths) = doc.paths.as_mut() else {
            return;
        };
        for (path, item) in paths.entries.iter_mut() {
            if let Some(urls) = self.config.servers_for_path(path) {
                item.servers = Some(servers_from_urls(urls));
            }
            for operation in item.operations_mut() {
                let urls = operation
                    .operation_id()
                    .and_then(|id| self.config.servers_for_operation(id));
                if let Some(urls) = urls {
                    operation.servers = Some(servers_from_urls(urls));
                }
            }
        }
    }

    fn run_filters(&mut self, doc: &mut OpenApi) -> OasResult<()> {
        if let Some(name) = self.config.filter.clone() {
            tracing::debug!(filter = %name, "running configured filter");
            filter::apply(self.registry.filter_mut(&name)?, doc);
        }
        for filter in self.filters.iter_mut() {
            filter::apply(filter.as_mut(), doc);
        }
        Ok(())
    }
}

fn fill_defaults(doc: &mut OpenApi) {
    if doc.openapi.is_none() {
        doc.openapi = Some(DEFAULT_OPENAPI_VERSION.to_string());
    }
    let info = doc.info.get_or_insert_with(Info::default);
    if info.title().is_none() {
        info.set_title(Some(DEFAULT_TITLE.to_string()));
    }
    if info.version().is_none() {
        info.set_version(Some(DEFAULT_VERSION.to_string()));
    }
    if doc.paths.is_none() {
        doc.paths = Some(Paths::default());
    }
}
