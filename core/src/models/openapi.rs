//! # OpenAPI Root Object

use crate::models::{
    Components, ExternalDocumentation, Extensions, Info, PathItem, Paths, SecurityRequirement,
    Server, Tag,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// OpenAPI version written when a document does not declare one.
pub const DEFAULT_OPENAPI_VERSION: &str = "3.1.0";

/// The root of an OpenAPI document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) openapi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) info: Option<Info>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) json_schema_dialect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) external_docs: Option<ExternalDocumentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) servers: Option<Vec<Server>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) security: Option<Vec<SecurityRequirement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) paths: Option<Paths>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) webhooks: Option<IndexMap<String, PathItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) components: Option<Components>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl OpenApi {
    text_property!(
        /// The OpenAPI Specification version the document follows (`openapi`).
        openapi, set_openapi, with_openapi
    );
    property!(
        /// API metadata. Required.
        info, set_info, with_info: Info
    );
    text_property!(
        /// Default `$schema` for Schema Objects (OpenAPI 3.1).
        json_schema_dialect, set_json_schema_dialect, with_json_schema_dialect
    );
    property!(external_docs, set_external_docs, with_external_docs: ExternalDocumentation);
    list_property!(servers, set_servers, with_servers, add_server, remove_server: Server);
    list_property!(
        /// Document level security alternatives.
        security, set_security, with_security, add_security_requirement,
        remove_security_requirement: SecurityRequirement
    );
    list_property!(tags, set_tags, with_tags, add_tag, remove_tag: Tag);
    property!(
        /// Available paths and operations.
        paths, set_paths, with_paths: Paths
    );
    map_property!(
        /// Incoming webhooks (OpenAPI 3.1).
        webhooks, set_webhooks, with_webhooks, add_webhook, remove_webhook: PathItem
    );
    property!(components, set_components, with_components: Components);

    /// Adds a Path Item, creating `paths` if unset.
    pub fn add_path(&mut self, path: impl Into<String>, item: PathItem) -> &mut Self {
        self.paths
            .get_or_insert_with(Paths::default)
            .add_path_item(path, item);
        self
    }

    /// Builder form of [`OpenApi::add_path`].
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>, item: PathItem) -> Self {
        self.add_path(path, item);
        self
    }

    /// Components, created on first use.
    pub fn components_mut(&mut self) -> &mut Components {
        self.components.get_or_insert_with(Components::default)
    }
}

impl_extensible!(OpenApi);
