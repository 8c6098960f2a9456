//! # Operation Objects

use crate::models::{
    Callback, ExternalDocumentation, Extensions, Parameter, RequestBody, Responses,
    SecurityRequirement, Server,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single API operation on a path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) external_docs: Option<ExternalDocumentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) operation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) request_body: Option<RequestBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) responses: Option<Responses>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) callbacks: Option<IndexMap<String, Callback>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) security: Option<Vec<SecurityRequirement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) servers: Option<Vec<Server>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Operation {
    list_property!(
        /// Tag names used to group the operation.
        tags, set_tags, with_tags, add_tag, remove_tag: String
    );
    text_property!(summary, set_summary, with_summary);
    text_property!(description, set_description, with_description);
    property!(external_docs, set_external_docs, with_external_docs: ExternalDocumentation);
    text_property!(
        /// Unique identifier of the operation across the document.
        operation_id, set_operation_id, with_operation_id
    );
    list_property!(
        parameters, set_parameters, with_parameters, add_parameter, remove_parameter: Parameter
    );
    property!(request_body, set_request_body, with_request_body: RequestBody);
    property!(
        /// Possible responses. Required in OpenAPI 3.0.
        responses, set_responses, with_responses: Responses
    );
    map_property!(callbacks, set_callbacks, with_callbacks, add_callback, remove_callback: Callback);
    flag_property!(deprecated, set_deprecated, with_deprecated: bool);
    list_property!(
        /// Security alternatives; an empty list removes document level security.
        security, set_security, with_security, add_security_requirement,
        remove_security_requirement: SecurityRequirement
    );
    list_property!(
        /// Servers overriding path and document level servers.
        servers, set_servers, with_servers, add_server, remove_server: Server
    );
}

impl_extensible!(Operation);
