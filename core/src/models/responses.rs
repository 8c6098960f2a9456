//! # Responses, Headers, Examples and Links

use crate::models::entries::{deserialize_entries, serialize_entries};
use crate::models::{Content, Example, Extensions, ParameterStyle, Schema, Server};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Status code to response; also holds the `default` response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Responses {
    pub(crate) entries: IndexMap<String, ApiResponse>,
    pub(crate) extensions: Extensions,
}

impl Responses {
    /// Key of the catch-all response.
    pub const DEFAULT: &'static str = "default";

    entry_accessors!(
        ApiResponse;
        api_responses, set_api_responses, api_response, has_api_response, add_api_response,
        remove_api_response, with_api_response
    );

    /// The `default` response, if any.
    pub fn default_response(&self) -> Option<&ApiResponse> {
        self.entries.get(Self::DEFAULT)
    }

    /// Sets or clears the `default` response.
    pub fn set_default_response(&mut self, response: Option<ApiResponse>) {
        match response {
            Some(response) => {
                self.entries.insert(Self::DEFAULT.to_string(), response);
            }
            None => {
                self.entries.shift_remove(Self::DEFAULT);
            }
        }
    }

    /// Builder form of [`Responses::set_default_response`].
    #[must_use]
    pub fn with_default_response(mut self, response: ApiResponse) -> Self {
        self.set_default_response(Some(response));
        self
    }
}

impl Serialize for Responses {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_entries(serializer, None, &self.entries, &self.extensions)
    }
}

impl<'de> Deserialize<'de> for Responses {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let split = deserialize_entries(deserializer, false)?;
        Ok(Self {
            entries: split.entries,
            extensions: split.extensions,
        })
    }
}

/// A single response from an operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub(crate) reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) headers: Option<IndexMap<String, Header>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) links: Option<IndexMap<String, Link>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl ApiResponse {
    text_property!(
        /// Short description of the response. Required.
        description, set_description, with_description
    );
    map_property!(headers, set_headers, with_headers, add_header, remove_header: Header);
    property!(content, set_content, with_content: Content);
    map_property!(
        /// Operation links reachable from this response.
        links, set_links, with_links, add_link, remove_link: Link
    );
}

/// A response header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub(crate) reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) allow_empty_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) style: Option<ParameterStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) explode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) schema: Option<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) example: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) examples: Option<IndexMap<String, Example>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content: Option<Content>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Header {
    text_property!(description, set_description, with_description);
    flag_property!(required, set_required, with_required: bool);
    flag_property!(deprecated, set_deprecated, with_deprecated: bool);
    flag_property!(allow_empty_value, set_allow_empty_value, with_allow_empty_value: bool);
    flag_property!(
        /// Only `simple` is valid for headers.
        style, set_style, with_style: ParameterStyle
    );
    flag_property!(explode, set_explode, with_explode: bool);
    property!(schema, set_schema, with_schema: Schema);
    property!(example, set_example, with_example: Value);
    map_property!(examples, set_examples, with_examples, add_example, remove_example: Example);
    property!(content, set_content, with_content: Content);
}

/// A design-time link from a response to another operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub(crate) reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) operation_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) operation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) parameters: Option<IndexMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) request_body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) server: Option<Server>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Link {
    text_property!(
        /// URI reference to the target operation; exclusive with `operation_id`.
        operation_ref, set_operation_ref, with_operation_ref
    );
    text_property!(
        /// `operationId` of the target operation.
        operation_id, set_operation_id, with_operation_id
    );
    map_property!(
        /// Parameter values or runtime expressions (`$request.path.id`, ...).
        parameters, set_parameters, with_parameters, add_parameter, remove_parameter: Value
    );
    property!(request_body, set_request_body, with_request_body: Value);
    text_property!(description, set_description, with_description);
    property!(server, set_server, with_server: Server);
}

impl_extensible!(Responses, ApiResponse, Header, Link);
impl_reference!(ApiResponse => Responses, Header => Headers, Link => Links);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Extensible;
    use serde_json::json;

    #[test]
    fn test_responses_split_extensions() {
        let raw = json!({
            "200": {"description": "ok"},
            "default": {"description": "error"},
            "x-cache": "none"
        });
        let responses: Responses = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(
            responses.default_response().and_then(|r| r.description()),
            Some("error")
        );
        assert_eq!(responses.extension("x-cache").unwrap(), "none");
        assert_eq!(serde_json::to_value(&responses).unwrap(), raw);
    }

    #[test]
    fn test_default_response_can_be_cleared() {
        let mut responses =
            Responses::default().with_default_response(ApiResponse::default().with_description("e"));
        assert!(responses.has_api_response("default"));
        responses.set_default_response(None);
        assert!(responses.is_empty());
    }

    #[test]
    fn test_link_parameters_accept_expressions() {
        let mut link = Link::default().with_operation_id("getUser");
        link.add_parameter("userId", "$response.body#/id");
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["parameters"]["userId"], "$response.body#/id");
        assert_eq!(json["operationId"], "getUser");
    }
}
