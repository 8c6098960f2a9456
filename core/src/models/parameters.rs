//! # Parameters and Request Bodies

use crate::models::{Content, Example, Extensions, Schema};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Location of a parameter (`in`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterIn {
    /// Part of the path template, e.g. `/users/{id}`.
    Path,
    /// Appended to the URL, e.g. `/users?page=1`.
    Query,
    /// Custom request header.
    Header,
    /// Cookie value.
    Cookie,
}

impl ParameterIn {
    /// The wire name of the location.
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterIn::Path => "path",
            ParameterIn::Query => "query",
            ParameterIn::Header => "header",
            ParameterIn::Cookie => "cookie",
        }
    }
}

impl fmt::Display for ParameterIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialization style of a parameter, header or encoded property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterStyle {
    /// `matrix`
    Matrix,
    /// `label`
    Label,
    /// `form`
    Form,
    /// `simple`
    Simple,
    /// `spaceDelimited`
    SpaceDelimited,
    /// `pipeDelimited`
    PipeDelimited,
    /// `deepObject`
    DeepObject,
}

/// A single operation parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub(crate) reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub(crate) location: Option<ParameterIn>,
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
    pub(crate) allow_reserved: Option<bool>,
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

impl Parameter {
    text_property!(
        /// Case sensitive parameter name. Required.
        name, set_name, with_name
    );
    flag_property!(
        /// Location of the parameter (`in`). Required.
        location, set_location, with_location: ParameterIn
    );
    text_property!(description, set_description, with_description);
    flag_property!(
        /// Mandatory for path parameters, where it must be `true`.
        required, set_required, with_required: bool
    );
    flag_property!(deprecated, set_deprecated, with_deprecated: bool);
    flag_property!(allow_empty_value, set_allow_empty_value, with_allow_empty_value: bool);
    flag_property!(style, set_style, with_style: ParameterStyle);
    flag_property!(explode, set_explode, with_explode: bool);
    flag_property!(allow_reserved, set_allow_reserved, with_allow_reserved: bool);
    property!(schema, set_schema, with_schema: Schema);
    property!(example, set_example, with_example: Value);
    map_property!(examples, set_examples, with_examples, add_example, remove_example: Example);
    property!(
        /// Alternative to `schema` for complex serializations.
        content, set_content, with_content: Content
    );

    /// The `(name, in)` pair that identifies a parameter within an operation.
    pub fn identity(&self) -> (Option<&str>, Option<ParameterIn>) {
        (self.name.as_deref(), self.location)
    }

    /// Style used on the wire once defaults are applied.
    pub fn effective_style(&self) -> Option<ParameterStyle> {
        if self.style.is_some() {
            return self.style;
        }
        let default = match self.location? {
            ParameterIn::Query | ParameterIn::Cookie => ParameterStyle::Form,
            ParameterIn::Path | ParameterIn::Header => ParameterStyle::Simple,
        };
        Some(default)
    }
}

/// A request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub(crate) reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) required: Option<bool>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl RequestBody {
    text_property!(description, set_description, with_description);
    property!(
        /// Body content keyed by media type. Required.
        content, set_content, with_content: Content
    );
    flag_property!(required, set_required, with_required: bool);
}

impl_extensible!(Parameter, RequestBody);
impl_reference!(Parameter => Parameters, RequestBody => RequestBodies);
