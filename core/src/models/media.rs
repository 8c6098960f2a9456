//! # Content, Media Types and Encodings

use crate::models::{Example, Extensions, Header, ParameterStyle, Schema};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Media type name to [`MediaType`], e.g. `application/json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Content {
    pub(crate) entries: IndexMap<String, MediaType>,
}

impl Content {
    entry_accessors!(
        MediaType;
        media_types, set_media_types, media_type, has_media_type, add_media_type,
        remove_media_type, with_media_type
    );
}

/// Schema and examples for one media type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) schema: Option<Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) example: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) examples: Option<IndexMap<String, Example>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) encoding: Option<IndexMap<String, Encoding>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl MediaType {
    property!(
        /// Schema describing the content.
        schema, set_schema, with_schema: Schema
    );
    property!(example, set_example, with_example: Value);
    map_property!(examples, set_examples, with_examples, add_example, remove_example: Example);
    map_property!(
        /// Per-property encoding; only for multipart and form bodies.
        encoding, set_encoding, with_encoding, add_encoding, remove_encoding: Encoding
    );
}

/// Encoding of a single property in a multipart or form body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) headers: Option<IndexMap<String, Header>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) style: Option<ParameterStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) explode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) allow_reserved: Option<bool>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Encoding {
    text_property!(
        /// Content-Type for the property, possibly a comma separated list.
        content_type, set_content_type, with_content_type
    );
    map_property!(headers, set_headers, with_headers, add_header, remove_header: Header);
    flag_property!(style, set_style, with_style: ParameterStyle);
    flag_property!(explode, set_explode, with_explode: bool);
    flag_property!(allow_reserved, set_allow_reserved, with_allow_reserved: bool);
}

impl_extensible!(MediaType, Encoding);
