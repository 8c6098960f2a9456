//! # Schema Objects
//!
//! JSON Schema (2020-12 vocabulary as used by OpenAPI 3.1) plus the OpenAPI 3.0
//! `nullable` flag. Keywords without a dedicated field are kept verbatim in the
//! extension map so nothing is lost on a read/write cycle.

use crate::models::{ExternalDocumentation, Extensions};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// Primitive JSON Schema types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// `null`
    Null,
    /// `boolean`
    Boolean,
    /// `object`
    Object,
    /// `array`
    Array,
    /// `number`
    Number,
    /// `string`
    String,
    /// `integer`
    Integer,
}

/// `additionalProperties`: either a flag or a schema for the extra values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` / `false`.
    Allowed(bool),
    /// A schema every additional property must satisfy.
    Schema(Box<Schema>),
}

impl From<bool> for AdditionalProperties {
    fn from(allowed: bool) -> Self {
        AdditionalProperties::Allowed(allowed)
    }
}

impl From<Schema> for AdditionalProperties {
    fn from(schema: Schema) -> Self {
        AdditionalProperties::Schema(Box::new(schema))
    }
}

/// A Schema Object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub(crate) reference: Option<String>,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "types_serde::serialize",
        deserialize_with = "types_serde::deserialize"
    )]
    pub(crate) types: Option<Vec<SchemaType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub(crate) default_value: Option<Value>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub(crate) enumeration: Option<Vec<Value>>,
    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub(crate) const_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) multiple_of: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) maximum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) exclusive_maximum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) minimum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) exclusive_minimum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) min_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) unique_items: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) max_properties: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) min_properties: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) properties: Option<IndexMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) additional_properties: Option<AdditionalProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) prefix_items: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) all_of: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) any_of: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) one_of: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) not: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) discriminator: Option<Discriminator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) nullable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) write_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) xml: Option<Xml>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) external_docs: Option<ExternalDocumentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) example: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) examples: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content_media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) content_encoding: Option<String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Schema {
    list_property!(
        /// Allowed instance types (`type`); one entry serializes as a plain string.
        types, set_types, with_types, add_type, remove_type: SchemaType
    );

    /// Sets `type` to exactly one primitive type.
    #[must_use]
    pub fn with_type(mut self, schema_type: SchemaType) -> Self {
        self.types = Some(vec![schema_type]);
        self
    }

    /// Whether `schema_type` is among the allowed types.
    pub fn has_type(&self, schema_type: SchemaType) -> bool {
        self.types
            .as_ref()
            .is_some_and(|types| types.contains(&schema_type))
    }

    text_property!(
        /// Format hint such as `int64` or `date-time`.
        format, set_format, with_format
    );
    text_property!(title, set_title, with_title);
    text_property!(description, set_description, with_description);
    property!(
        /// Default value (`default`).
        default_value, set_default_value, with_default_value: Value
    );
    list_property!(
        /// Allowed values (`enum`).
        enumeration, set_enumeration, with_enumeration, add_enumeration, remove_enumeration: Value
    );
    property!(
        /// Single allowed value (`const`).
        const_value, set_const_value, with_const_value: Value
    );
    property!(multiple_of, set_multiple_of, with_multiple_of: Number);
    property!(maximum, set_maximum, with_maximum: Number);
    property!(
        /// Exclusive upper bound (numeric form).
        exclusive_maximum, set_exclusive_maximum, with_exclusive_maximum: Number
    );
    property!(minimum, set_minimum, with_minimum: Number);
    property!(
        /// Exclusive lower bound (numeric form).
        exclusive_minimum, set_exclusive_minimum, with_exclusive_minimum: Number
    );
    flag_property!(max_length, set_max_length, with_max_length: u64);
    flag_property!(min_length, set_min_length, with_min_length: u64);
    text_property!(
        /// ECMA-262 regular expression strings must match.
        pattern, set_pattern, with_pattern
    );
    flag_property!(max_items, set_max_items, with_max_items: u64);
    flag_property!(min_items, set_min_items, with_min_items: u64);
    flag_property!(unique_items, set_unique_items, with_unique_items: bool);
    flag_property!(max_properties, set_max_properties, with_max_properties: u64);
    flag_property!(min_properties, set_min_properties, with_min_properties: u64);
    list_property!(
        /// Names of required properties.
        required, set_required, with_required, add_required, remove_required: String
    );
    map_property!(
        /// Named property schemas.
        properties, set_properties, with_properties, add_property, remove_property: Schema
    );
    property!(
        additional_properties,
        set_additional_properties,
        with_additional_properties: AdditionalProperties
    );
    boxed_property!(
        /// Schema for array elements.
        items, set_items, with_items: Schema
    );
    list_property!(
        /// Positional schemas for tuple-like arrays.
        prefix_items, set_prefix_items, with_prefix_items, add_prefix_item, remove_prefix_item: Schema
    );
    list_property!(all_of, set_all_of, with_all_of, add_all_of, remove_all_of: Schema);
    list_property!(any_of, set_any_of, with_any_of, add_any_of, remove_any_of: Schema);
    list_property!(one_of, set_one_of, with_one_of, add_one_of, remove_one_of: Schema);
    boxed_property!(not, set_not, with_not: Schema);
    property!(
        /// Polymorphism hint for `oneOf` / `anyOf` / `allOf`.
        discriminator, set_discriminator, with_discriminator: Discriminator
    );
    flag_property!(
        /// OpenAPI 3.0 nullability flag.
        nullable, set_nullable, with_nullable: bool
    );
    flag_property!(read_only, set_read_only, with_read_only: bool);
    flag_property!(write_only, set_write_only, with_write_only: bool);
    flag_property!(deprecated, set_deprecated, with_deprecated: bool);
    property!(
        /// XML representation hints.
        xml, set_xml, with_xml: Xml
    );
    property!(external_docs, set_external_docs, with_external_docs: ExternalDocumentation);
    property!(
        /// Single example (deprecated in 3.1 in favour of `examples`).
        example, set_example, with_example: Value
    );
    list_property!(examples, set_examples, with_examples, add_example, remove_example: Value);
    text_property!(content_media_type, set_content_media_type, with_content_media_type);
    text_property!(content_encoding, set_content_encoding, with_content_encoding);
}

/// Discriminator Object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discriminator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) mapping: Option<IndexMap<String, String>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Discriminator {
    text_property!(
        /// Name of the property holding the discriminator value. Required.
        property_name, set_property_name, with_property_name
    );
    map_property!(
        /// Discriminator value to schema name or reference.
        mapping, set_mapping, with_mapping, add_mapping, remove_mapping: String
    );
}

/// XML Object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Xml {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) attribute: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) wrapped: Option<bool>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Xml {
    text_property!(name, set_name, with_name);
    text_property!(namespace, set_namespace, with_namespace);
    text_property!(prefix, set_prefix, with_prefix);
    flag_property!(attribute, set_attribute, with_attribute: bool);
    flag_property!(wrapped, set_wrapped, with_wrapped: bool);
}

impl_extensible!(Schema, Discriminator, Xml);
impl_reference!(Schema => Schemas);

/// `type` is a single string or an array of strings.
mod types_serde {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(SchemaType),
        Many(Vec<SchemaType>),
    }

    pub(super) fn serialize<S>(value: &Option<Vec<SchemaType>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value.as_deref() {
            Some([single]) => single.serialize(serializer),
            Some(many) => many.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<SchemaType>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
            Some(OneOrMany::One(single)) => Some(vec![single]),
            Some(OneOrMany::Many(many)) => Some(many),
            None => None,
        })
    }
}
