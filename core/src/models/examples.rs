//! # Example Objects

use crate::models::Extensions;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named example value, inline or external.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub(crate) reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) external_value: Option<String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Example {
    text_property!(summary, set_summary, with_summary);
    text_property!(description, set_description, with_description);
    property!(
        /// Embedded literal example; exclusive with `external_value`.
        value, set_value, with_value: Value
    );
    text_property!(
        /// URL of an example that cannot be embedded.
        external_value, set_external_value, with_external_value
    );
}

impl_extensible!(Example);
impl_reference!(Example => Examples);
