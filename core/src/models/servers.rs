//! # Servers and Tags

use crate::models::{ExternalDocumentation, Extensions};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A server hosting the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Server {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) variables: Option<IndexMap<String, ServerVariable>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Server {
    text_property!(
        /// URL of the target host; may contain `{variable}` placeholders. Required.
        url, set_url, with_url
    );
    text_property!(
        /// Describes the host designated by the URL.
        description, set_description, with_description
    );
    map_property!(
        /// Substitution values for the URL template.
        variables, set_variables, with_variables, add_variable, remove_variable: ServerVariable
    );

    /// Expands `{name}` placeholders in the URL with each variable's default.
    pub fn resolved_url(&self) -> Option<String> {
        let mut url = self.url.clone()?;
        if let Some(variables) = &self.variables {
            for (name, variable) in variables {
                if let Some(default) = variable.default_value() {
                    url = url.replace(&format!("{{{}}}", name), default);
                }
            }
        }
        Some(url)
    }
}

impl From<&str> for Server {
    fn from(url: &str) -> Self {
        Server::default().with_url(url)
    }
}

/// A substitution variable for a server URL template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerVariable {
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub(crate) enumeration: Option<Vec<String>>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub(crate) default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl ServerVariable {
    list_property!(
        /// Allowed values (`enum`).
        enumeration, set_enumeration, with_enumeration, add_enumeration, remove_enumeration: String
    );
    text_property!(
        /// Value used when none is supplied (`default`). Required.
        default_value, set_default_value, with_default_value
    );
    text_property!(
        /// Description of the variable.
        description, set_description, with_description
    );
}

/// Metadata for a tag used by operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) external_docs: Option<ExternalDocumentation>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Tag {
    text_property!(
        /// Tag name. Required.
        name, set_name, with_name
    );
    text_property!(
        /// Tag description.
        description, set_description, with_description
    );
    property!(
        /// External documentation for the tag.
        external_docs, set_external_docs, with_external_docs: ExternalDocumentation
    );
}

impl_extensible!(Server, ServerVariable, Tag);
