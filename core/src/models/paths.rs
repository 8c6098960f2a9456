//! # Paths, Path Items and Callbacks

use crate::models::entries::{deserialize_entries, serialize_entries};
use crate::models::{Extensions, Operation, Parameter, Server};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// HTTP methods a Path Item can hold an operation for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `PUT`
    Put,
    /// `POST`
    Post,
    /// `DELETE`
    Delete,
    /// `OPTIONS`
    Options,
    /// `HEAD`
    Head,
    /// `PATCH`
    Patch,
    /// `TRACE`
    Trace,
}

impl HttpMethod {
    /// Every method, in the order they are serialized.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Trace,
    ];

    /// Lower-case key used inside a Path Item.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown HTTP method: {}", s))
    }
}

/// Relative path to [`PathItem`], plus extensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths {
    pub(crate) entries: IndexMap<String, PathItem>,
    pub(crate) extensions: Extensions,
}

impl Paths {
    entry_accessors!(
        PathItem;
        path_items, set_path_items, path_item, has_path_item, add_path_item,
        remove_path_item, with_path_item
    );
}

impl Serialize for Paths {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_entries(serializer, None, &self.entries, &self.extensions)
    }
}

impl<'de> Deserialize<'de> for Paths {
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

/// Operations available on a single path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub(crate) reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) delete: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) options: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) head: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) patch: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) trace: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) servers: Option<Vec<Server>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) parameters: Option<Vec<Parameter>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl PathItem {
    text_property!(summary, set_summary, with_summary);
    text_property!(description, set_description, with_description);
    property!(get, set_get, with_get: Operation);
    property!(put, set_put, with_put: Operation);
    property!(post, set_post, with_post: Operation);
    property!(delete, set_delete, with_delete: Operation);
    property!(options, set_options, with_options: Operation);
    property!(head, set_head, with_head: Operation);
    property!(patch, set_patch, with_patch: Operation);
    property!(trace, set_trace, with_trace: Operation);
    list_property!(
        /// Servers overriding the document level list for this path.
        servers, set_servers, with_servers, add_server, remove_server: Server
    );
    list_property!(
        /// Parameters shared by every operation on this path.
        parameters, set_parameters, with_parameters, add_parameter, remove_parameter: Parameter
    );

    pub(crate) fn operation_slot(&mut self, method: HttpMethod) -> &mut Option<Operation> {
        match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Options => &mut self.options,
            HttpMethod::Head => &mut self.head,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Trace => &mut self.trace,
        }
    }

    /// The operation registered for `method`.
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Trace => self.trace.as_ref(),
        }
    }

    /// Sets or clears the operation for `method`.
    pub fn set_operation(&mut self, method: HttpMethod, operation: Option<Operation>) {
        *self.operation_slot(method) = operation;
    }

    /// Builder form of [`PathItem::set_operation`].
    #[must_use]
    pub fn with_operation(mut self, method: HttpMethod, operation: Operation) -> Self {
        self.set_operation(method, Some(operation));
        self
    }

    /// Every defined operation, keyed by method in serialization order.
    pub fn operations(&self) -> IndexMap<HttpMethod, &Operation> {
        HttpMethod::ALL
            .into_iter()
            .filter_map(|method| self.operation(method).map(|op| (method, op)))
            .collect()
    }

    /// Mutable handles to every defined operation.
    pub(crate) fn operations_mut(&mut self) -> impl Iterator<Item = &mut Operation> {
        [
            self.get.as_mut(),
            self.put.as_mut(),
            self.post.as_mut(),
            self.delete.as_mut(),
            self.options.as_mut(),
            self.head.as_mut(),
            self.patch.as_mut(),
            self.trace.as_mut(),
        ]
        .into_iter()
        .flatten()
    }
}

/// Runtime expression to [`PathItem`] describing an out-of-band request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Callback {
    pub(crate) reference: Option<String>,
    pub(crate) entries: IndexMap<String, PathItem>,
    pub(crate) extensions: Extensions,
}

impl Callback {
    entry_accessors!(
        PathItem;
        path_items, set_path_items, path_item, has_path_item, add_path_item,
        remove_path_item, with_path_item
    );
}

impl Serialize for Callback {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_entries(
            serializer,
            self.reference.as_deref(),
            &self.entries,
            &self.extensions,
        )
    }
}

impl<'de> Deserialize<'de> for Callback {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let split = deserialize_entries(deserializer, true)?;
        Ok(Self {
            reference: split.reference,
            entries: split.entries,
            extensions: split.extensions,
        })
    }
}

impl_extensible!(Paths, PathItem, Callback);
impl_reference!(PathItem => PathItems, Callback => Callbacks);
