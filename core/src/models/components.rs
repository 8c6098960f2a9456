//! # Components
//!
//! Named, reusable objects that the rest of the document can `$ref`.

use crate::models::{
    ApiResponse, Callback, ComponentKind, Example, Extensions, Header, Link, Parameter, PathItem,
    Reference, RequestBody, Schema, SecurityScheme,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The Components Object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) schemas: Option<IndexMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) responses: Option<IndexMap<String, ApiResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) parameters: Option<IndexMap<String, Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) examples: Option<IndexMap<String, Example>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) request_bodies: Option<IndexMap<String, RequestBody>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) headers: Option<IndexMap<String, Header>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) security_schemes: Option<IndexMap<String, SecurityScheme>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) links: Option<IndexMap<String, Link>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) callbacks: Option<IndexMap<String, Callback>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) path_items: Option<IndexMap<String, PathItem>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Components {
    map_property!(schemas, set_schemas, with_schemas, add_schema, remove_schema: Schema);
    map_property!(
        responses, set_responses, with_responses, add_response, remove_response: ApiResponse
    );
    map_property!(
        parameters, set_parameters, with_parameters, add_parameter, remove_parameter: Parameter
    );
    map_property!(examples, set_examples, with_examples, add_example, remove_example: Example);
    map_property!(
        request_bodies, set_request_bodies, with_request_bodies, add_request_body,
        remove_request_body: RequestBody
    );
    map_property!(headers, set_headers, with_headers, add_header, remove_header: Header);
    map_property!(
        security_schemes, set_security_schemes, with_security_schemes, add_security_scheme,
        remove_security_scheme: SecurityScheme
    );
    map_property!(links, set_links, with_links, add_link, remove_link: Link);
    map_property!(callbacks, set_callbacks, with_callbacks, add_callback, remove_callback: Callback);
    map_property!(
        /// Reusable Path Items (OpenAPI 3.1).
        path_items, set_path_items, with_path_items, add_path_item, remove_path_item: PathItem
    );

    /// Names defined in one section, in document order.
    pub fn names(&self, kind: ComponentKind) -> Vec<&str> {
        fn keys<T>(map: &Option<IndexMap<String, T>>) -> Vec<&str> {
            map.iter().flat_map(|m| m.keys().map(String::as_str)).collect()
        }
        match kind {
            ComponentKind::Schemas => keys(&self.schemas),
            ComponentKind::Responses => keys(&self.responses),
            ComponentKind::Parameters => keys(&self.parameters),
            ComponentKind::Examples => keys(&self.examples),
            ComponentKind::RequestBodies => keys(&self.request_bodies),
            ComponentKind::Headers => keys(&self.headers),
            ComponentKind::SecuritySchemes => keys(&self.security_schemes),
            ComponentKind::Links => keys(&self.links),
            ComponentKind::Callbacks => keys(&self.callbacks),
            ComponentKind::PathItems => keys(&self.path_items),
        }
    }

    /// Whether `name` is defined in the section for `kind`.
    pub fn contains(&self, kind: ComponentKind, name: &str) -> bool {
        self.names(kind).contains(&name)
    }

    /// Whether every section is unset or empty.
    pub fn is_empty(&self) -> bool {
        ComponentKind::ALL
            .into_iter()
            .all(|kind| self.names(kind).is_empty())
            && self.extensions.is_empty()
    }
}

/// Model types that live in a Components section and can be looked up by name.
pub trait Component: Reference + Sized {
    /// The section holding this type.
    fn section(components: &Components) -> Option<&IndexMap<String, Self>>;
}

macro_rules! impl_component {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            impl Component for $ty {
                fn section(components: &Components) -> Option<&IndexMap<String, Self>> {
                    components.$field.as_ref()
                }
            }
        )*
    };
}

impl_component!(
    Schema => schemas,
    ApiResponse => responses,
    Parameter => parameters,
    Example => examples,
    RequestBody => request_bodies,
    Header => headers,
    SecurityScheme => security_schemes,
    Link => links,
    Callback => callbacks,
    PathItem => path_items,
);

impl_extensible!(Components);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_components_sections_camel_case() {
        let mut components = Components::default();
        components
            .add_request_body("NewPet", RequestBody::default().with_required(true))
            .add_security_scheme("api_key", SecurityScheme::default())
            .add_path_item("Ping", PathItem::default().with_summary("ping"));
        let json = serde_json::to_value(&components).unwrap();
        assert_eq!(json["requestBodies"]["NewPet"], json!({"required": true}));
        assert!(json["securitySchemes"].get("api_key").is_some());
        assert_eq!(json["pathItems"]["Ping"]["summary"], "ping");
    }

    #[test]
    fn test_names_and_contains() {
        let mut components = Components::default();
        assert!(components.is_empty());
        components
            .add_schema("Pet", Schema::default())
            .add_schema("Owner", Schema::default());
        assert_eq!(components.names(ComponentKind::Schemas), vec!["Pet", "Owner"]);
        assert!(components.contains(ComponentKind::Schemas, "Owner"));
        assert!(!components.contains(ComponentKind::Headers, "Owner"));
        assert!(!components.is_empty());
    }

    #[test]
    fn test_component_section_lookup() {
        let components = Components::default().with_examples(IndexMap::from([(
            "cat".to_string(),
            Example::default().with_summary("a cat"),
        )]));
        let section = <Example as Component>::section(&components).unwrap();
        assert_eq!(section["cat"].summary(), Some("a cat"));
    }
}
