#![deny(missing_docs)]

//! # Model Filters
//!
//! An [`OasFilter`] sees every element of an assembled document once and may
//! rewrite or drop it. [`apply`] visits the tree bottom-up: the contents of an
//! element are filtered before the element itself, and the root is always
//! last.

use crate::models::{
    AdditionalProperties, ApiResponse, Callback, Components, Content, Header, HttpMethod, Link,
    OpenApi, Operation, Parameter, PathItem, RequestBody, Schema, SecurityScheme, Server, Tag,
};
use indexmap::IndexMap;

/// Element level hooks run over a whole document.
///
/// Every method defaults to keeping the element unchanged. Returning `None`
/// removes the element from its parent.
pub trait OasFilter {
    /// Path Items under `paths`, `webhooks`, callbacks and components.
    fn filter_path_item(&mut self, item: PathItem) -> Option<PathItem> {
        Some(item)
    }

    /// Operations of a Path Item.
    fn filter_operation(&mut self, operation: Operation) -> Option<Operation> {
        Some(operation)
    }

    /// Parameters of Path Items, Operations and components.
    fn filter_parameter(&mut self, parameter: Parameter) -> Option<Parameter> {
        Some(parameter)
    }

    /// Headers of responses, encodings and components.
    fn filter_header(&mut self, header: Header) -> Option<Header> {
        Some(header)
    }

    /// Request bodies of Operations and components.
    fn filter_request_body(&mut self, body: RequestBody) -> Option<RequestBody> {
        Some(body)
    }

    /// Responses of Operations and components.
    fn filter_api_response(&mut self, response: ApiResponse) -> Option<ApiResponse> {
        Some(response)
    }

    /// Every schema, including nested ones.
    fn filter_schema(&mut self, schema: Schema) -> Option<Schema> {
        Some(schema)
    }

    /// Security schemes in components.
    fn filter_security_scheme(&mut self, scheme: SecurityScheme) -> Option<SecurityScheme> {
        Some(scheme)
    }

    /// Servers at document, Path Item, Operation and Link level.
    fn filter_server(&mut self, server: Server) -> Option<Server> {
        Some(server)
    }

    /// Document tags.
    fn filter_tag(&mut self, tag: Tag) -> Option<Tag> {
        Some(tag)
    }

    /// Links of responses and components.
    fn filter_link(&mut self, link: Link) -> Option<Link> {
        Some(link)
    }

    /// Callbacks of Operations and components.
    fn filter_callback(&mut self, callback: Callback) -> Option<Callback> {
        Some(callback)
    }

    /// The document root, called once after everything else.
    fn filter_open_api(&mut self, _doc: &mut OpenApi) {}
}

/// Runs `filter` over the whole of `doc`.
pub fn apply<F: OasFilter + ?Sized>(filter: &mut F, doc: &mut OpenApi) {
    tracing::debug!("applying model filter");

    if let Some(paths) = doc.paths.as_mut() {
        let entries = std::mem::take(&mut paths.entries);
        paths.entries = retain_map(filter, entries, visit_path_item::<F>);
    }
    filter_map_slot(filter, &mut doc.webhooks, visit_path_item::<F>);
    if let Some(components) = doc.components.as_mut() {
        visit_components(filter, components);
    }
    filter_vec_slot(filter, &mut doc.servers, F::filter_server);
    filter_vec_slot(filter, &mut doc.tags, F::filter_tag);

    filter.filter_open_api(doc);
}

fn retain_map<F: ?Sized, T>(
    filter: &mut F,
    map: IndexMap<String, T>,
    visit: fn(&mut F, T) -> Option<T>,
) -> IndexMap<String, T> {
    map.into_iter()
        .filter_map(|(key, value)| visit(filter, value).map(|value| (key, value)))
        .collect()
}

fn filter_map_slot<F: ?Sized, T>(
    filter: &mut F,
    slot: &mut Option<IndexMap<String, T>>,
    visit: fn(&mut F, T) -> Option<T>,
) {
    if let Some(map) = slot.take() {
        *slot = Some(retain_map(filter, map, visit));
    }
}

fn filter_vec_slot<F: ?Sized, T>(
    filter: &mut F,
    slot: &mut Option<Vec<T>>,
    visit: fn(&mut F, T) -> Option<T>,
) {
    if let Some(items) = slot.take() {
        *slot = Some(
            items
                .into_iter()
                .filter_map(|item| visit(filter, item))
                .collect(),
        );
    }
}

fn filter_slot<F: ?Sized, T>(
    filter: &mut F,
    slot: &mut Option<T>,
    visit: fn(&mut F, T) -> Option<T>,
) {
    *slot = slot.take().and_then(|value| visit(filter, value));
}

fn visit_components<F: OasFilter + ?Sized>(filter: &mut F, components: &mut Components) {
    filter_map_slot(filter, &mut components.schemas, visit_schema::<F>);
    filter_map_slot(filter, &mut components.responses, visit_response::<F>);
    filter_map_slot(filter, &mut components.parameters, visit_parameter::<F>);
    filter_map_slot(filter, &mut components.request_bodies, visit_request_body::<F>);
    filter_map_slot(filter, &mut components.headers, visit_header::<F>);
    filter_map_slot(filter, &mut components.security_schemes, F::filter_security_scheme);
    filter_map_slot(filter, &mut components.links, visit_link::<F>);
    filter_map_slot(filter, &mut components.callbacks, visit_callback::<F>);
    filter_map_slot(filter, &mut components.path_items, visit_path_item::<F>);
}

fn visit_path_item<F: OasFilter + ?Sized>(
    filter: &mut F,
    mut item: PathItem,
) -> Option<PathItem> {
    filter_vec_slot(filter, &mut item.parameters, visit_parameter::<F>);
    for method in HttpMethod::ALL {
        filter_slot(filter, item.operation_slot(method), visit_operation::<F>);
    }
    filter_vec_slot(filter, &mut item.servers, F::filter_server);
    filter.filter_path_item(item)
}

fn visit_operation<F: OasFilter + ?Sized>(
    filter: &mut F,
    mut operation: Operation,
) -> Option<Operation> {
    filter_vec_slot(filter, &mut operation.parameters, visit_parameter::<F>);
    filter_slot(filter, &mut operation.request_body, visit_request_body::<F>);
    if let Some(responses) = operation.responses.as_mut() {
        let entries = std::mem::take(&mut responses.entries);
        responses.entries = retain_map(filter, entries, visit_response::<F>);
    }
    filter_map_slot(filter, &mut operation.callbacks, visit_callback::<F>);
    filter_vec_slot(filter, &mut operation.servers, F::filter_server);
    filter.filter_operation(operation)
}

fn visit_callback<F: OasFilter + ?Sized>(
    filter: &mut F,
    mut callback: Callback,
) -> Option<Callback> {
    let entries = std::mem::take(&mut callback.entries);
    callback.entries = retain_map(filter, entries, visit_path_item::<F>);
    filter.filter_callback(callback)
}

fn visit_parameter<F: OasFilter + ?Sized>(
    filter: &mut F,
    mut parameter: Parameter,
) -> Option<Parameter> {
    filter_slot(filter, &mut parameter.schema, visit_schema::<F>);
    if let Some(content) = parameter.content.as_mut() {
        visit_content(filter, content);
    }
    filter.filter_parameter(parameter)
}

fn visit_header<F: OasFilter + ?Sized>(filter: &mut F, mut header: Header) -> Option<Header> {
    filter_slot(filter, &mut header.schema, visit_schema::<F>);
    if let Some(content) = header.content.as_mut() {
        visit_content(filter, content);
    }
    filter.filter_header(header)
}

fn visit_request_body<F: OasFilter + ?Sized>(
    filter: &mut F,
    mut body: RequestBody,
) -> Option<RequestBody> {
    if let Some(content) = body.content.as_mut() {
        visit_content(filter, content);
    }
    filter.filter_request_body(body)
}

fn visit_response<F: OasFilter + ?Sized>(
    filter: &mut F,
    mut response: ApiResponse,
) -> Option<ApiResponse> {
    filter_map_slot(filter, &mut response.headers, visit_header::<F>);
    if let Some(content) = response.content.as_mut() {
        visit_content(filter, content);
    }
    filter_map_slot(filter, &mut response.links, visit_link::<F>);
    filter.filter_api_response(response)
}

fn visit_link<F: OasFilter + ?Sized>(filter: &mut F, mut link: Link) -> Option<Link> {
    filter_slot(filter, &mut link.server, F::filter_server);
    filter.filter_link(link)
}

fn visit_content<F: OasFilter + ?Sized>(filter: &mut F, content: &mut Content) {
    for media_type in content.entries.values_mut() {
        filter_slot(filter, &mut media_type.schema, visit_schema::<F>);
        if let Some(encodings) = media_type.encoding.as_mut() {
            for encoding in encodings.values_mut() {
                filter_map_slot(filter, &mut encoding.headers, visit_header::<F>);
            }
        }
    }
}

fn visit_schema<F: OasFilter + ?Sized>(filter: &mut F, mut schema: Schema) -> Option<Schema> {
    filter_map_slot(filter, &mut schema.properties, visit_schema::<F>);
    schema.additional_properties = match schema.additional_properties.take() {
        Some(AdditionalProperties::Schema(nested)) => {
            visit_schema(filter, *nested).map(AdditionalProperties::from)
        }
        allowed => allowed,
    };
    filter_boxed(filter, &mut schema.items);
    filter_vec_slot(filter, &mut schema.prefix_items, visit_schema::<F>);
    filter_vec_slot(filter, &mut schema.all_of, visit_schema::<F>);
    filter_vec_slot(filter, &mut schema.any_of, visit_schema::<F>);
    filter_vec_slot(filter, &mut schema.one_of, visit_schema::<F>);
    filter_boxed(filter, &mut schema.not);
    filter.filter_schema(schema)
}

fn filter_boxed<F: OasFilter + ?Sized>(filter: &mut F, slot: &mut Option<Box<Schema>>) {
    *slot = slot
        .take()
        .and_then(|nested| visit_schema(filter, *nested))
        .map(Box::new);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MediaType, ParameterIn, Responses, SchemaType};
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<String>,
    }

    impl OasFilter for Recorder {
        fn filter_path_item(&mut self, item: PathItem) -> Option<PathItem> {
            self.seen.push("path_item".into());
            Some(item)
        }

        fn filter_operation(&mut self, operation: Operation) -> Option<Operation> {
            self.seen.push(format!("operation:{}", operation.operation_id().unwrap_or("")));
            Some(operation)
        }

        fn filter_parameter(&mut self, parameter: Parameter) -> Option<Parameter> {
            self.seen.push(format!("parameter:{}", parameter.name().unwrap_or("")));
            Some(parameter)
        }

        fn filter_api_response(&mut self, response: ApiResponse) -> Option<ApiResponse> {
            self.seen.push("response".into());
            Some(response)
        }

        fn filter_schema(&mut self, schema: Schema) -> Option<Schema> {
            self.seen.push(format!("schema:{}", schema.title().unwrap_or("")));
            Some(schema)
        }

        fn filter_open_api(&mut self, _doc: &mut OpenApi) {
            self.seen.push("root".into());
        }
    }

    fn sample() -> OpenApi {
        let pet = Schema::default()
            .with_title("pet")
            .with_properties(IndexMap::from([(
                "name".to_string(),
                Schema::default().with_title("name").with_type(SchemaType::String),
            )]));
        let operation = Operation::default()
            .with_operation_id("listPets")
            .with_parameters(vec![Parameter::default()
                .with_name("limit")
                .with_location(ParameterIn::Query)
                .with_schema(Schema::default().with_title("limit"))])
            .with_responses(Responses::default().with_api_response(
                "200",
                ApiResponse::default().with_description("ok").with_content(
                    Content::default().with_media_type(
                        "application/json",
                        MediaType::default().with_schema(Schema::default().with_title("body")),
                    ),
                ),
            ));
        let mut doc = OpenApi::default().with_path(
            "/pets",
            PathItem::default().with_operation(HttpMethod::Get, operation),
        );
        doc.components_mut().add_schema("Pet", pet);
        doc
    }

    #[test]
    fn test_children_are_filtered_before_parents() {
        let mut doc = sample();
        let mut recorder = Recorder::default();
        apply(&mut recorder, &mut doc);
        assert_eq!(
            recorder.seen,
            vec![
                "schema:limit",
                "parameter:limit",
                "schema:body",
                "response",
                "operation:listPets",
                "path_item",
                "schema:name",
                "schema:pet",
                "root",
            ]
        );
    }

    struct DropInternal;

    impl OasFilter for DropInternal {
        fn filter_operation(&mut self, operation: Operation) -> Option<Operation> {
            (operation.operation_id() != Some("listPets")).then_some(operation)
        }

        fn filter_schema(&mut self, schema: Schema) -> Option<Schema> {
            (schema.title() != Some("name")).then_some(schema)
        }

        fn filter_tag(&mut self, tag: Tag) -> Option<Tag> {
            Some(tag.with_description("checked"))
        }
    }

    #[test]
    fn test_none_removes_and_some_rewrites() {
        let mut doc = sample();
        doc.add_tag(Tag::default().with_name("pets"));
        apply(&mut DropInternal, &mut doc);

        let item = doc.paths().unwrap().path_item("/pets").unwrap();
        assert!(item.operation(HttpMethod::Get).is_none());
        let pet = &doc.components().unwrap().schemas().unwrap()["Pet"];
        assert!(pet.properties().unwrap().is_empty());
        assert_eq!(doc.tags().unwrap()[0].description(), Some("checked"));
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        struct Identity;
        impl OasFilter for Identity {}

        let mut doc = sample();
        let before = doc.clone();
        apply(&mut Identity, &mut doc);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_boolean_additional_properties_survive() {
        let mut doc = OpenApi::default();
        doc.components_mut().add_schema(
            "Open",
            Schema::default().with_additional_properties(AdditionalProperties::Allowed(true)),
        );
        let before = doc.clone();
        apply(&mut DropInternal, &mut doc);
        assert_eq!(doc, before);
    }
}
