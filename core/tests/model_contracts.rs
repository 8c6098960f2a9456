use oas_core::models::*;
use oas_core::{Constructible, ModelKind, OasError, OasFactory};
use pretty_assertions::assert_eq;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::fmt::Debug;

#[test]
fn test_factory_covers_every_kind() {
    assert_eq!(ModelKind::ALL.len(), 30);
    for kind in ModelKind::ALL {
        let first = OasFactory::create_object(kind.name()).unwrap();
        let second = OasFactory::create_kind(*kind);
        assert_eq!(first.kind(), *kind);
        assert_eq!(first, second);
        assert_eq!(ModelKind::from_name(kind.name()), Some(*kind));
    }
}

#[test]
fn test_factory_rejects_contracts_and_unknown_names() {
    for name in ["Constructible", "Extensible", "Reference", "NotAModel"] {
        match OasFactory::create_object(name) {
            Err(OasError::NotConstructible(rejected)) => assert_eq!(rejected, name),
            other => panic!("expected NotConstructible for {name}, got {other:?}"),
        }
    }
    assert!(matches!(
        OasFactory::create_object(""),
        Err(OasError::MissingArgument(_))
    ));
}

#[test]
fn test_static_factory_instances_are_independent() {
    let mut a = OasFactory::create::<Operation>();
    let b = OasFactory::create::<Operation>();
    a.add_tag("pets");
    assert_eq!(a.tags(), Some(&["pets".to_string()][..]));
    assert_eq!(b.tags(), None);
    assert_eq!(<Operation as Constructible>::KIND, ModelKind::Operation);
}

#[test]
fn test_getter_setter_builder_triples() {
    let mut info = Info::create();
    info.set_title(Some("Pets".into()));
    assert_eq!(info.title(), Some("Pets"));
    info.set_title(None);
    assert_eq!(info.title(), None);

    let parameter = Parameter::create()
        .with_name("id")
        .with_location(ParameterIn::Path)
        .with_required(true)
        .with_style(ParameterStyle::Simple);
    assert_eq!(parameter.name(), Some("id"));
    assert_eq!(parameter.location(), Some(ParameterIn::Path));
    assert_eq!(parameter.required(), Some(true));
    assert_eq!(parameter.style(), Some(ParameterStyle::Simple));

    let mut schema = Schema::create().with_type(SchemaType::Array);
    schema.set_items(Some(Schema::create().with_type(SchemaType::String)));
    schema.set_max_items(Some(10));
    assert!(schema.items().unwrap().has_type(SchemaType::String));
    assert_eq!(schema.max_items(), Some(10));
}

#[test]
fn test_list_and_map_mutators() {
    let mut server = Server::create().with_url("https://{env}.example.com");
    server.add_variable("env", ServerVariable::create().with_default_value("api"));
    assert!(server.variables().unwrap().contains_key("env"));
    assert!(server.remove_variable("env").is_some());
    assert!(server.variables().unwrap().is_empty());

    let mut doc = OpenApi::create();
    doc.add_server("https://a").add_server("https://b");
    assert!(doc.remove_server(&Server::from("https://a")));
    assert_eq!(doc.servers().unwrap().len(), 1);
}

#[test]
fn test_map_like_models() {
    let mut responses = Responses::create();
    responses
        .add_api_response("200", ApiResponse::create().with_description("ok"))
        .set_default_response(Some(ApiResponse::create().with_description("error")));
    assert!(responses.has_api_response("200"));
    assert_eq!(
        responses.default_response().unwrap().description(),
        Some("error")
    );
    assert_eq!(responses.len(), 2);

    let mut callback = Callback::create();
    callback.add_path_item("{$request.body#/url}", PathItem::create());
    assert!(callback.path_item("{$request.body#/url}").is_some());
    assert!(callback.remove_path_item("{$request.body#/url}").is_some());
    assert!(callback.is_empty());

    let requirement = SecurityRequirement::create().with_scheme("oauth", vec!["read".into()]);
    assert_eq!(requirement.scheme("oauth").unwrap(), &vec!["read".to_string()]);
}

#[test]
fn test_extensions_round_trip() {
    let mut operation = Operation::create().with_extension("x-rate-limit", json!(100));
    operation.add_extension("x-internal", json!(true));
    assert_eq!(operation.extension("x-rate-limit"), Some(&json!(100)));
    assert_eq!(operation.extensions().len(), 2);

    let mut replacement = Extensions::new();
    replacement.insert("x-only".into(), json!("one"));
    operation.set_extensions(replacement);
    assert_eq!(operation.extensions().len(), 1);
    assert_eq!(operation.remove_extension("x-only"), Some(json!("one")));

    let paths: Paths = serde_json::from_value(json!({"/pets": {}, "x-owner": "team"})).unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths.extension("x-owner"), Some(&json!("team")));
}

fn assert_extensions_round_trip<T>()
where
    T: Extensible + Default + Serialize + DeserializeOwned + PartialEq + Debug,
{
    let mut item = T::default().with_extension("x-owner", json!("pets-team"));
    item.add_extension("x-limits", json!({"rate": 10}));
    assert_eq!(item.extension("x-owner"), Some(&json!("pets-team")));
    assert_eq!(item.extensions().len(), 2);

    let text = serde_json::to_string(&item).unwrap();
    let parsed: T = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, item);
    assert_eq!(parsed.extension("x-limits"), Some(&json!({"rate": 10})));

    let mut replacement = Extensions::new();
    replacement.insert("x-only".into(), json!(true));
    item.set_extensions(replacement.clone());
    assert_eq!(item.extensions(), &replacement);
    assert_eq!(item.remove_extension("x-only"), Some(json!(true)));
    assert_eq!(item, T::default());
}

#[test]
fn test_extensions_round_trip_for_every_extensible_kind() {
    assert_extensions_round_trip::<OpenApi>();
    assert_extensions_round_trip::<Info>();
    assert_extensions_round_trip::<Contact>();
    assert_extensions_round_trip::<License>();
    assert_extensions_round_trip::<ExternalDocumentation>();
    assert_extensions_round_trip::<Server>();
    assert_extensions_round_trip::<ServerVariable>();
    assert_extensions_round_trip::<Tag>();
    assert_extensions_round_trip::<Paths>();
    assert_extensions_round_trip::<PathItem>();
    assert_extensions_round_trip::<Callback>();
    assert_extensions_round_trip::<Operation>();
    assert_extensions_round_trip::<Parameter>();
    assert_extensions_round_trip::<RequestBody>();
    assert_extensions_round_trip::<MediaType>();
    assert_extensions_round_trip::<Encoding>();
    assert_extensions_round_trip::<Responses>();
    assert_extensions_round_trip::<ApiResponse>();
    assert_extensions_round_trip::<Header>();
    assert_extensions_round_trip::<Link>();
    assert_extensions_round_trip::<Example>();
    assert_extensions_round_trip::<Components>();
    assert_extensions_round_trip::<Schema>();
    assert_extensions_round_trip::<Discriminator>();
    assert_extensions_round_trip::<Xml>();
    assert_extensions_round_trip::<SecurityScheme>();
    assert_extensions_round_trip::<OAuthFlows>();
    assert_extensions_round_trip::<OAuthFlow>();
}

/// `with_reference` only touches the `$ref` slot of the instance it is given.
fn assert_reference_keeps_state<T>(populated: T)
where
    T: Reference + Extensible + Clone + PartialEq + Debug,
{
    let before = populated.with_extension("x-kept", json!(1));
    let referenced = before.clone().with_reference("Shared");
    assert!(referenced.is_reference());
    assert_eq!(referenced.extension("x-kept"), Some(&json!(1)));

    let mut restored = referenced;
    *restored.reference_mut() = None;
    assert_eq!(restored, before);
}

#[test]
fn test_with_reference_preserves_instance_state() {
    assert_reference_keeps_state(Schema::create().with_title("Pet").with_max_items(3));
    assert_reference_keeps_state(ApiResponse::create().with_description("ok"));
    assert_reference_keeps_state(
        Parameter::create()
            .with_name("id")
            .with_location(ParameterIn::Path)
            .with_required(true),
    );
    assert_reference_keeps_state(Example::create());
    assert_reference_keeps_state(RequestBody::create().with_description("body"));
    assert_reference_keeps_state(Header::create().with_description("rate"));
    assert_reference_keeps_state(SecurityScheme::create().with_description("key"));
    assert_reference_keeps_state(Link::create());
    assert_reference_keeps_state(Callback::create().with_path_item("{$url}", PathItem::create()));
    assert_reference_keeps_state(PathItem::create().with_summary("shared"));

    let parameter = Parameter::create().with_name("id").with_reference("IdParam");
    assert_eq!(parameter.name(), Some("id"));
    assert_eq!(parameter.reference(), Some("#/components/parameters/IdParam"));
}

fn assert_expands<T: Reference + Default>(section: &str) {
    let item = T::default().with_reference("Thing");
    assert_eq!(
        item.reference(),
        Some(format!("#/components/{}/Thing", section).as_str())
    );
    let kept = T::default().with_reference("other.yaml#/components/x/Thing");
    assert_eq!(kept.reference(), Some("other.yaml#/components/x/Thing"));
}

#[test]
fn test_reference_expansion_for_every_kind() {
    assert_expands::<Schema>("schemas");
    assert_expands::<ApiResponse>("responses");
    assert_expands::<Parameter>("parameters");
    assert_expands::<Example>("examples");
    assert_expands::<RequestBody>("requestBodies");
    assert_expands::<Header>("headers");
    assert_expands::<SecurityScheme>("securitySchemes");
    assert_expands::<Link>("links");
    assert_expands::<Callback>("callbacks");
    assert_expands::<PathItem>("pathItems");
}

#[test]
fn test_reference_serializes_as_ref_key() {
    let response = ApiResponse::create().with_reference("NotFound");
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"$ref": "#/components/responses/NotFound"})
    );
    let callback: Callback =
        serde_json::from_value(json!({"$ref": "#/components/callbacks/OnEvent"})).unwrap();
    assert!(callback.is_reference());
}
