use oas_core::models::{HttpMethod, OpenApi, Operation, PathItem, Schema};
use oas_core::refs::resolve;
use oas_core::{
    locate_static_file, read_document, validate, write_document, OasConfig, OasFilter,
    OpenApiProcessor,
};
use pretty_assertions::assert_eq;
use std::fs;

const STATIC_DOC: &str = r##"
openapi: 3.0.3
info:
  title: Pet Store
  version: "1.0.0"
paths:
  /pets/{id}:
    get:
      operationId: getPet
      parameters:
        - name: id
          in: path
          required: true
          schema:
            type: integer
            minimum: 0
            exclusiveMinimum: true
      responses:
        "200":
          description: A pet
          content:
            application/json:
              schema:
                $ref: "#/components/schemas/Pet"
components:
  schemas:
    Pet:
      $ref: "#/components/schemas/Animal"
    Animal:
      type: object
      required: [name]
      properties:
        name: {type: string}
        secret: {type: string, x-internal: true}
"##;

struct DropInternalProperties;

impl OasFilter for DropInternalProperties {
    fn filter_schema(&mut self, schema: Schema) -> Option<Schema> {
        use oas_core::models::Extensible;
        if schema.extension("x-internal").is_some() {
            None
        } else {
            Some(schema)
        }
    }
}

#[test]
fn test_static_file_config_and_filter() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("openapi.yaml"), STATIC_DOC).unwrap();
    let config_path = dir.path().join("openapi.properties");
    fs::write(
        &config_path,
        "mp.openapi.info.title=Configured Store\n\
         mp.openapi.servers=https://api.example.com\n\
         mp.openapi.servers.path./pets/{id}=https://pets.example.com\n\
         mp.openapi.servers.operation.health=https://health.example.com\n",
    )
    .unwrap();

    let static_file = locate_static_file(dir.path()).unwrap();
    let mut processor = OpenApiProcessor::new(OasConfig::from_file(&config_path).unwrap());
    processor
        .add_static_file(&static_file)
        .unwrap()
        .set_model_reader(|| {
            OpenApi::default().with_path(
                "/health",
                PathItem::default().with_operation(
                    HttpMethod::Get,
                    Operation::default().with_operation_id("health"),
                ),
            )
        })
        .add_filter(DropInternalProperties);
    let doc = processor.process().unwrap();

    assert_eq!(doc.info().unwrap().title(), Some("Configured Store"));
    assert_eq!(doc.info().unwrap().version(), Some("1.0.0"));
    assert_eq!(doc.servers().unwrap()[0].url(), Some("https://api.example.com"));
    let paths = doc.paths().unwrap();
    assert!(paths.has_path_item("/pets/{id}"));
    assert!(paths.has_path_item("/health"));

    let schemas = doc.components().unwrap().schemas().unwrap();
    let animal = resolve(&doc, &schemas["Pet"]).unwrap();
    let properties: Vec<&String> = animal.properties().unwrap().keys().collect();
    assert_eq!(properties, vec!["name"]);

    let pet_item = paths.path_item("/pets/{id}").unwrap();
    assert_eq!(pet_item.servers().unwrap()[0].url(), Some("https://pets.example.com"));
    let health = paths
        .path_item("/health")
        .and_then(|item| item.operation(HttpMethod::Get))
        .unwrap();
    assert_eq!(health.servers().unwrap()[0].url(), Some("https://health.example.com"));

    let get_pet = paths
        .path_item("/pets/{id}")
        .and_then(|item| item.operation(HttpMethod::Get))
        .unwrap();
    let id_schema = get_pet.parameters().unwrap()[0].schema().unwrap();
    assert_eq!(id_schema.minimum(), None);
    assert_eq!(id_schema.exclusive_minimum().map(|n| n.as_u64()), Some(Some(0)));

    assert_eq!(validate(&doc), Vec::new());
}

#[test]
fn test_assembled_document_round_trips_through_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("openapi.yml");
    fs::write(&source, STATIC_DOC).unwrap();

    let doc = read_document(&source).unwrap();
    let out = dir.path().join("assembled.yaml");
    write_document(&doc, &out).unwrap();
    assert_eq!(read_document(&out).unwrap(), doc);
}
