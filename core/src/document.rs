#![deny(missing_docs)]

//! # Document I/O
//!
//! Reads and writes OpenAPI documents as JSON or YAML, and finds the static
//! document shipped alongside an application.
//!
//! Documents are normalized before they are deserialized: OpenAPI 3.0 boolean
//! `exclusiveMaximum` / `exclusiveMinimum` flags are folded into the numeric
//! form used since 3.1.

use crate::error::{OasError, OasResult};
use crate::models::OpenApi;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// File names checked by [`locate_static_file`], in order.
pub const STATIC_FILE_NAMES: [&str; 3] = ["openapi.yaml", "openapi.yml", "openapi.json"];

/// Serialization format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// JSON.
    Json,
    /// YAML.
    #[default]
    Yaml,
}

impl Format {
    /// Detects the format from a file extension; anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

impl std::str::FromStr for Format {
    type Err = OasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            other => Err(OasError::General(format!("unknown format '{}'", other))),
        }
    }
}

/// Parses a document from text.
pub fn parse_document(content: &str, format: Format) -> OasResult<OpenApi> {
    let mut value = parse_value(content, format)?;
    normalize_exclusive_bounds(&mut value);
    Ok(serde_json::from_value(value)?)
}

/// Parses text into a raw JSON value without any normalization.
pub fn parse_value(content: &str, format: Format) -> OasResult<Value> {
    Ok(match format {
        Format::Json => serde_json::from_str(content)?,
        Format::Yaml => serde_yaml::from_str(content)?,
    })
}

/// Reads and parses a document, detecting the format from the extension.
pub fn read_document(path: impl AsRef<Path>) -> OasResult<OpenApi> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading document");
    let content = fs::read_to_string(path)?;
    parse_document(&content, Format::from_path(path))
}

/// Serializes a document.
pub fn to_string(doc: &OpenApi, format: Format) -> OasResult<String> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(doc)?,
        Format::Yaml => serde_yaml::to_string(doc)?,
    })
}

/// Writes a document, choosing the format from the extension.
pub fn write_document(doc: &OpenApi, path: impl AsRef<Path>) -> OasResult<()> {
    let path = path.as_ref();
    let content = to_string(doc, Format::from_path(path))?;
    fs::write(path, content)?;
    tracing::info!(path = %path.display(), "wrote document");
    Ok(())
}

/// The `file://` URI of a document on disk, used as its base for `$ref`s.
pub fn document_uri(path: impl AsRef<Path>) -> Option<String> {
    let absolute = fs::canonicalize(path).ok()?;
    Url::from_file_path(absolute).ok().map(String::from)
}

/// The first of `openapi.yaml`, `openapi.yml`, `openapi.json` present in `dir`.
pub fn locate_static_file(dir: impl AsRef<Path>) -> Option<PathBuf> {
    STATIC_FILE_NAMES
        .iter()
        .map(|name| dir.as_ref().join(name))
        .find(|candidate| candidate.is_file())
}

/// Keys whose values are user payloads rather than document structure.
const PAYLOAD_KEYS: [&str; 6] = ["example", "examples", "default", "enum", "const", "value"];

/// Keys whose object values map user chosen names to document objects.
const NAMED_MAPS: [&str; 17] = [
    "properties",
    "patternProperties",
    "dependentSchemas",
    "$defs",
    "definitions",
    "schemas",
    "responses",
    "parameters",
    "requestBodies",
    "headers",
    "content",
    "encoding",
    "links",
    "callbacks",
    "paths",
    "webhooks",
    "pathItems",
];

/// Rewrites 3.0 style `exclusiveMaximum: true` (paired with `maximum`) into
/// the numeric 3.1 form, and drops `false` flags. Payloads (`example`,
/// `default`, `enum`, extension values, ...) are left untouched.
pub(crate) fn normalize_exclusive_bounds(value: &mut Value) {
    normalize_node(value, false);
}

fn normalize_node(value: &mut Value, named_map: bool) {
    match value {
        Value::Object(map) => {
            if !named_map {
                fold_exclusive_flags(map);
            }
            for (key, child) in map.iter_mut() {
                if key.starts_with("x-") {
                    continue;
                }
                if named_map {
                    normalize_node(child, false);
                } else if !PAYLOAD_KEYS.contains(&key.as_str()) {
                    let nested = child.is_object() && NAMED_MAPS.contains(&key.as_str());
                    normalize_node(child, nested);
                }
            }
        }
        Value::Array(items) => {
            for child in items.iter_mut() {
                normalize_node(child, false);
            }
        }
        _ => {}
    }
}

fn fold_exclusive_flags(map: &mut serde_json::Map<String, Value>) {
    for (flag, bound) in [("exclusiveMaximum", "maximum"), ("exclusiveMinimum", "minimum")] {
        if let Some(Value::Bool(exclusive)) = map.get(flag).cloned() {
            map.remove(flag);
            if exclusive {
                if let Some(limit) = map.remove(bound) {
                    map.insert(flag.to_string(), limit);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Info;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path(Path::new("api.JSON")), Format::Json);
        assert_eq!(Format::from_path(Path::new("api.yml")), Format::Yaml);
        assert_eq!("yml".parse::<Format>().unwrap(), Format::Yaml);
        assert!("xml".parse::<Format>().is_err());
    }

    #[test]
    fn test_normalize_exclusive_bounds() {
        let mut value = json!({
            "components": {"schemas": {
                "Age": {"type": "integer", "minimum": 0, "exclusiveMinimum": true,
                        "maximum": 150, "exclusiveMaximum": false},
                "Score": {"exclusiveMaximum": 10}
            }}
        });
        normalize_exclusive_bounds(&mut value);
        assert_eq!(
            value["components"]["schemas"],
            json!({
                "Age": {"type": "integer", "maximum": 150, "exclusiveMinimum": 0},
                "Score": {"exclusiveMaximum": 10}
            })
        );
    }

    #[test]
    fn test_normalize_leaves_payloads_alone() {
        let payload = json!({"minimum": 5, "exclusiveMinimum": true});
        let mut value = json!({
            "components": {
                "schemas": {
                    "Range": {
                        "type": "object",
                        "example": payload,
                        "default": payload,
                        "enum": [payload],
                        "x-sample": payload,
                        "properties": {
                            "default": {"minimum": 1, "exclusiveMinimum": true}
                        }
                    }
                },
                "examples": {"range": {"value": payload}}
            },
            "paths": {"/r": {"get": {"responses": {"default": {
                "description": "d",
                "content": {"application/json": {
                    "schema": {"maximum": 9, "exclusiveMaximum": true},
                    "example": payload
                }}
            }}}}}
        });
        normalize_exclusive_bounds(&mut value);

        let range = &value["components"]["schemas"]["Range"];
        assert_eq!(range["example"], payload);
        assert_eq!(range["default"], payload);
        assert_eq!(range["enum"][0], payload);
        assert_eq!(range["x-sample"], payload);
        assert_eq!(range["properties"]["default"], json!({"exclusiveMinimum": 1}));
        assert_eq!(value["components"]["examples"]["range"]["value"], payload);

        let media = &value["paths"]["/r"]["get"]["responses"]["default"]["content"]["application/json"];
        assert_eq!(media["schema"], json!({"exclusiveMaximum": 9}));
        assert_eq!(media["example"], payload);
    }

    #[test]
    fn test_parse_yaml_document() {
        let doc = parse_document(
            "openapi: 3.0.3\ninfo:\n  title: Pets\n  version: '1'\npaths: {}\n",
            Format::Yaml,
        )
        .unwrap();
        assert_eq!(doc.openapi(), Some("3.0.3"));
        assert_eq!(doc.info().unwrap().title(), Some("Pets"));
    }

    #[test]
    fn test_locate_static_file_order() {
        let dir = tempfile::tempdir().unwrap();
        assert!(locate_static_file(dir.path()).is_none());
        fs::write(dir.path().join("openapi.json"), "{}").unwrap();
        fs::write(dir.path().join("openapi.yml"), "{}").unwrap();
        assert_eq!(
            locate_static_file(dir.path()).unwrap(),
            dir.path().join("openapi.yml")
        );
    }

    #[test]
    fn test_document_uri_is_absolute_file_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        fs::write(&path, "{}").unwrap();
        let uri = document_uri(&path).unwrap();
        assert!(uri.starts_with("file://"));
        assert!(uri.ends_with("/openapi.yaml"));
        assert!(document_uri(dir.path().join("missing.yaml")).is_none());
    }

    #[test]
    fn test_write_then_read_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let doc = OpenApi::default()
            .with_openapi("3.1.0")
            .with_info(Info::default().with_title("T").with_version("1"));
        write_document(&doc, &path).unwrap();
        assert!(fs::read_to_string(&path).unwrap().starts_with('{'));
        assert_eq!(read_document(&path).unwrap(), doc);
    }
}
