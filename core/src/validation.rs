#![deny(missing_docs)]

//! # Document Validation
//!
//! Structural checks for assembled or fetched documents. Unlike parsing,
//! validation never stops at the first problem: every issue found is
//! reported together with the JSON Pointer of the offending element.
//!
//! Checks performed:
//! - `openapi` is present and names a 3.x version.
//! - `info` carries a title and a version.
//! - Path keys start with `/`.
//! - Response keys are `default`, a status code or a `1XX`..`5XX` range.
//! - Path parameters are marked `required: true`.
//! - Server URL placeholders are declared as variables.
//! - Tag names are unique.
//! - Extension keys start with `x-`.
//! - Local component references resolve.

use crate::models::{
    encode_pointer_segment, Extensible, OpenApi, Operation, Parameter, ParameterIn, PathItem,
    Reference, Responses, Server,
};
use crate::refs::dangling_references;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

/// One problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// JSON Pointer of the offending element.
    pub pointer: String,
    /// What is wrong.
    pub message: String,
}

impl ValidationIssue {
    fn new(pointer: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pointer, self.message)
    }
}

/// Checks `doc` and returns every issue found; empty when the document is valid.
pub fn validate(doc: &OpenApi) -> Vec<ValidationIssue> {
    validate_at(doc, None)
}

/// Like [`validate`] for a document known to live at `base_uri`, so that
/// absolute references back into it are checked as well.
pub fn validate_at(doc: &OpenApi, base_uri: Option<&str>) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    match doc.openapi() {
        None => issues.push(ValidationIssue::new("#/openapi", "missing OpenAPI version")),
        Some(version) if !version.starts_with("3.") => issues.push(ValidationIssue::new(
            "#/openapi",
            format!("unsupported OpenAPI version '{}'", version),
        )),
        Some(_) => {}
    }
    check_extensions(doc, "#", &mut issues);

    match doc.info() {
        None => issues.push(ValidationIssue::new("#/info", "missing info object")),
        Some(info) => {
            if info.title().is_none() {
                issues.push(ValidationIssue::new("#/info/title", "missing title"));
            }
            if info.version().is_none() {
                issues.push(ValidationIssue::new("#/info/version", "missing version"));
            }
            check_extensions(info, "#/info", &mut issues);
        }
    }

    check_servers(doc.servers(), "#/servers", &mut issues);
    check_tags(doc, &mut issues);

    if let Some(paths) = doc.paths() {
        check_extensions(paths, "#/paths", &mut issues);
        for (path, item) in paths.path_items() {
            let pointer = format!("#/paths/{}", encode_pointer_segment(path));
            if !path.starts_with('/') {
                issues.push(ValidationIssue::new(
                    pointer.clone(),
                    format!("path '{}' must start with '/'", path),
                ));
            }
            check_path_item(item, &pointer, &mut issues);
        }
    }
    if let Some(webhooks) = doc.webhooks() {
        for (name, item) in webhooks {
            let pointer = format!("#/webhooks/{}", encode_pointer_segment(name));
            check_path_item(item, &pointer, &mut issues);
        }
    }
    if let Some(components) = doc.components() {
        check_extensions(components, "#/components", &mut issues);
    }

    match dangling_references(doc, base_uri) {
        Ok(dangling) => issues.extend(dangling.into_iter().map(|found| {
            ValidationIssue::new(
                found.location,
                format!("unresolved reference '{}'", found.reference),
            )
        })),
        Err(e) => issues.push(ValidationIssue::new("#", e.to_string())),
    }

    issues
}

fn check_extensions(element: &impl Extensible, pointer: &str, issues: &mut Vec<ValidationIssue>) {
    for name in element.extensions().keys() {
        if !crate::models::is_extension_name(name) {
            issues.push(ValidationIssue::new(
                pointer,
                format!("unknown field '{}'; extensions must start with 'x-'", name),
            ));
        }
    }
}

fn check_path_item(item: &PathItem, pointer: &str, issues: &mut Vec<ValidationIssue>) {
    check_extensions(item, pointer, issues);
    check_parameters(item.parameters(), &format!("{}/parameters", pointer), issues);
    check_servers(item.servers(), &format!("{}/servers", pointer), issues);
    for (method, operation) in item.operations() {
        let op_pointer = format!("{}/{}", pointer, method.as_str());
        check_operation(operation, &op_pointer, issues);
    }
}

fn check_operation(operation: &Operation, pointer: &str, issues: &mut Vec<ValidationIssue>) {
    check_extensions(operation, pointer, issues);
    check_parameters(
        operation.parameters(),
        &format!("{}/parameters", pointer),
        issues,
    );
    check_servers(operation.servers(), &format!("{}/servers", pointer), issues);
    if let Some(responses) = operation.responses() {
        check_responses(responses, &format!("{}/responses", pointer), issues);
    }
    if let Some(callbacks) = operation.callbacks() {
        for (name, callback) in callbacks {
            for (expression, item) in callback.path_items() {
                let cb_pointer = format!(
                    "{}/callbacks/{}/{}",
                    pointer,
                    encode_pointer_segment(name),
                    encode_pointer_segment(expression)
                );
                check_path_item(item, &cb_pointer, issues);
            }
        }
    }
}

fn check_parameters(
    parameters: Option<&[Parameter]>,
    pointer: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    for (index, parameter) in parameters.unwrap_or_default().iter().enumerate() {
        let param_pointer = format!("{}/{}", pointer, index);
        if parameter.is_reference() {
            continue;
        }
        if parameter.location() == Some(ParameterIn::Path) && parameter.required() != Some(true) {
            issues.push(ValidationIssue::new(
                param_pointer.clone(),
                format!(
                    "path parameter '{}' must be required",
                    parameter.name().unwrap_or_default()
                ),
            ));
        }
        check_extensions(parameter, &param_pointer, issues);
    }
}

fn check_responses(responses: &Responses, pointer: &str, issues: &mut Vec<ValidationIssue>) {
    static STATUS_RE: OnceLock<Regex> = OnceLock::new();
    let status_re = STATUS_RE
        .get_or_init(|| Regex::new(r"^(default|[1-5][0-9]{2}|[1-5]XX)$").expect("Invalid regex"));

    check_extensions(responses, pointer, issues);
    if responses.is_empty() {
        issues.push(ValidationIssue::new(pointer, "no responses defined"));
    }
    for (code, response) in responses.api_responses() {
        let response_pointer = format!("{}/{}", pointer, encode_pointer_segment(code));
        if !status_re.is_match(code) {
            issues.push(ValidationIssue::new(
                response_pointer.clone(),
                format!("'{}' is not a status code, range or 'default'", code),
            ));
        }
        check_extensions(response, &response_pointer, issues);
    }
}

fn check_servers(servers: Option<&[Server]>, pointer: &str, issues: &mut Vec<ValidationIssue>) {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    let placeholder_re =
        PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{([^}]+)}").expect("Invalid regex"));

    for (index, server) in servers.unwrap_or_default().iter().enumerate() {
        let server_pointer = format!("{}/{}", pointer, index);
        let Some(url) = server.url() else {
            issues.push(ValidationIssue::new(server_pointer, "missing server url"));
            continue;
        };
        for capture in placeholder_re.captures_iter(url) {
            let name = &capture[1];
            let declared = server
                .variables()
                .is_some_and(|variables| variables.contains_key(name));
            if !declared {
                issues.push(ValidationIssue::new(
                    server_pointer.clone(),
                    format!("url references undefined variable '{}'", name),
                ));
            }
        }
    }
}

fn check_tags(doc: &OpenApi, issues: &mut Vec<ValidationIssue>) {
    let mut seen = HashSet::new();
    for (index, tag) in doc.tags().unwrap_or_default().iter().enumerate() {
        match tag.name() {
            None => issues.push(ValidationIssue::new(
                format!("#/tags/{}", index),
                "missing tag name",
            )),
            Some(name) if !seen.insert(name) => issues.push(ValidationIssue::new(
                format!("#/tags/{}", index),
                format!("duplicate tag '{}'", name),
            )),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{parse_document, Format};
    use pretty_assertions::assert_eq;

    fn issues_for(yaml: &str) -> Vec<String> {
        let doc = parse_document(yaml, Format::Yaml).unwrap();
        validate(&doc).into_iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_valid_document_has_no_issues() {
        let issues = issues_for(
            r##"
openapi: 3.1.0
info: {title: Pets, version: "1.0"}
servers:
  - url: "https://{env}.example.com"
    variables: {env: {default: api}}
paths:
  /pets/{id}:
    get:
      parameters:
        - {name: id, in: path, required: true, schema: {$ref: "#/components/schemas/Id"}}
      responses:
        "200": {description: ok}
        4XX: {description: client error}
        default: {description: other}
      x-internal: false
components:
  schemas:
    Id: {type: string}
"##,
        );
        assert_eq!(issues, Vec::<String>::new());
    }

    #[test]
    fn test_reports_every_problem() {
        let issues = issues_for(
            r##"
openapi: "2.0"
info: {title: Pets}
tags: [{name: a}, {name: a}]
servers: [{url: "https://{region}.example.com"}]
paths:
  pets:
    get:
      parameters: [{name: id, in: path}]
      responses:
        "20": {description: bad}
        "200": {$ref: "#/components/responses/Missing"}
      bogus: 1
"##,
        );
        assert_eq!(
            issues,
            vec![
                "#/openapi: unsupported OpenAPI version '2.0'",
                "#/info/version: missing version",
                "#/servers/0: url references undefined variable 'region'",
                "#/tags/1: duplicate tag 'a'",
                "#/paths/pets: path 'pets' must start with '/'",
                "#/paths/pets/get: unknown field 'bogus'; extensions must start with 'x-'",
                "#/paths/pets/get/parameters/0: path parameter 'id' must be required",
                "#/paths/pets/get/responses/20: '20' is not a status code, range or 'default'",
                "#/paths/pets/get/responses/200: unresolved reference '#/components/responses/Missing'",
            ]
        );
    }

    #[test]
    fn test_absolute_self_references_checked_with_base() {
        let doc = parse_document(
            r##"
openapi: 3.1.0
info: {title: Pets, version: "1.0"}
paths:
  /pets:
    get:
      responses:
        "200": {$ref: "https://api.example.com/openapi.yaml#/components/responses/Gone"}
"##,
            Format::Yaml,
        )
        .unwrap();
        assert!(validate(&doc).is_empty());
        let issues = validate_at(&doc, Some("https://api.example.com/openapi.yaml"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].pointer, "#/paths/~1pets/get/responses/200");
    }

    #[test]
    fn test_missing_root_fields() {
        let issues = validate(&OpenApi::default());
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].pointer, "#/openapi");
        assert_eq!(issues[1].pointer, "#/info");
    }
}
