#![deny(missing_docs)]

//! # Configuration
//!
//! `mp.openapi.*` properties controlling document assembly. They can come
//! from an in-memory list, a Java properties file, a `.env` file, or the
//! process environment (`MP_OPENAPI_INFO_TITLE` is `mp.openapi.info.title`).
//!
//! List values are comma separated; `\,` keeps a literal comma. Properties
//! files unescape backslashes, so the escape is written `\\,` there.

use crate::error::{OasError, OasResult};
use crate::models::{Info, Schema, Server};
use crate::scan::{parse_patterns, ScanConfig};
use indexmap::IndexMap;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Prefix shared by every recognised key.
pub const CONFIG_PREFIX: &str = "mp.openapi.";

const ENV_PREFIX: &str = "MP_OPENAPI_";

/// `mp.openapi.info.*` overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoConfig {
    /// `info.title`
    pub title: Option<String>,
    /// `info.version`
    pub version: Option<String>,
    /// `info.description`
    pub description: Option<String>,
    /// `info.termsOfService`
    pub terms_of_service: Option<String>,
    /// `info.contact.name`
    pub contact_name: Option<String>,
    /// `info.contact.email`
    pub contact_email: Option<String>,
    /// `info.contact.url`
    pub contact_url: Option<String>,
    /// `info.license.name`
    pub license_name: Option<String>,
    /// `info.license.url`
    pub license_url: Option<String>,
}

impl InfoConfig {
    /// Whether no override is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Writes every configured value into `info`, leaving the rest alone.
    pub fn apply(&self, info: &mut Info) {
        if let Some(title) = &self.title {
            info.set_title(Some(title.clone()));
        }
        if let Some(version) = &self.version {
            info.set_version(Some(version.clone()));
        }
        if let Some(description) = &self.description {
            info.set_description(Some(description.clone()));
        }
        if let Some(terms) = &self.terms_of_service {
            info.set_terms_of_service(Some(terms.clone()));
        }
        if self.contact_name.is_some() || self.contact_email.is_some() || self.contact_url.is_some()
        {
            let mut contact = info.contact().cloned().unwrap_or_default();
            if let Some(name) = &self.contact_name {
                contact.set_name(Some(name.clone()));
            }
            if let Some(email) = &self.contact_email {
                contact.set_email(Some(email.clone()));
            }
            if let Some(url) = &self.contact_url {
                contact.set_url(Some(url.clone()));
            }
            info.set_contact(Some(contact));
        }
        if self.license_name.is_some() || self.license_url.is_some() {
            let mut license = info.license().cloned().unwrap_or_default();
            if let Some(name) = &self.license_name {
                license.set_name(Some(name.clone()));
            }
            if let Some(url) = &self.license_url {
                license.set_url(Some(url.clone()));
            }
            info.set_license(Some(license));
        }
    }

    fn set(&mut self, key: &str, value: String) -> bool {
        let slot = match key {
            "title" => &mut self.title,
            "version" => &mut self.version,
            "description" => &mut self.description,
            "termsofservice" => &mut self.terms_of_service,
            "contact.name" => &mut self.contact_name,
            "contact.email" => &mut self.contact_email,
            "contact.url" => &mut self.contact_url,
            "license.name" => &mut self.license_name,
            "license.url" => &mut self.license_url,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

/// Parsed `mp.openapi.*` configuration.
#[derive(Debug, Clone, Default)]
pub struct OasConfig {
    /// `mp.openapi.model.reader`: name of a registered model reader.
    pub model_reader: Option<String>,
    /// `mp.openapi.filter`: name of a registered filter.
    pub filter: Option<String>,
    /// `mp.openapi.scan.*`
    pub scan: ScanConfig,
    /// `mp.openapi.servers`
    pub servers: Vec<String>,
    /// `mp.openapi.servers.path.<path>`
    pub path_servers: IndexMap<String, Vec<String>>,
    /// `mp.openapi.servers.operation.<operationId>`
    pub operation_servers: IndexMap<String, Vec<String>>,
    /// `mp.openapi.schema.<type>`: schema definitions, keyed by component
    /// name (the definition's `name` property, else the type name).
    pub schemas: IndexMap<String, Schema>,
    /// `mp.openapi.info.*`
    pub info: InfoConfig,
    /// `mp.openapi.extensions.*`, kept verbatim for vendor use.
    pub extensions: IndexMap<String, String>,
}

impl OasConfig {
    /// Builds a configuration from key / value pairs. Keys outside
    /// `mp.openapi.` are ignored.
    ///
    /// # Errors
    ///
    /// [`OasError::Config`] for malformed booleans, scan patterns or schema
    /// definitions.
    pub fn from_properties<I, K, V>(properties: I) -> OasResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();
        let mut scan_lists: [Vec<String>; 4] = Default::default();
        for (key, value) in properties {
            let key = key.as_ref();
            let Some(rest) = key.strip_prefix(CONFIG_PREFIX) else {
                continue;
            };
            config.apply_property(key, rest, value.into(), &mut scan_lists)?;
        }
        let [packages, classes, exclude_packages, exclude_classes] = scan_lists;
        config.scan.packages = parse_patterns(&packages)?;
        config.scan.classes = parse_patterns(&classes)?;
        config.scan.exclude_packages = parse_patterns(&exclude_packages)?;
        config.scan.exclude_classes = parse_patterns(&exclude_classes)?;
        Ok(config)
    }

    /// Reads a configuration file.
    ///
    /// Files ending in `.env` are parsed as dotenv files, where keys may use
    /// either the dotted or the `MP_OPENAPI_*` form. Anything else is parsed
    /// as a Java properties file.
    pub fn from_file(path: impl AsRef<Path>) -> OasResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading configuration file");
        let config_error = |message: String| {
            OasError::Config(format!("{}: {}", path.display(), message))
        };

        let mut entries = Vec::new();
        if path.extension().is_some_and(|ext| ext == "env") {
            let items = dotenvy::from_path_iter(path).map_err(|e| config_error(e.to_string()))?;
            for item in items {
                let (key, value) = item.map_err(|e| config_error(e.to_string()))?;
                entries.push((env_key(&key).unwrap_or(key), value));
            }
        } else {
            let reader = BufReader::new(File::open(path)?);
            java_properties::PropertiesIter::new(reader)
                .read_into(|key, value| entries.push((key, value)))
                .map_err(|e| config_error(e.to_string()))?;
        }
        Self::from_properties(entries)
    }

    /// Reads `MP_OPENAPI_*` variables from the process environment.
    pub fn from_env() -> OasResult<Self> {
        Self::from_properties(
            std::env::vars().filter_map(|(key, value)| env_key(&key).map(|key| (key, value))),
        )
    }

    /// Servers configured for `path`, if any.
    pub fn servers_for_path(&self, path: &str) -> Option<&[String]> {
        self.path_servers.get(path).map(Vec::as_slice)
    }

    /// Servers configured for the operation with `operation_id`, if any.
    pub fn servers_for_operation(&self, operation_id: &str) -> Option<&[String]> {
        self.operation_servers.get(operation_id).map(Vec::as_slice)
    }

    fn apply_property(
        &mut self,
        key: &str,
        rest: &str,
        value: String,
        scan_lists: &mut [Vec<String>; 4],
    ) -> OasResult<()> {
        let lowered = rest.to_ascii_lowercase();
        match lowered.as_str() {
            "model.reader" => self.model_reader = non_empty(value),
            "filter" => self.filter = non_empty(value),
            "scan.disable" => self.scan.disable = parse_bool(key, &value)?,
            "scan.packages" => scan_lists[0] = split_list(&value),
            "scan.classes" => scan_lists[1] = split_list(&value),
            "scan.exclude.packages" => scan_lists[2] = split_list(&value),
            "scan.exclude.classes" => scan_lists[3] = split_list(&value),
            "servers" => self.servers = split_list(&value),
            _ => return self.apply_keyed_property(key, rest, &lowered, value),
        }
        Ok(())
    }

    fn apply_keyed_property(
        &mut self,
        key: &str,
        rest: &str,
        lowered: &str,
        value: String,
    ) -> OasResult<()> {
        if let Some(field) = lowered.strip_prefix("info.") {
            if !self.info.set(field, value) {
                tracing::warn!(key, "unknown info property");
            }
        } else if let Some(target) = keyed_target(rest, lowered, "servers.path.") {
            self.path_servers.insert(target.to_string(), split_list(&value));
        } else if let Some(target) = keyed_target(rest, lowered, "servers.operation.") {
            self.operation_servers.insert(target.to_string(), split_list(&value));
        } else if let Some(type_name) = keyed_target(rest, lowered, "schema.") {
            let (name, schema) = parse_schema_definition(key, type_name, &value)?;
            self.schemas.insert(name, schema);
        } else if let Some(name) = rest.strip_prefix("extensions.") {
            self.extensions.insert(name.to_string(), value);
        } else {
            tracing::debug!(key, "ignoring unrecognised property");
        }
        Ok(())
    }
}

/// Servers built from configured URLs.
pub fn servers_from_urls(urls: &[String]) -> Vec<Server> {
    urls.iter().map(|url| Server::from(url.as_str())).collect()
}

/// The case-preserved remainder of `rest` after a case-insensitive `prefix`.
fn keyed_target<'a>(rest: &'a str, lowered: &str, prefix: &str) -> Option<&'a str> {
    lowered.strip_prefix(prefix)?;
    rest.get(prefix.len()..).filter(|target| !target.is_empty())
}

/// A `mp.openapi.schema.<type>` value: a JSON schema whose optional `name`
/// property names the component.
fn parse_schema_definition(
    key: &str,
    type_name: &str,
    value: &str,
) -> OasResult<(String, Schema)> {
    let invalid =
        |message: String| OasError::Config(format!("{}: invalid schema: {}", key, message));
    let mut json: Value = serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?;
    let Some(object) = json.as_object_mut() else {
        return Err(invalid("expected a JSON object".to_string()));
    };
    let name = match object.remove("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.trim().to_string(),
        Some(Value::String(_)) | None => type_name.to_string(),
        Some(other) => return Err(invalid(format!("'name' must be a string, got {}", other))),
    };
    let schema = serde_json::from_value(json).map_err(|e| invalid(e.to_string()))?;
    Ok((name, schema))
}

fn env_key(name: &str) -> Option<String> {
    let rest = name.strip_prefix(ENV_PREFIX)?;
    Some(format!(
        "{}{}",
        CONFIG_PREFIX,
        rest.to_ascii_lowercase().replace('_', ".")
    ))
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parses `true` / `false`, ignoring case.
pub(crate) fn parse_bool(key: &str, value: &str) -> OasResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(OasError::Config(format!(
            "{}: expected true or false, got '{}'",
            key, other
        ))),
    }
}

/// Splits a comma separated list, honouring `\,` escapes and dropping blanks.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&',') => {
                current.push(',');
                chars.next();
            }
            ',' => items.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    items.push(current);
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, Extensible};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_split_list_escapes() {
        assert_eq!(
            split_list(r"https://a, https://b\,c ,, "),
            vec!["https://a", "https://b,c"]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_parse_bool_is_strict() {
        assert!(parse_bool("k", "TRUE").unwrap());
        assert!(!parse_bool("k", " false ").unwrap());
        assert!(matches!(parse_bool("k", "yes"), Err(OasError::Config(_))));
    }

    #[test]
    fn test_from_properties_recognises_all_sections() {
        let config = OasConfig::from_properties([
            ("mp.openapi.model.reader", "petstore"),
            ("mp.openapi.filter", "redact"),
            ("mp.openapi.scan.disable", "false"),
            ("mp.openapi.scan.exclude.packages", "com.acme.internal"),
            ("mp.openapi.servers", "https://a,https://b"),
            ("mp.openapi.servers.path./pets/{id}", "https://pets"),
            ("mp.openapi.Servers.Operation.listPets", "https://list"),
            ("mp.openapi.schema.java.util.Date", r#"{"type":"string","format":"date"}"#),
            ("mp.openapi.info.title", "Pets"),
            ("mp.openapi.info.termsOfService", "https://tos"),
            ("mp.openapi.info.contact.email", "ops@example.com"),
            ("mp.openapi.extensions.vendor.flag", "on"),
            ("unrelated.key", "ignored"),
        ])
        .unwrap();

        assert_eq!(config.model_reader.as_deref(), Some("petstore"));
        assert_eq!(config.filter.as_deref(), Some("redact"));
        assert!(!config.scan.disable);
        assert_eq!(config.scan.exclude_packages[0].as_str(), "com.acme.internal");
        assert_eq!(config.servers, vec!["https://a", "https://b"]);
        assert_eq!(config.servers_for_path("/pets/{id}"),
            Some(&["https://pets".to_string()][..]));
        assert_eq!(
            config.servers_for_operation("listPets"),
            Some(&["https://list".to_string()][..])
        );
        assert_eq!(config.schemas["java.util.Date"].format(), Some("date"));
        assert_eq!(config.info.title.as_deref(), Some("Pets"));
        assert_eq!(config.info.terms_of_service.as_deref(), Some("https://tos"));
        assert_eq!(config.info.contact_email.as_deref(), Some("ops@example.com"));
        assert_eq!(config.extensions["vendor.flag"], "on");
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(OasConfig::from_properties([("mp.openapi.scan.disable", "maybe")]).is_err());
        assert!(OasConfig::from_properties([("mp.openapi.schema.Pet", "{not json")]).is_err());
        assert!(OasConfig::from_properties([("mp.openapi.scan.classes", "a.(")]).is_err());
    }

    #[test]
    fn test_info_apply_keeps_unset_fields() {
        let mut info = Info::default()
            .with_title("Static")
            .with_version("2.0")
            .with_contact(Contact::default().with_name("Team"));
        let overrides = InfoConfig {
            title: Some("Configured".into()),
            contact_url: Some("https://team".into()),
            ..Default::default()
        };
        overrides.apply(&mut info);
        assert_eq!(info.title(), Some("Configured"));
        assert_eq!(info.version(), Some("2.0"));
        assert_eq!(info.contact().unwrap().name(), Some("Team"));
        assert_eq!(info.contact().unwrap().url(), Some("https://team"));
        assert!(info.license().is_none());
    }

    #[test]
    fn test_env_key_mapping() {
        assert_eq!(
            env_key("MP_OPENAPI_SCAN_DISABLE").as_deref(),
            Some("mp.openapi.scan.disable")
        );
        assert_eq!(env_key("PATH"), None);
    }

    #[test]
    fn test_schema_definition_uses_name_property() {
        let config = OasConfig::from_properties([
            (
                "mp.openapi.schema.java.time.Instant",
                r#"{"name":"EpochMillis","type":"integer","format":"int64"}"#,
            ),
            ("mp.openapi.schema.java.util.UUID", r#"{"type":"string","format":"uuid"}"#),
        ])
        .unwrap();
        let names: Vec<&String> = config.schemas.keys().collect();
        assert_eq!(names, vec!["EpochMillis", "java.util.UUID"]);
        let millis = &config.schemas["EpochMillis"];
        assert_eq!(millis.format(), Some("int64"));
        assert!(millis.extensions().is_empty());

        assert!(OasConfig::from_properties([("mp.openapi.schema.X", "[1]")]).is_err());
        assert!(OasConfig::from_properties([("mp.openapi.schema.X", r#"{"name":1}"#)]).is_err());
    }

    #[test]
    fn test_properties_file_accepts_plain_values() {
        let mut file = tempfile::Builder::new().suffix(".properties").tempfile().unwrap();
        writeln!(file, "# assembly settings").unwrap();
        writeln!(file, "mp.openapi.info.title=Configured Store").unwrap();
        writeln!(file, "mp.openapi.info.description : Pets and their owners").unwrap();
        writeln!(file, "mp.openapi.info.version=3.2").unwrap();
        writeln!(file, "mp.openapi.servers=https://a\\\\,1, https://b").unwrap();
        writeln!(file, "mp.openapi.servers.path./pets=https://pets.example.com").unwrap();
        let config = OasConfig::from_file(file.path()).unwrap();
        assert_eq!(config.info.title.as_deref(), Some("Configured Store"));
        assert_eq!(config.info.description.as_deref(), Some("Pets and their owners"));
        assert_eq!(config.info.version.as_deref(), Some("3.2"));
        assert_eq!(config.servers, vec!["https://a,1", "https://b"]);
        assert_eq!(
            config.servers_for_path("/pets"),
            Some(&["https://pets.example.com".to_string()][..])
        );
    }

    #[test]
    fn test_dotenv_file_accepts_env_style_keys() {
        let mut file = tempfile::Builder::new().suffix(".env").tempfile().unwrap();
        writeln!(file, "MP_OPENAPI_SCAN_DISABLE=true").unwrap();
        writeln!(file, "mp.openapi.info.title=\"Quoted Title\"").unwrap();
        let config = OasConfig::from_file(file.path()).unwrap();
        assert!(config.scan.disable);
        assert_eq!(config.info.title.as_deref(), Some("Quoted Title"));
    }
}
