//! Serialization for map-like objects whose entries share the JSON object with
//! `x-` extensions (and, for callbacks, a `$ref`).

use crate::models::extensible::{Extensions, EXTENSION_PREFIX};
use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Error as DeError};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const REF_KEY: &str = "$ref";

/// The three kinds of keys a map-like object can hold, once separated.
pub(crate) struct SplitEntries<T> {
    pub(crate) reference: Option<String>,
    pub(crate) entries: IndexMap<String, T>,
    pub(crate) extensions: Extensions,
}

/// Reads a JSON object, routing `x-` keys to extensions, `$ref` (when allowed)
/// to the reference slot and everything else to typed entries.
pub(crate) fn deserialize_entries<'de, D, T>(
    deserializer: D,
    allow_reference: bool,
) -> Result<SplitEntries<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
    let mut split = SplitEntries {
        reference: None,
        entries: IndexMap::new(),
        extensions: Extensions::new(),
    };

    for (key, value) in raw {
        if key.starts_with(EXTENSION_PREFIX) {
            split.extensions.insert(key, value);
            continue;
        }
        if allow_reference && key == REF_KEY {
            match value {
                Value::String(reference) => split.reference = Some(reference),
                other => {
                    return Err(DeError::custom(format!(
                        "'$ref' must be a string, found {}",
                        other
                    )))
                }
            }
            continue;
        }
        let entry = serde_json::from_value::<T>(value)
            .map_err(|e| DeError::custom(format!("Failed to parse entry '{}': {}", key, e)))?;
        split.entries.insert(key, entry);
    }

    Ok(split)
}

/// Writes the reference first, then entries, then extensions.
pub(crate) fn serialize_entries<S, T>(
    serializer: S,
    reference: Option<&str>,
    entries: &IndexMap<String, T>,
    extensions: &Extensions,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let len = entries.len() + extensions.len() + usize::from(reference.is_some());
    let mut map = serializer.serialize_map(Some(len))?;
    if let Some(reference) = reference {
        map.serialize_entry(REF_KEY, reference)?;
    }
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    for (key, value) in extensions {
        map.serialize_entry(key, value)?;
    }
    map.end()
}
