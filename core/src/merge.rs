#![deny(missing_docs)]

//! # Document Merging
//!
//! Combines partial documents from the different model sources. The
//! overlay always wins on conflicts:
//!
//! - Objects merge key by key, recursively.
//! - Scalars from the overlay replace the base value.
//! - An overlay object carrying `$ref` replaces the base object outright.
//!   An inline overlay drops the `$ref` of the base object.
//! - Arrays are unioned. Items are matched by `name` + `in`, else by `url`,
//!   else by equality; matched items merge recursively.
//! - An empty overlay array clears the base array (`security: []`).

use crate::error::OasResult;
use crate::models::OpenApi;
use serde_json::Value;

/// Merges `overlay` into `base`.
pub fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(target), Value::Object(source)) => {
            if source.contains_key("$ref") {
                *target = source;
                return;
            }
            target.remove("$ref");
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (Value::Array(target), Value::Array(source)) if source.is_empty() => target.clear(),
        (Value::Array(target), Value::Array(source)) => {
            for item in source {
                match target.iter_mut().find(|existing| same_item(existing, &item)) {
                    Some(existing) => merge(existing, item),
                    None => target.push(item),
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn same_item(left: &Value, right: &Value) -> bool {
    if let (Some(a), Some(b)) = (left.get("name"), right.get("name")) {
        return a == b && left.get("in") == right.get("in");
    }
    if let (Some(a), Some(b)) = (left.get("url"), right.get("url")) {
        return a == b;
    }
    left == right
}

/// Merges two models, `overlay` taking precedence.
pub fn merge_models(base: &OpenApi, overlay: &OpenApi) -> OasResult<OpenApi> {
    let mut merged = serde_json::to_value(base)?;
    merge(&mut merged, serde_json::to_value(overlay)?);
    Ok(serde_json::from_value(merged)?)
}
