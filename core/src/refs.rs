#![deny(missing_docs)]

//! # Reference Resolution
//!
//! Follows `$ref` chains through the Components Object and lists every
//! reference a document contains. Nothing is fetched over the network:
//! absolute references only resolve when their document part matches the
//! document's own URI.

use crate::error::{OasError, OasResult};
use crate::models::{encode_pointer_segment, Component, ComponentKind, OpenApi};
use serde_json::Value;
use std::collections::HashSet;
use url::Url;

/// A `$ref` found while walking a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundReference {
    /// JSON Pointer of the object holding the `$ref`.
    pub location: String,
    /// The reference string as written.
    pub reference: String,
}

/// Follows `item`'s `$ref` chain to the inline definition it ends at.
///
/// Objects without a `$ref` resolve to themselves. Only local pointers
/// (`#/components/...`) are followed; see [`resolve_from`] for documents
/// with a known URI.
///
/// # Errors
///
/// * [`OasError::UnresolvedReference`] when a link in the chain is not a
///   local pointer into the section for `T`, or names a missing component.
/// * [`OasError::CircularReference`] when the chain revisits a pointer.
pub fn resolve<'a, T: Component>(doc: &'a OpenApi, item: &'a T) -> OasResult<&'a T> {
    resolve_from(doc, None, item)
}

/// Like [`resolve`], but absolute references whose document part is
/// `base_uri` (for example `https://host/openapi.yaml#/components/...` or
/// `openapi.yaml#/components/...`) are followed as local ones.
pub fn resolve_from<'a, T: Component>(
    doc: &'a OpenApi,
    base_uri: Option<&str>,
    item: &'a T,
) -> OasResult<&'a T> {
    let mut current = item;
    let mut seen = HashSet::new();
    while let Some(reference) = current.reference() {
        let local = normalize_ref_to_local(reference, base_uri)
            .ok_or_else(|| OasError::UnresolvedReference(reference.to_string()))?;
        if !seen.insert(local.clone()) {
            return Err(OasError::CircularReference(reference.to_string()));
        }
        current = lookup::<T>(doc, &local)?;
        tracing::trace!(reference, "followed reference");
    }
    Ok(current)
}

/// Looks up the component a single local pointer names, without following
/// any further `$ref`.
pub fn lookup<'a, T: Component>(doc: &'a OpenApi, reference: &str) -> OasResult<&'a T> {
    let unresolved = || OasError::UnresolvedReference(reference.to_string());
    let (kind, name) = ComponentKind::parse(reference).ok_or_else(unresolved)?;
    if kind != T::KIND {
        return Err(unresolved());
    }
    doc.components()
        .and_then(T::section)
        .and_then(|section| section.get(&name))
        .ok_or_else(unresolved)
}

/// Every `$ref` in `value`, in document order.
pub fn collect_references(value: &Value) -> Vec<FoundReference> {
    let mut found = Vec::new();
    walk(value, String::new(), &mut found);
    found
}

fn walk(value: &Value, pointer: String, found: &mut Vec<FoundReference>) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(reference)) = map.get("$ref") {
                found.push(FoundReference {
                    location: format!("#{}", pointer),
                    reference: reference.clone(),
                });
            }
            for (key, child) in map {
                walk(
                    child,
                    format!("{}/{}", pointer, encode_pointer_segment(key)),
                    found,
                );
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                walk(child, format!("{}/{}", pointer, index), found);
            }
        }
        _ => {}
    }
}

/// Rewrites a `$ref` into a local pointer (`#/...`) when it targets the
/// document identified by `self_uri`.
///
/// Returns `None` for references into other documents and for references
/// without a fragment.
pub fn normalize_ref_to_local(reference: &str, self_uri: Option<&str>) -> Option<String> {
    if reference.starts_with('#') {
        return Some(reference.to_string());
    }
    let (document, fragment) = reference.split_once('#')?;
    let self_uri = self_uri?;
    if document_matches(document, self_uri) {
        Some(format!("#{}", fragment))
    } else {
        None
    }
}

fn document_matches(document: &str, self_uri: &str) -> bool {
    if document == self_uri {
        return true;
    }
    match (Url::parse(document), Url::parse(self_uri)) {
        (Ok(target), Ok(own)) => {
            target.scheme() == own.scheme()
                && target.host() == own.host()
                && target.port() == own.port()
                && target.path() == own.path()
        }
        (Ok(target), Err(_)) if self_uri.starts_with('/') => target.path() == self_uri,
        (Err(_), Ok(own)) => own.join(document).is_ok_and(|joined| joined.path() == own.path()),
        _ => false,
    }
}

/// References in `doc` that point into its own Components Object but name
/// nothing defined there. With a `base_uri`, absolute references into the
/// same document are checked too; references into other documents are
/// never reported.
pub fn dangling_references(
    doc: &OpenApi,
    base_uri: Option<&str>,
) -> OasResult<Vec<FoundReference>> {
    let value = serde_json::to_value(doc)?;
    Ok(collect_references(&value)
        .into_iter()
        .filter(|found| {
            let local = normalize_ref_to_local(&found.reference, base_uri);
            match local.as_deref().and_then(ComponentKind::parse) {
                Some((kind, name)) => !doc
                    .components()
                    .is_some_and(|components| components.contains(kind, &name)),
                None => false,
            }
        })
        .collect())
}
