//! # Specification Extensions
//!
//! `x-` prefixed properties that may appear on most OpenAPI objects.

use indexmap::IndexMap;
use serde_json::Value;

/// Ordered map of extension name (including the `x-` prefix) to raw value.
pub type Extensions = IndexMap<String, Value>;

/// Prefix every specification extension name must carry.
pub const EXTENSION_PREFIX: &str = "x-";

/// Objects that carry specification extensions.
///
/// Extensions are serialized inline, next to the object's own properties.
pub trait Extensible {
    /// The full extension map.
    fn extensions(&self) -> &Extensions;

    /// Mutable access to the extension map.
    fn extensions_mut(&mut self) -> &mut Extensions;

    /// Looks up one extension by name.
    fn extension(&self, name: &str) -> Option<&Value> {
        self.extensions().get(name)
    }

    /// Replaces every extension at once.
    fn set_extensions(&mut self, extensions: Extensions) {
        *self.extensions_mut() = extensions;
    }

    /// Adds (or overwrites) one extension.
    fn add_extension(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self
    where
        Self: Sized,
    {
        self.extensions_mut().insert(name.into(), value.into());
        self
    }

    /// Removes one extension, returning its value.
    fn remove_extension(&mut self, name: &str) -> Option<Value> {
        self.extensions_mut().shift_remove(name)
    }

    /// Builder form of [`Extensible::add_extension`].
    #[must_use]
    fn with_extension(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self
    where
        Self: Sized,
    {
        self.extensions_mut().insert(name.into(), value.into());
        self
    }

    /// Builder form of [`Extensible::set_extensions`].
    #[must_use]
    fn with_extensions(mut self, extensions: Extensions) -> Self
    where
        Self: Sized,
    {
        self.set_extensions(extensions);
        self
    }
}

/// Whether `name` is a well formed extension name.
pub fn is_extension_name(name: &str) -> bool {
    name.len() > EXTENSION_PREFIX.len() && name.starts_with(EXTENSION_PREFIX)
}
