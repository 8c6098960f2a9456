//! # References
//!
//! `$ref` handling shared by every model type that can stand in for a
//! reusable component.

use percent_encoding::percent_decode_str;
use std::fmt;

/// Prefix of every local component pointer.
pub const COMPONENTS_PREFIX: &str = "#/components/";

/// The reusable component sections a `$ref` can point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// `#/components/schemas`
    Schemas,
    /// `#/components/responses`
    Responses,
    /// `#/components/parameters`
    Parameters,
    /// `#/components/examples`
    Examples,
    /// `#/components/requestBodies`
    RequestBodies,
    /// `#/components/headers`
    Headers,
    /// `#/components/securitySchemes`
    SecuritySchemes,
    /// `#/components/links`
    Links,
    /// `#/components/callbacks`
    Callbacks,
    /// `#/components/pathItems`
    PathItems,
}

impl ComponentKind {
    /// Every section, in the order they appear in a Components Object.
    pub const ALL: [ComponentKind; 10] = [
        ComponentKind::Schemas,
        ComponentKind::Responses,
        ComponentKind::Parameters,
        ComponentKind::Examples,
        ComponentKind::RequestBodies,
        ComponentKind::Headers,
        ComponentKind::SecuritySchemes,
        ComponentKind::Links,
        ComponentKind::Callbacks,
        ComponentKind::PathItems,
    ];

    /// The section name as it appears in the document.
    pub fn section(self) -> &'static str {
        match self {
            ComponentKind::Schemas => "schemas",
            ComponentKind::Responses => "responses",
            ComponentKind::Parameters => "parameters",
            ComponentKind::Examples => "examples",
            ComponentKind::RequestBodies => "requestBodies",
            ComponentKind::Headers => "headers",
            ComponentKind::SecuritySchemes => "securitySchemes",
            ComponentKind::Links => "links",
            ComponentKind::Callbacks => "callbacks",
            ComponentKind::PathItems => "pathItems",
        }
    }

    /// Looks up a section by its document name.
    pub fn from_section(section: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.section() == section)
    }

    /// The pointer prefix for this section, e.g. `#/components/schemas/`.
    pub fn prefix(self) -> String {
        format!("{}{}/", COMPONENTS_PREFIX, self.section())
    }

    /// Expands a short component name into a full local pointer.
    ///
    /// Anything containing a `/` is already a pointer or URI and is returned
    /// unchanged, as is the empty string.
    pub fn expand(self, reference: &str) -> String {
        if reference.is_empty() || reference.contains('/') {
            reference.to_string()
        } else {
            format!("{}{}", self.prefix(), reference)
        }
    }

    /// Splits a local `#/components/<section>/<name>` pointer into its kind and
    /// decoded component name.
    pub fn parse(reference: &str) -> Option<(ComponentKind, String)> {
        let pointer = reference.strip_prefix(COMPONENTS_PREFIX)?;
        let mut segments = pointer.split('/');
        let kind = Self::from_section(segments.next()?)?;
        let name = segments.next()?;
        if name.is_empty() || segments.next().is_some() {
            return None;
        }
        Some((kind, decode_pointer_segment(name)))
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.section())
    }
}

/// Decodes a JSON Pointer segment (handles `~1`, `~0` and percent-encoding).
pub fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}

/// Encodes a raw key as a JSON Pointer segment.
pub fn encode_pointer_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// Objects that may be replaced by a `$ref` to a reusable component.
pub trait Reference {
    /// The component section short names expand into.
    const KIND: ComponentKind;

    /// The current `$ref`, if any.
    fn reference(&self) -> Option<&str>;

    /// Raw access to the `$ref` slot, bypassing short name expansion.
    fn reference_mut(&mut self) -> &mut Option<String>;

    /// Sets or clears the `$ref`, expanding short names.
    fn set_reference(&mut self, reference: Option<String>) {
        *self.reference_mut() = reference.map(|r| Self::KIND.expand(&r));
    }

    /// Builder form of [`Reference::set_reference`]; returns the same instance.
    #[must_use]
    fn with_reference(mut self, reference: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.set_reference(Some(reference.into()));
        self
    }

    /// Whether this object is a reference rather than an inline definition.
    fn is_reference(&self) -> bool {
        self.reference().is_some()
    }
}
