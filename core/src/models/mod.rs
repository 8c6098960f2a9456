#![deny(missing_docs)]

//! # OpenAPI Model
//!
//! One type per OpenAPI 3.x object. Every property is optional at the type
//! level and is reached through getter / setter / `with_*` builder triples;
//! fields stay crate-private so the accessors are the only mutation path.
//!
//! - **Extensible**: objects carrying `x-` extensions.
//! - **Reference**: objects that may be a `$ref` to a reusable component.
//! - **Map-like** objects (`Paths`, `Callback`, `Responses`, `Content`,
//!   `SecurityRequirement`) expose entry level accessors.

#[macro_use]
mod macros;

mod components;
mod entries;
mod examples;
mod extensible;
mod info;
mod media;
mod openapi;
mod operation;
mod parameters;
mod paths;
mod reference;
mod responses;
mod schema;
mod security;
mod servers;

pub use components::{Component, Components};
pub use examples::Example;
pub use extensible::{is_extension_name, Extensible, Extensions, EXTENSION_PREFIX};
pub use info::{Contact, ExternalDocumentation, Info, License};
pub use media::{Content, Encoding, MediaType};
pub use openapi::{OpenApi, DEFAULT_OPENAPI_VERSION};
pub use operation::Operation;
pub use parameters::{Parameter, ParameterIn, ParameterStyle, RequestBody};
pub use paths::{Callback, HttpMethod, PathItem, Paths};
pub use reference::{
    decode_pointer_segment, encode_pointer_segment, ComponentKind, Reference, COMPONENTS_PREFIX,
};
pub use responses::{ApiResponse, Header, Link, Responses};
pub use schema::{AdditionalProperties, Discriminator, Schema, SchemaType, Xml};
pub use security::{
    OAuthFlow, OAuthFlows, SecurityRequirement, SecurityScheme, SecuritySchemeIn,
    SecuritySchemeType,
};
pub use servers::{Server, ServerVariable, Tag};
