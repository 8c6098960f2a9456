//! # Security Schemes, OAuth Flows and Requirements

use crate::models::Extensions;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Kind of security scheme (`type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecuritySchemeType {
    /// `apiKey`
    #[serde(rename = "apiKey")]
    ApiKey,
    /// `http`
    #[serde(rename = "http")]
    Http,
    /// `oauth2`
    #[serde(rename = "oauth2")]
    OAuth2,
    /// `openIdConnect`
    #[serde(rename = "openIdConnect")]
    OpenIdConnect,
    /// `mutualTLS`
    #[serde(rename = "mutualTLS")]
    MutualTls,
}

/// Location of an API key (`in`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecuritySchemeIn {
    /// Request header.
    Header,
    /// Query string.
    Query,
    /// Cookie.
    Cookie,
}

/// A security scheme operations can require.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub(crate) reference: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub(crate) scheme_type: Option<SecuritySchemeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub(crate) location: Option<SecuritySchemeIn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) bearer_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) flows: Option<OAuthFlows>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) open_id_connect_url: Option<String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl SecurityScheme {
    flag_property!(
        /// Scheme kind (`type`). Required.
        scheme_type, set_scheme_type, with_scheme_type: SecuritySchemeType
    );
    text_property!(description, set_description, with_description);
    text_property!(
        /// Header, query or cookie name for `apiKey` schemes.
        name, set_name, with_name
    );
    flag_property!(
        /// Location of the key for `apiKey` schemes (`in`).
        location, set_location, with_location: SecuritySchemeIn
    );
    text_property!(
        /// HTTP authorization scheme for `http` schemes, e.g. `bearer`.
        scheme, set_scheme, with_scheme
    );
    text_property!(bearer_format, set_bearer_format, with_bearer_format);
    property!(
        /// Flow configuration for `oauth2` schemes.
        flows, set_flows, with_flows: OAuthFlows
    );
    text_property!(open_id_connect_url, set_open_id_connect_url, with_open_id_connect_url);
}

/// The OAuth flows a scheme supports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthFlows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) implicit: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) password: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) client_credentials: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) authorization_code: Option<OAuthFlow>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl OAuthFlows {
    property!(implicit, set_implicit, with_implicit: OAuthFlow);
    property!(password, set_password, with_password: OAuthFlow);
    property!(client_credentials, set_client_credentials, with_client_credentials: OAuthFlow);
    property!(authorization_code, set_authorization_code, with_authorization_code: OAuthFlow);
}

/// Configuration of one OAuth flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthFlow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) authorization_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) token_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) refresh_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) scopes: Option<IndexMap<String, String>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl OAuthFlow {
    text_property!(authorization_url, set_authorization_url, with_authorization_url);
    text_property!(token_url, set_token_url, with_token_url);
    text_property!(refresh_url, set_refresh_url, with_refresh_url);
    map_property!(
        /// Scope name to short description.
        scopes, set_scopes, with_scopes, add_scope, remove_scope: String
    );
}

/// Security scheme name to the scopes required from it.
///
/// All schemes listed in one requirement must be satisfied together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityRequirement {
    pub(crate) entries: IndexMap<String, Vec<String>>,
}

impl SecurityRequirement {
    entry_accessors!(
        Vec<String>;
        schemes, set_schemes, scheme, has_scheme, add_scheme, remove_scheme, with_scheme
    );

    /// Adds a scheme that needs no particular scope.
    pub fn add_scheme_without_scopes(&mut self, name: impl Into<String>) -> &mut Self {
        self.entries.insert(name.into(), Vec::new());
        self
    }
}

impl_extensible!(SecurityScheme, OAuthFlows, OAuthFlow);
impl_reference!(SecurityScheme => SecuritySchemes);
