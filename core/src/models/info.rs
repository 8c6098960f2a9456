//! # Info, Contact, License, External Documentation
//!
//! Document level metadata objects.

use crate::models::Extensions;
use serde::{Deserialize, Serialize};

/// Metadata about the API (`info`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) terms_of_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) license: Option<License>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) version: Option<String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Info {
    text_property!(
        /// The title of the API. Required.
        title, set_title, with_title
    );
    text_property!(
        /// A short summary of the API.
        summary, set_summary, with_summary
    );
    text_property!(
        /// Longer description; CommonMark allowed.
        description, set_description, with_description
    );
    text_property!(
        /// URL of the terms of service.
        terms_of_service, set_terms_of_service, with_terms_of_service
    );
    property!(
        /// Contact information for the exposed API.
        contact, set_contact, with_contact: Contact
    );
    property!(
        /// License information for the exposed API.
        license, set_license, with_license: License
    );
    text_property!(
        /// Version of the API document (not the OpenAPI version). Required.
        version, set_version, with_version
    );
}

/// Contact information (`info.contact`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) email: Option<String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl Contact {
    text_property!(
        /// Identifying name of the contact.
        name, set_name, with_name
    );
    text_property!(
        /// URL pointing to the contact information.
        url, set_url, with_url
    );
    text_property!(
        /// Email address of the contact.
        email, set_email, with_email
    );
}

/// License information (`info.license`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) url: Option<String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl License {
    text_property!(
        /// License name. Required.
        name, set_name, with_name
    );
    text_property!(
        /// SPDX expression; mutually exclusive with `url`.
        identifier, set_identifier, with_identifier
    );
    text_property!(
        /// URL of the license text.
        url, set_url, with_url
    );
}

/// A reference to external documentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalDocumentation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) url: Option<String>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

impl ExternalDocumentation {
    text_property!(
        /// Description of the target documentation.
        description, set_description, with_description
    );
    text_property!(
        /// URL of the target documentation. Required.
        url, set_url, with_url
    );
}

impl_extensible!(Info, Contact, License, ExternalDocumentation);
