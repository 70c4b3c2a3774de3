//! ListNamespacesResponse model for the CCI v1 API
//!
//! Auto-generated from model definition: cci/v1/ListNamespacesResponse
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::fmt;

use super::Namespace;
use serde::{Deserialize, Serialize};

/// Response object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListNamespacesResponse {
    /// API version of the list.
    #[serde(rename = "apiVersion", skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Object kind, always NamespaceList.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Namespaces in the project.
    pub items: Vec<Namespace>,
    /// HTTP status code of the response (not part of the payload)
    #[serde(skip)]
    pub http_status_code: u16,
}

impl ListNamespacesResponse {
    /// Creates a new `ListNamespacesResponse`
    pub fn new(items: Vec<Namespace>) -> Self {
        Self {
            api_version: None,
            kind: None,
            items,
            http_status_code: 0,
        }
    }

    pub fn with_api_version(mut self, api_version: String) -> Self {
        self.api_version = Some(api_version);
        self
    }

    pub fn with_kind(mut self, kind: String) -> Self {
        self.kind = Some(kind);
        self
    }
}

impl fmt::Display for ListNamespacesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cirrus_core::model::describe(f, "ListNamespacesResponse", self)
    }
}
