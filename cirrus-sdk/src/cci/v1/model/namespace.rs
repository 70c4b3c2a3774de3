//! Namespace model for the CCI v1 API
//!
//! Auto-generated from model definition: cci/v1/Namespace
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::fmt;

use super::{NamespaceMetadata, NamespaceStatus};
use serde::{Deserialize, Serialize};

/// Namespace in Cloud Container Instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    /// API version of the object.
    #[serde(rename = "apiVersion", skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Object kind, always Namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub metadata: NamespaceMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NamespaceStatus>,
}

impl Namespace {
    /// Creates a new `Namespace`
    pub fn new(metadata: NamespaceMetadata) -> Self {
        Self {
            api_version: None,
            kind: None,
            metadata,
            status: None,
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

    pub fn with_status(mut self, status: NamespaceStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cirrus_core::model::describe(f, "Namespace", self)
    }
}
