//! NamespaceMetadata model for the CCI v1 API
//!
//! Auto-generated from model definition: cci/v1/NamespaceMetadata
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::fmt;

use super::{NamespaceAnnotations, NamespaceLabels};
use serde::{Deserialize, Serialize};

/// `NamespaceMetadata`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamespaceMetadata {
    /// Namespace name.
    pub name: String,
    /// Unique ID of the namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Creation time in RFC 3339 format.
    #[serde(rename = "creationTimestamp", skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<NamespaceLabels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<NamespaceAnnotations>,
}

impl NamespaceMetadata {
    /// Creates a new `NamespaceMetadata`
    pub fn new(name: String) -> Self {
        Self {
            name,
            uid: None,
            creation_timestamp: None,
            labels: None,
            annotations: None,
        }
    }

    pub fn with_uid(mut self, uid: String) -> Self {
        self.uid = Some(uid);
        self
    }

    pub fn with_creation_timestamp(mut self, creation_timestamp: String) -> Self {
        self.creation_timestamp = Some(creation_timestamp);
        self
    }

    pub fn with_labels(mut self, labels: NamespaceLabels) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_annotations(mut self, annotations: NamespaceAnnotations) -> Self {
        self.annotations = Some(annotations);
        self
    }
}

impl fmt::Display for NamespaceMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cirrus_core::model::describe(f, "NamespaceMetadata", self)
    }
}
