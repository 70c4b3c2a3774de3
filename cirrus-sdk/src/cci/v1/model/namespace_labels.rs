//! NamespaceLabels model for the CCI v1 API
//!
//! Auto-generated from model definition: cci/v1/NamespaceLabels
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::fmt;

use serde::{Deserialize, Serialize};

/// `NamespaceLabels`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamespaceLabels {
    /// Enterprise project the namespace belongs to.
    #[serde(rename = "sys_enterprise_project_id", skip_serializing_if = "Option::is_none")]
    pub enterprise_project_id: Option<String>,
    /// Set to true when RBAC is enabled for the namespace.
    #[serde(rename = "rbac.authorization.k8s.io/enable", skip_serializing_if = "Option::is_none")]
    pub rbac_enabled: Option<String>,
}

impl NamespaceLabels {
    /// Creates a new `NamespaceLabels`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enterprise_project_id(mut self, enterprise_project_id: String) -> Self {
        self.enterprise_project_id = Some(enterprise_project_id);
        self
    }

    pub fn with_rbac_enabled(mut self, rbac_enabled: String) -> Self {
        self.rbac_enabled = Some(rbac_enabled);
        self
    }
}

impl fmt::Display for NamespaceLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cirrus_core::model::describe(f, "NamespaceLabels", self)
    }
}
