//! ListEnterpriseProjectsResDetail model for the IAM v3 API
//!
//! Auto-generated from model definition: iam/v3/ListEnterpriseProjectsResDetail
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::fmt;

use serde::{Deserialize, Serialize};

/// `ListEnterpriseProjectsResDetail`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnterpriseProjectsResDetail {
    /// Enterprise project ID.
    pub id: String,
    /// Enterprise project name.
    pub name: String,
}

impl ListEnterpriseProjectsResDetail {
    /// Creates a new `ListEnterpriseProjectsResDetail`
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
        }
    }
}

impl fmt::Display for ListEnterpriseProjectsResDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cirrus_core::model::describe(f, "ListEnterpriseProjectsResDetail", self)
    }
}
