//! ListEnterpriseProjectsForUserResponse model for the IAM v3 API
//!
//! Auto-generated from model definition: iam/v3/ListEnterpriseProjectsForUserResponse
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::fmt;

use super::ListEnterpriseProjectsResDetail;
use serde::{Deserialize, Serialize};

/// Response object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListEnterpriseProjectsForUserResponse {
    /// Enterprise projects the user belongs to.
    #[serde(rename = "enterprise-projects", skip_serializing_if = "Option::is_none")]
    pub enterprise_projects: Option<Vec<ListEnterpriseProjectsResDetail>>,
    /// HTTP status code of the response (not part of the payload)
    #[serde(skip)]
    pub http_status_code: u16,
}

impl ListEnterpriseProjectsForUserResponse {
    /// Creates a new `ListEnterpriseProjectsForUserResponse`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enterprise_projects(mut self, enterprise_projects: Vec<ListEnterpriseProjectsResDetail>) -> Self {
        self.enterprise_projects = Some(enterprise_projects);
        self
    }
}

impl fmt::Display for ListEnterpriseProjectsForUserResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cirrus_core::model::describe(f, "ListEnterpriseProjectsForUserResponse", self)
    }
}
