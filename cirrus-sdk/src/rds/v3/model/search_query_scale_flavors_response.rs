//! SearchQueryScaleFlavorsResponse model for the RDS v3 API
//!
//! Auto-generated from model definition: rds/v3/SearchQueryScaleFlavorsResponse
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::fmt;

use super::Computes;
use serde::{Deserialize, Serialize};

/// Response object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQueryScaleFlavorsResponse {
    /// Compute flavor groups the instance can be scaled to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_flavor_groups: Option<Vec<Computes>>,
    /// HTTP status code of the response (not part of the payload)
    #[serde(skip)]
    pub http_status_code: u16,
}

impl SearchQueryScaleFlavorsResponse {
    /// Creates a new `SearchQueryScaleFlavorsResponse`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compute_flavor_groups(mut self, compute_flavor_groups: Vec<Computes>) -> Self {
        self.compute_flavor_groups = Some(compute_flavor_groups);
        self
    }
}

impl fmt::Display for SearchQueryScaleFlavorsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cirrus_core::model::describe(f, "SearchQueryScaleFlavorsResponse", self)
    }
}
