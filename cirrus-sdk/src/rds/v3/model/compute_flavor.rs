//! ComputeFlavor model for the RDS v3 API
//!
//! Auto-generated from model definition: rds/v3/ComputeFlavor
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::fmt;

use serde::{Deserialize, Serialize};

/// `ComputeFlavor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeFlavor {
    /// Flavor ID.
    pub id: String,
    /// Number of vCPUs.
    pub vcpus: String,
    /// Memory size in GB.
    pub ram: i32,
    /// Resource specification code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_code: Option<String>,
}

impl ComputeFlavor {
    /// Creates a new `ComputeFlavor`
    pub fn new(id: String, vcpus: String, ram: i32) -> Self {
        Self {
            id,
            vcpus,
            ram,
            spec_code: None,
        }
    }

    pub fn with_spec_code(mut self, spec_code: String) -> Self {
        self.spec_code = Some(spec_code);
        self
    }
}

impl fmt::Display for ComputeFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cirrus_core::model::describe(f, "ComputeFlavor", self)
    }
}
