//! NamespaceStatus model for the CCI v1 API
//!
//! Auto-generated from model definition: cci/v1/NamespaceStatus
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::fmt;

use cirrus_core::open_enum;
use serde::{Deserialize, Serialize};

/// `NamespaceStatus`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamespaceStatus {
    /// Lifecycle phase of the namespace: “Active” or “Terminating”.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<NamespaceStatusPhase>,
}

impl NamespaceStatus {
    /// Creates a new `NamespaceStatus`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_phase(mut self, phase: NamespaceStatusPhase) -> Self {
        self.phase = Some(phase);
        self
    }
}

impl fmt::Display for NamespaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cirrus_core::model::describe(f, "NamespaceStatus", self)
    }
}

open_enum! {
    /// Lifecycle phase of the namespace: “Active” or “Terminating”.
    pub struct NamespaceStatusPhase {
        ACTIVE = "Active",
        TERMINATING = "Terminating",
    }
}
