//! UpdateCredentialOption model for the IAM v3 API
//!
//! Auto-generated from model definition: iam/v3/UpdateCredentialOption
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::fmt;

use cirrus_core::open_enum;
use serde::{Deserialize, Serialize};

/// `UpdateCredentialOption`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCredentialOption {
    /// Access key status: “active” (enabled) or “inactive” (disabled).
    /// At least one of status and description must be set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UpdateCredentialOptionStatus>,
    /// Access key description.
    /// At least one of status and description must be set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateCredentialOption {
    /// Creates a new `UpdateCredentialOption`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: UpdateCredentialOptionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }
}

impl fmt::Display for UpdateCredentialOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cirrus_core::model::describe(f, "UpdateCredentialOption", self)
    }
}

open_enum! {
    /// Access key status: “active” (enabled) or “inactive” (disabled).
    /// At least one of status and description must be set.
    pub struct UpdateCredentialOptionStatus {
        ACTIVE = "active",
        INACTIVE = "inactive",
    }
}
