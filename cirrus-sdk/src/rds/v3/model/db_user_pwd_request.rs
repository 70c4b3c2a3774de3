//! DbUserPwdRequest model for the RDS v3 API
//!
//! Auto-generated from model definition: rds/v3/DbUserPwdRequest
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::fmt;

use serde::{Deserialize, Serialize};

/// `DbUserPwdRequest`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbUserPwdRequest {
    /// Database username.
    pub name: String,
    /// New password of the database user.
    pub password: String,
}

impl DbUserPwdRequest {
    /// Creates a new `DbUserPwdRequest`
    pub fn new(name: String, password: String) -> Self {
        Self {
            name,
            password,
        }
    }
}

impl fmt::Display for DbUserPwdRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cirrus_core::model::describe(f, "DbUserPwdRequest", self)
    }
}
