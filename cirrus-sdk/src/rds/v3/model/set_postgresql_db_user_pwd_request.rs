//! SetPostgresqlDbUserPwdRequest model for the RDS v3 API
//!
//! Auto-generated from model definition: rds/v3/SetPostgresqlDbUserPwdRequest
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::fmt;

use super::DbUserPwdRequest;
use cirrus_core::open_enum;
use serde::{Deserialize, Serialize};

/// Request object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPostgresqlDbUserPwdRequest {
    /// Language of the response messages.
    #[serde(rename = "X-Language", skip_serializing_if = "Option::is_none")]
    pub x_language: Option<SetPostgresqlDbUserPwdRequestXLanguage>,
    /// Instance ID.
    pub instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<DbUserPwdRequest>,
}

impl SetPostgresqlDbUserPwdRequest {
    /// Creates a new `SetPostgresqlDbUserPwdRequest`
    pub fn new(instance_id: String) -> Self {
        Self {
            x_language: None,
            instance_id,
            body: None,
        }
    }

    pub fn with_x_language(mut self, x_language: SetPostgresqlDbUserPwdRequestXLanguage) -> Self {
        self.x_language = Some(x_language);
        self
    }

    pub fn with_body(mut self, body: DbUserPwdRequest) -> Self {
        self.body = Some(body);
        self
    }
}

impl fmt::Display for SetPostgresqlDbUserPwdRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cirrus_core::model::describe(f, "SetPostgresqlDbUserPwdRequest", self)
    }
}

open_enum! {
    /// Language of the response messages.
    pub struct SetPostgresqlDbUserPwdRequestXLanguage {
        ZH_CN = "zh-cn",
        EN_US = "en-us",
    }
}
