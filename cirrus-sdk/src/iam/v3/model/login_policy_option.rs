//! LoginPolicyOption model for the IAM v3 API
//!
//! Auto-generated from model definition: iam/v3/LoginPolicyOption
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::fmt;

use serde::{Deserialize, Serialize};

/// `LoginPolicyOption`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginPolicyOption {
    /// Accounts unused for this many days are disabled.
    pub account_validity_period: i32,
    /// Custom message shown on the login page.
    pub custom_info_for_login: String,
    /// Account lockout duration in minutes, in the range [15,30].
    pub lockout_duration: i32,
    /// Failed logins allowed within the failure period, in the range [3,10].
    pub login_failed_times: i32,
    /// Length of the login failure period in minutes, in the range [15,60].
    pub period_with_login_failures: i32,
    /// Login session timeout in minutes, in the range [15,1440].
    pub session_timeout: i32,
    /// Whether to show the most recent login information.
    pub show_recent_login_info: bool,
}

impl LoginPolicyOption {
    /// Creates a new `LoginPolicyOption`
    pub fn new(account_validity_period: i32, custom_info_for_login: String, lockout_duration: i32, login_failed_times: i32, period_with_login_failures: i32, session_timeout: i32, show_recent_login_info: bool) -> Self {
        Self {
            account_validity_period,
            custom_info_for_login,
            lockout_duration,
            login_failed_times,
            period_with_login_failures,
            session_timeout,
            show_recent_login_info,
        }
    }
}

impl fmt::Display for LoginPolicyOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cirrus_core::model::describe(f, "LoginPolicyOption", self)
    }
}
