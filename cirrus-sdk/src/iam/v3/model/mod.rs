//! IAM v3 models
//!
//! DO NOT EDIT the model files manually - regenerate with:
//!   ./scripts/generate-models.sh iam/v3

pub mod list_enterprise_projects_for_user_response;
pub mod list_enterprise_projects_res_detail;
pub mod login_policy_option;
pub mod update_credential_option;

pub use list_enterprise_projects_for_user_response::ListEnterpriseProjectsForUserResponse;
pub use list_enterprise_projects_res_detail::ListEnterpriseProjectsResDetail;
pub use login_policy_option::LoginPolicyOption;
pub use update_credential_option::{UpdateCredentialOption, UpdateCredentialOptionStatus};
