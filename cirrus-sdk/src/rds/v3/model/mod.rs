//! RDS v3 models
//!
//! DO NOT EDIT the model files manually - regenerate with:
//!   ./scripts/generate-models.sh rds/v3

pub mod compute_flavor;
pub mod computes;
pub mod db_user_pwd_request;
pub mod search_query_scale_flavors_response;
pub mod set_postgresql_db_user_pwd_request;

pub use compute_flavor::ComputeFlavor;
pub use computes::{Computes, ComputesGroupType};
pub use db_user_pwd_request::DbUserPwdRequest;
pub use search_query_scale_flavors_response::SearchQueryScaleFlavorsResponse;
pub use set_postgresql_db_user_pwd_request::{
    SetPostgresqlDbUserPwdRequest, SetPostgresqlDbUserPwdRequestXLanguage,
};
