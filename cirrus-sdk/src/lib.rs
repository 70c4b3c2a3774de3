//! Cirrus SDK
//!
//! Request and response models for the Cirrus cloud services, generated by
//! cirrus-codegen from the definitions under `schemas/`.
//!
//! ## Module Structure
//!
//! - `cci` - Cloud Container Instance (v1)
//! - `iam` - Identity and Access Management (v3)
//! - `rds` - Relational Database Service (v3)
//!
//! Enum-valued fields use open enums from `cirrus_core`: values the
//! service adds later still decode, they just don't match a known constant.

pub mod cci;
pub mod iam;
pub mod rds;

// Re-export the codec traits needed to work with enum fields
pub use cirrus_core::{DecodeError, EnumCodec, OpenEnum};
