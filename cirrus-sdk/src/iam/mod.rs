//! Identity and Access Management

pub mod v3;
