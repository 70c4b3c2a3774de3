//! Cloud Container Instance

pub mod v1;
