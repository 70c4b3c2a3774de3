//! Relational Database Service

pub mod v3;
