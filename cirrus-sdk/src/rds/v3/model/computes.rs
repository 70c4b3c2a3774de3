//! Computes model for the RDS v3 API
//!
//! Auto-generated from model definition: rds/v3/Computes
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::fmt;

use super::ComputeFlavor;
use cirrus_core::open_enum;
use serde::{Deserialize, Serialize};

/// A group of compute flavors of the same type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Computes {
    /// Flavor group type.
    pub group_type: ComputesGroupType,
    /// Flavors in the group.
    pub compute_flavors: Vec<ComputeFlavor>,
}

impl Computes {
    /// Creates a new `Computes`
    pub fn new(group_type: ComputesGroupType, compute_flavors: Vec<ComputeFlavor>) -> Self {
        Self {
            group_type,
            compute_flavors,
        }
    }
}

impl fmt::Display for Computes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cirrus_core::model::describe(f, "Computes", self)
    }
}

open_enum! {
    /// Flavor group type.
    pub struct ComputesGroupType {
        NORMAL = "normal",
        DEDICATED = "dedicated",
        ARM_FLAVORS = "armFlavors",
    }
}
