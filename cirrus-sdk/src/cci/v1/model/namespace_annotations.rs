//! NamespaceAnnotations model for the CCI v1 API
//!
//! Auto-generated from model definition: cci/v1/NamespaceAnnotations
//!
//! DO NOT EDIT MANUALLY - regenerate with cirrus-codegen

use std::fmt;

use cirrus_core::open_enum;
use serde::{Deserialize, Serialize};

/// `NamespaceAnnotations`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamespaceAnnotations {
    /// Namespace type.
    #[serde(rename = "namespace.kubernetes.io/flavor", skip_serializing_if = "Option::is_none")]
    pub flavor: Option<NamespaceAnnotationsFlavor>,
    /// Size of the IP address warm-up pool.
    #[serde(rename = "network.cci.io/warm-pool-size", skip_serializing_if = "Option::is_none")]
    pub warmup_pool_size: Option<String>,
    /// Recycling interval of idle warm-up IP addresses, in hours.
    #[serde(rename = "network.cci.io/warm-pool-recycle-interval", skip_serializing_if = "Option::is_none")]
    pub recycling_interval: Option<String>,
    /// Whether the container network must be ready before pods run.
    #[serde(rename = "network.cci.io/ready-before-pod-run", skip_serializing_if = "Option::is_none")]
    pub network_enable: Option<String>,
    /// Set to true when the namespace scales out automatically.
    #[serde(rename = "namespace.kubernetes.io/autoexpend", skip_serializing_if = "Option::is_none")]
    pub auto_expend: Option<String>,
}

impl NamespaceAnnotations {
    /// Creates a new `NamespaceAnnotations`
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flavor(mut self, flavor: NamespaceAnnotationsFlavor) -> Self {
        self.flavor = Some(flavor);
        self
    }

    pub fn with_warmup_pool_size(mut self, warmup_pool_size: String) -> Self {
        self.warmup_pool_size = Some(warmup_pool_size);
        self
    }

    pub fn with_recycling_interval(mut self, recycling_interval: String) -> Self {
        self.recycling_interval = Some(recycling_interval);
        self
    }

    pub fn with_network_enable(mut self, network_enable: String) -> Self {
        self.network_enable = Some(network_enable);
        self
    }

    pub fn with_auto_expend(mut self, auto_expend: String) -> Self {
        self.auto_expend = Some(auto_expend);
        self
    }
}

impl fmt::Display for NamespaceAnnotations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        cirrus_core::model::describe(f, "NamespaceAnnotations", self)
    }
}

open_enum! {
    /// Namespace type.
    pub struct NamespaceAnnotationsFlavor {
        GENERAL_COMPUTING = "general-computing",
        GPU_ACCELERATED = "gpu-accelerated",
    }
}
