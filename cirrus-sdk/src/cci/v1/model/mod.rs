//! CCI v1 models
//!
//! DO NOT EDIT the model files manually - regenerate with:
//!   ./scripts/generate-models.sh cci/v1

pub mod list_namespaces_response;
pub mod namespace;
pub mod namespace_annotations;
pub mod namespace_labels;
pub mod namespace_metadata;
pub mod namespace_status;

pub use list_namespaces_response::ListNamespacesResponse;
pub use namespace::Namespace;
pub use namespace_annotations::{NamespaceAnnotations, NamespaceAnnotationsFlavor};
pub use namespace_labels::NamespaceLabels;
pub use namespace_metadata::NamespaceMetadata;
pub use namespace_status::{NamespaceStatus, NamespaceStatusPhase};

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::OpenEnum;

    const LIST: &str = r#"{
        "apiVersion": "v1",
        "kind": "NamespaceList",
        "items": [
            {
                "metadata": {
                    "name": "gpu-ns",
                    "uid": "3c7d2a10",
                    "creationTimestamp": "2021-05-20T08:12:43Z",
                    "labels": {
                        "sys_enterprise_project_id": "0",
                        "rbac.authorization.k8s.io/enable": "true"
                    },
                    "annotations": {
                        "namespace.kubernetes.io/flavor": "gpu-accelerated",
                        "network.cci.io/warm-pool-size": "10",
                        "network.cci.io/warm-pool-recycle-interval": "24"
                    }
                },
                "status": { "phase": "Active" }
            },
            {
                "metadata": {
                    "name": "batch",
                    "annotations": { "namespace.kubernetes.io/flavor": "arm-computing" }
                },
                "status": { "phase": "Terminating" }
            }
        ]
    }"#;

    #[test]
    fn test_list_namespaces() {
        let list: ListNamespacesResponse = serde_json::from_str(LIST).unwrap();
        assert_eq!(list.kind.as_deref(), Some("NamespaceList"));
        assert_eq!(list.items.len(), 2);

        let gpu = &list.items[0];
        let annotations = gpu.metadata.annotations.as_ref().unwrap();
        assert_eq!(
            annotations.flavor,
            Some(NamespaceAnnotationsFlavor::GPU_ACCELERATED)
        );
        assert_eq!(annotations.warmup_pool_size.as_deref(), Some("10"));
        assert_eq!(annotations.recycling_interval.as_deref(), Some("24"));
        let labels = gpu.metadata.labels.as_ref().unwrap();
        assert_eq!(labels.enterprise_project_id.as_deref(), Some("0"));
        assert_eq!(labels.rbac_enabled.as_deref(), Some("true"));
        assert_eq!(
            gpu.status.as_ref().and_then(|s| s.phase.clone()),
            Some(NamespaceStatusPhase::ACTIVE)
        );
    }

    #[test]
    fn test_unknown_flavor_is_preserved() {
        let list: ListNamespacesResponse = serde_json::from_str(LIST).unwrap();
        let flavor = list.items[1]
            .metadata
            .annotations
            .as_ref()
            .and_then(|a| a.flavor.clone())
            .unwrap();
        assert_eq!(flavor.as_str(), "arm-computing");
        assert_eq!(flavor.symbol(), None);

        // Forwarding the namespace keeps the raw value
        let json = serde_json::to_value(&list.items[1]).unwrap();
        assert_eq!(
            json["metadata"]["annotations"]["namespace.kubernetes.io/flavor"],
            "arm-computing"
        );
    }

    #[test]
    fn test_phase_is_case_sensitive() {
        let status: NamespaceStatus = serde_json::from_str(r#"{"phase":"active"}"#).unwrap();
        let phase = status.phase.unwrap();
        assert_ne!(phase, NamespaceStatusPhase::ACTIVE);
        assert!(!phase.is_known());
    }

    #[test]
    fn test_new_namespace_serializes_only_set_fields() {
        let namespace = Namespace::new(NamespaceMetadata::new("dev".to_string()).with_annotations(
            NamespaceAnnotations::new().with_flavor(NamespaceAnnotationsFlavor::GENERAL_COMPUTING),
        ));
        assert_eq!(
            serde_json::to_string(&namespace).unwrap(),
            r#"{"metadata":{"name":"dev","annotations":{"namespace.kubernetes.io/flavor":"general-computing"}}}"#
        );
    }

    #[test]
    fn test_namespace_requires_metadata() {
        let err = serde_json::from_str::<Namespace>(r#"{"kind":"Namespace"}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("missing field `metadata`"), "{}", err);
    }
}
