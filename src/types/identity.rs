// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::SECRET_SUFFIX;
use kube::ResourceExt;
use std::fmt;

/// A (name, namespace) pair.
///
/// Used both for the managed cluster identity and for reconcile trigger keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacedName {
    pub name: String,
    pub namespace: String,
}

impl NamespacedName {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Key of a namespaced object, `None` if it has no namespace
    pub fn of<K: ResourceExt>(obj: &K) -> Option<Self> {
        Some(Self::new(obj.name_any(), obj.namespace()?))
    }

    /// Name of the hub secret mirrored for this cluster identity
    pub fn cluster_secret_name(&self) -> String {
        format!("{}{}", self.name, SECRET_SUFFIX)
    }
}

impl fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::ServiceAccount;
    use kube::api::ObjectMeta;

    #[test]
    fn test_display_is_namespace_slash_name() {
        let id = NamespacedName::new("cluster1", "cluster1-ns");
        assert_eq!(id.to_string(), "cluster1-ns/cluster1");
    }

    #[test]
    fn test_cluster_secret_name() {
        let id = NamespacedName::new("cluster1", "cluster1-ns");
        assert_eq!(id.cluster_secret_name(), "cluster1-cluster-secret");
    }

    #[test]
    fn test_of_namespaced_object() {
        let sa = ServiceAccount {
            metadata: ObjectMeta {
                name: Some("application-manager".to_string()),
                namespace: Some("agent".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            NamespacedName::of(&sa),
            Some(NamespacedName::new("application-manager", "agent"))
        );
    }

    #[test]
    fn test_of_object_without_namespace() {
        let sa = ServiceAccount {
            metadata: ObjectMeta {
                name: Some("application-manager".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(NamespacedName::of(&sa), None);
    }
}
