// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Construction of the cluster secret mirrored to the hub

use crate::constants::labels;
use crate::error::Result;
use crate::labels::sanitize_label_value;
use crate::types::NamespacedName;
use k8s_openapi::api::core::v1::Secret;
use kube::api::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, error};
use url::Url;

/// Connection config consumed by the aggregation tool
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    pub bearer_token: String,
    pub tls_client_config: TlsClientConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TlsClientConfig {
    pub insecure: bool,
}

impl ClusterConfig {
    pub fn insecure(token: &str) -> Self {
        Self {
            bearer_token: token.to_string(),
            tls_client_config: TlsClientConfig { insecure: true },
        }
    }
}

/// Build the `<name>-cluster-secret` for `identity` carrying `token` and `server`.
///
/// An empty or unparseable `server` only drops the cluster-server label.
pub fn build_cluster_secret(identity: &NamespacedName, token: &str, server: &str) -> Result<Secret> {
    let config = serde_json::to_string_pretty(&ClusterConfig::insecure(token))?;

    let string_data = BTreeMap::from([
        ("name".to_string(), identity.name.clone()),
        ("server".to_string(), server.to_string()),
        ("config".to_string(), config),
    ]);

    let secret_labels = cluster_secret_labels(identity, server);
    debug!("Cluster secret labels: {:?}", secret_labels);

    Ok(Secret {
        metadata: ObjectMeta {
            name: Some(identity.cluster_secret_name()),
            namespace: Some(identity.namespace.clone()),
            labels: Some(secret_labels),
            ..Default::default()
        },
        string_data: Some(string_data),
        ..Default::default()
    })
}

fn cluster_secret_labels(identity: &NamespacedName, server: &str) -> BTreeMap<String, String> {
    let mut secret_labels = BTreeMap::from([
        (
            labels::ARGOCD_SECRET_TYPE.to_string(),
            labels::ARGOCD_SECRET_TYPE_VALUE.to_string(),
        ),
        (
            labels::ACM_SECRET_TYPE.to_string(),
            labels::ACM_SECRET_TYPE_VALUE.to_string(),
        ),
        (labels::CLUSTER_NAME.to_string(), identity.name.clone()),
    ]);

    match server_label(server) {
        Some(value) => {
            secret_labels.insert(labels::CLUSTER_SERVER.to_string(), value);
        }
        None => error!("Invalid hostname in the API URL: '{}'", server),
    }

    secret_labels
}

/// Label value derived from the host of the API server URL
pub fn server_label(server: &str) -> Option<String> {
    let host = match Url::parse(server) {
        Ok(url) => url.host_str().unwrap_or_default().to_string(),
        Err(e) => {
            error!("Failed to parse API server URL '{}': {}", server, e);
            return None;
        }
    };

    Some(sanitize_label_value(&host)).filter(|v| !v.is_empty())
}
