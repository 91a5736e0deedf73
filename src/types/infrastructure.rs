// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// OpenShift cluster-wide infrastructure config (`config.openshift.io/v1`).
///
/// Only the status fields needed to publish the API endpoint are modelled.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "config.openshift.io", version = "v1", kind = "Infrastructure")]
#[kube(status = "InfrastructureStatus")]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_spec: Option<serde_json::Value>,
}

impl Infrastructure {
    /// Externally reachable API server URL, if published
    pub fn api_server_url(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|s| s.api_server_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureStatus {
    #[serde(rename = "apiServerURL", skip_serializing_if = "Option::is_none")]
    pub api_server_url: Option<String>,
    #[serde(rename = "apiServerInternalURI", skip_serializing_if = "Option::is_none")]
    pub api_server_internal_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infrastructure_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}
