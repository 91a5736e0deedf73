// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenSyncError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to build hub client: {0}")]
    KubeconfigError(String),

    #[error("Service account token not found: {0}")]
    TokenNotFound(String),

    #[error("Failed to resolve API server address: {0}")]
    ServerAddress(String),

    #[error("Failed to {action} secret {name} on the hub: {source}")]
    RemoteWrite {
        action: &'static str,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to serialize cluster config: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TokenSyncError>;

/// Check whether a kube error is an API 404
pub fn is_not_found(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(resp) if resp.code == 404)
}
