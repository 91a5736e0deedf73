// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Hub cluster client creation from a kubeconfig

use crate::error::{TokenSyncError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{info, instrument};

/// Load the hub connection config from a kubeconfig file
#[instrument]
pub async fn load_hub_config(path: &Path) -> Result<KConfig> {
    info!("Loading hub kubeconfig from {}", path.display());

    let kubeconfig = tokio::fs::read_to_string(path).await.map_err(|e| {
        TokenSyncError::KubeconfigError(format!(
            "Failed to read hub kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    config_from_kubeconfig(&kubeconfig).await
}

/// Build a client config from a kubeconfig string
pub async fn config_from_kubeconfig(kubeconfig: &str) -> Result<KConfig> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| TokenSyncError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    KConfig::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
        .await
        .map_err(|e| TokenSyncError::KubeconfigError(format!("Failed to create config: {}", e)))
}

/// Create a hub client from its connection config
pub fn create_hub_client(config: KConfig) -> Result<Client> {
    let cluster_url = config.cluster_url.clone();
    let client = Client::try_from(config)
        .map_err(|e| TokenSyncError::KubeconfigError(format!("Failed to create client: {}", e)))?;

    info!("Created hub client for {}", cluster_url);
    Ok(client)
}
